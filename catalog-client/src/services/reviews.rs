use reqwest::Method;

use catalog_models::{CreateReviewRequest, Review, UpdateReviewRequest};

use crate::error::CatalogClientResult;
use crate::http::CatalogClient;

impl CatalogClient {
    /// Отзывы на фильм.
    pub async fn reviews_by_film(&self, film_id: u32) -> CatalogClientResult<Vec<Review>> {
        self.get_list(&format!("/reviews/film/{film_id}"), None)
            .await
    }

    /// Отзыв по идентификатору.
    pub async fn review(&self, id: u32) -> CatalogClientResult<Review> {
        self.get_data(&format!("/reviews/{id}"), None).await
    }

    /// Отзывы текущего пользователя. Требует установленный access token.
    pub async fn my_reviews(&self) -> CatalogClientResult<Vec<Review>> {
        self.get_list("/reviews/user", None).await
    }

    /// Создаёт отзыв от имени текущего пользователя.
    pub async fn create_review(&self, request: &CreateReviewRequest) -> CatalogClientResult<()> {
        self.send_json_empty(Method::POST, "/reviews", request).await
    }

    /// Обновляет отзыв по идентификатору.
    pub async fn update_review(
        &self,
        id: u32,
        request: &UpdateReviewRequest,
    ) -> CatalogClientResult<()> {
        self.send_json_empty(Method::PUT, &format!("/reviews/{id}"), request)
            .await
    }

    /// Удаляет отзыв по идентификатору.
    pub async fn delete_review(&self, id: u32) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/reviews/{id}"), None)
            .await
    }
}
