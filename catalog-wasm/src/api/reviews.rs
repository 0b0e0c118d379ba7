use gloo_net::http::Method;

use catalog_models::{CreateReviewRequest, Review, UpdateReviewRequest};

use super::{get_list, send_empty, send_json_empty, ApiError};

/// Отзывы на фильм.
pub(crate) async fn by_film(film_id: u32) -> Result<Vec<Review>, ApiError> {
    get_list(&format!("/reviews/film/{film_id}")).await
}

/// Отзывы текущего пользователя.
pub(crate) async fn own() -> Result<Vec<Review>, ApiError> {
    get_list("/reviews/user").await
}

/// Создаёт отзыв от имени текущего пользователя.
pub(crate) async fn create(request: &CreateReviewRequest) -> Result<(), ApiError> {
    send_json_empty(Method::POST, "/reviews", request).await
}

/// Обновляет отзыв.
pub(crate) async fn update(id: u32, request: &UpdateReviewRequest) -> Result<(), ApiError> {
    send_json_empty(Method::PUT, &format!("/reviews/{id}"), request).await
}

/// Удаляет отзыв.
pub(crate) async fn delete(id: u32) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &format!("/reviews/{id}")).await
}
