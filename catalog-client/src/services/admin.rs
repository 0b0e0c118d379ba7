use reqwest::Method;
use reqwest::multipart::Form;
use serde::Serialize;

use catalog_models::{
    Actor, ActorPayload, CreateReviewRequest, Film, FilmPayload, Genre, GenrePayload, Review,
    UpdateReviewRequest, User,
};

use crate::error::{CatalogClientError, CatalogClientResult};
use crate::http::{upload_part, CatalogClient, Query, Upload};

#[derive(Debug, Serialize)]
struct AdminReviewUpdateDto<'a> {
    review_id: u32,
    rating: u8,
    review_text: &'a str,
}

fn ids_query(ids: &[u32]) -> Query {
    let joined = ids
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    vec![("ids", joined)]
}

/// Административные операции. Все требуют access token пользователя
/// с признаком администратора; сервер проверяет права сам.
impl CatalogClient {
    /// Полный список фильмов без пагинации.
    pub async fn admin_films(&self) -> CatalogClientResult<Vec<Film>> {
        self.get_list("/admin/films", None).await
    }

    /// Создаёт фильм: JSON-поле `data` плюс опциональный постер.
    pub async fn create_film(
        &self,
        payload: &FilmPayload,
        poster: Option<&Upload>,
    ) -> CatalogClientResult<()> {
        let data = serde_json::to_string(payload)
            .map_err(|err| CatalogClientError::InvalidRequest(err.to_string()))?;
        self.send_multipart_empty(Method::POST, "/admin/films", None, move || {
            let mut form = Form::new().text("data", data.clone());
            if let Some(poster) = poster {
                form = form.part("poster", upload_part(poster));
            }
            form
        })
        .await
    }

    /// Обновляет фильм по идентификатору.
    pub async fn update_film(
        &self,
        id: u32,
        payload: &FilmPayload,
        poster: Option<&Upload>,
    ) -> CatalogClientResult<()> {
        let data = serde_json::to_string(payload)
            .map_err(|err| CatalogClientError::InvalidRequest(err.to_string()))?;
        self.send_multipart_empty(Method::PUT, &format!("/admin/films/{id}"), None, move || {
            let mut form = Form::new().text("data", data.clone());
            if let Some(poster) = poster {
                form = form.part("poster", upload_part(poster));
            }
            form
        })
        .await
    }

    /// Удаляет фильм.
    pub async fn delete_film(&self, id: u32) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/admin/films/{id}"), None)
            .await
    }

    /// Массовое удаление фильмов по списку идентификаторов.
    pub async fn delete_films(&self, ids: &[u32]) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, "/admin/films", Some(&ids_query(ids)))
            .await
    }

    /// Полный список актёров без пагинации.
    pub async fn admin_actors(&self) -> CatalogClientResult<Vec<Actor>> {
        self.get_list("/admin/actors", None).await
    }

    /// Создаёт актёра: JSON-поле `json` плюс опциональный аватар.
    pub async fn create_actor(
        &self,
        payload: &ActorPayload,
        avatar: Option<&Upload>,
        reset_avatar: bool,
    ) -> CatalogClientResult<()> {
        let json = serde_json::to_string(payload)
            .map_err(|err| CatalogClientError::InvalidRequest(err.to_string()))?;
        self.send_multipart_empty(Method::POST, "/admin/actors", None, move || {
            let mut form = Form::new().text("json", json.clone());
            if let Some(avatar) = avatar {
                form = form.part("avatar", upload_part(avatar));
            }
            if reset_avatar {
                form = form.text("reset_avatar", "true");
            }
            form
        })
        .await
    }

    /// Обновляет актёра по идентификатору.
    pub async fn update_actor(
        &self,
        id: u32,
        payload: &ActorPayload,
        avatar: Option<&Upload>,
        reset_avatar: bool,
    ) -> CatalogClientResult<()> {
        let json = serde_json::to_string(payload)
            .map_err(|err| CatalogClientError::InvalidRequest(err.to_string()))?;
        self.send_multipart_empty(
            Method::PUT,
            &format!("/admin/actors/{id}"),
            None,
            move || {
                let mut form = Form::new().text("json", json.clone());
                if let Some(avatar) = avatar {
                    form = form.part("avatar", upload_part(avatar));
                }
                if reset_avatar {
                    form = form.text("reset_avatar", "true");
                }
                form
            },
        )
        .await
    }

    /// Удаляет актёра.
    pub async fn delete_actor(&self, id: u32) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/admin/actors/{id}"), None)
            .await
    }

    /// Массовое удаление актёров.
    pub async fn delete_actors(&self, ids: &[u32]) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, "/admin/actors", Some(&ids_query(ids)))
            .await
    }

    /// Полный список жанров.
    pub async fn admin_genres(&self) -> CatalogClientResult<Vec<Genre>> {
        self.get_list("/admin/genres", None).await
    }

    /// Создаёт жанр.
    pub async fn create_genre(&self, payload: &GenrePayload) -> CatalogClientResult<()> {
        self.send_json_empty(Method::POST, "/admin/genres", payload)
            .await
    }

    /// Обновляет жанр; идентификатор передаётся в теле.
    pub async fn update_genre(&self, payload: &GenrePayload) -> CatalogClientResult<()> {
        self.send_json_empty(Method::PUT, "/admin/genres", payload)
            .await
    }

    /// Удаляет жанр.
    pub async fn delete_genre(&self, id: u32) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/admin/genres/{id}"), None)
            .await
    }

    /// Полный список отзывов.
    pub async fn admin_reviews(&self) -> CatalogClientResult<Vec<Review>> {
        self.get_list("/admin/reviews", None).await
    }

    /// Создаёт отзыв от имени администратора.
    pub async fn create_admin_review(
        &self,
        request: &CreateReviewRequest,
    ) -> CatalogClientResult<()> {
        self.send_json_empty(Method::POST, "/admin/reviews", request)
            .await
    }

    /// Обновляет произвольный отзыв; идентификатор передаётся в теле.
    pub async fn update_admin_review(
        &self,
        review_id: u32,
        request: &UpdateReviewRequest,
    ) -> CatalogClientResult<()> {
        let payload = AdminReviewUpdateDto {
            review_id,
            rating: request.rating,
            review_text: &request.review_text,
        };
        self.send_json_empty(Method::PUT, "/admin/reviews", &payload)
            .await
    }

    /// Удаляет отзыв.
    pub async fn delete_admin_review(&self, id: u32) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/admin/reviews/{id}"), None)
            .await
    }

    /// Полный список пользователей.
    pub async fn admin_users(&self) -> CatalogClientResult<Vec<User>> {
        self.get_list("/admin/users", None).await
    }

    /// Удаляет пользователя.
    pub async fn delete_user(&self, id: u32) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, &format!("/admin/users/{id}"), None)
            .await
    }

    /// Массовое удаление пользователей.
    pub async fn delete_users(&self, ids: &[u32]) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, "/admin/users", Some(&ids_query(ids)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_query_joins_with_commas() {
        let query = ids_query(&[1, 2, 30]);
        assert_eq!(query, vec![("ids", "1,2,30".to_string())]);
    }
}
