//! Административные эндпоинты. Сервер сам проверяет признак
//! администратора по токену.

use gloo_net::http::Method;

use catalog_models::{Actor, Film, FilmPayload, Genre, Review, User};

use super::{get_list, send_empty, send_form_empty, ApiError};

fn ids_path(resource: &str, ids: &[u32]) -> String {
    let joined = ids
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("/admin/{resource}?ids={joined}")
}

/// Multipart-форма фильма: JSON-поле `data` плюс опциональный постер.
fn film_form(
    payload: &FilmPayload,
    poster: Option<&web_sys::File>,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("не удалось создать FormData".to_string()))?;
    let data =
        serde_json::to_string(payload).map_err(|err| ApiError::Decode(err.to_string()))?;
    form.append_with_str("data", &data)
        .map_err(|_| ApiError::Network("не удалось собрать форму".to_string()))?;
    if let Some(file) = poster {
        form.append_with_blob_and_filename("poster", file, &file.name())
            .map_err(|_| ApiError::Network("не удалось приложить постер".to_string()))?;
    }
    Ok(form)
}

pub(crate) async fn films() -> Result<Vec<Film>, ApiError> {
    get_list("/admin/films").await
}

pub(crate) async fn create_film(
    payload: &FilmPayload,
    poster: Option<web_sys::File>,
) -> Result<(), ApiError> {
    let form = film_form(payload, poster.as_ref())?;
    send_form_empty(Method::POST, "/admin/films", form).await
}

pub(crate) async fn update_film(
    id: u32,
    payload: &FilmPayload,
    poster: Option<web_sys::File>,
) -> Result<(), ApiError> {
    let form = film_form(payload, poster.as_ref())?;
    send_form_empty(Method::PUT, &format!("/admin/films/{id}"), form).await
}

pub(crate) async fn delete_film(id: u32) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &format!("/admin/films/{id}")).await
}

pub(crate) async fn delete_films(ids: &[u32]) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &ids_path("films", ids)).await
}

pub(crate) async fn actors() -> Result<Vec<Actor>, ApiError> {
    get_list("/admin/actors").await
}

pub(crate) async fn delete_actor(id: u32) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &format!("/admin/actors/{id}")).await
}

pub(crate) async fn delete_actors(ids: &[u32]) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &ids_path("actors", ids)).await
}

pub(crate) async fn genres() -> Result<Vec<Genre>, ApiError> {
    get_list("/admin/genres").await
}

pub(crate) async fn delete_genre(id: u32) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &format!("/admin/genres/{id}")).await
}

pub(crate) async fn delete_genres(ids: &[u32]) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &ids_path("genres", ids)).await
}

pub(crate) async fn reviews() -> Result<Vec<Review>, ApiError> {
    get_list("/admin/reviews").await
}

pub(crate) async fn delete_review(id: u32) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &format!("/admin/reviews/{id}")).await
}

pub(crate) async fn delete_reviews(ids: &[u32]) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &ids_path("reviews", ids)).await
}

pub(crate) async fn users() -> Result<Vec<User>, ApiError> {
    get_list("/admin/users").await
}

pub(crate) async fn delete_user(id: u32) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &format!("/admin/users/{id}")).await
}

pub(crate) async fn delete_users(ids: &[u32]) -> Result<(), ApiError> {
    send_empty(Method::DELETE, &ids_path("users", ids)).await
}
