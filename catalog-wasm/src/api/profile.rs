use gloo_net::http::Method;

use catalog_models::{ProfileUpdate, User};

use super::{get_data, send_empty, send_form_empty, ApiError};

/// Профиль текущего пользователя.
pub(crate) async fn get() -> Result<User, ApiError> {
    get_data("/profile").await
}

/// Обновляет профиль: JSON-поле `json` плюс опциональный аватар и флаг
/// сброса аватара к заглушке.
pub(crate) async fn update(
    update: &ProfileUpdate,
    avatar: Option<web_sys::File>,
    reset_avatar: bool,
) -> Result<(), ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("не удалось создать FormData".to_string()))?;
    let json =
        serde_json::to_string(update).map_err(|err| ApiError::Decode(err.to_string()))?;
    form.append_with_str("json", &json)
        .map_err(|_| ApiError::Network("не удалось собрать форму".to_string()))?;
    if let Some(file) = avatar {
        form.append_with_blob_and_filename("avatar", &file, &file.name())
            .map_err(|_| ApiError::Network("не удалось приложить аватар".to_string()))?;
    }
    if reset_avatar {
        let _ = form.append_with_str("reset_avatar", "true");
    }
    send_form_empty(Method::PUT, "/profile", form).await
}

/// Удаляет профиль текущего пользователя.
pub(crate) async fn delete() -> Result<(), ApiError> {
    send_empty(Method::DELETE, "/profile").await
}
