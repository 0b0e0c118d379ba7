use gloo_net::http::Method;

use catalog_models::{AccessTokenData, SignInRequest, SignUpRequest};

use super::{endpoint, get_data, send_empty, send_json, send_json_empty, ApiError};

/// Вход по email и паролю. Возвращает access token; refresh token
/// сервер кладёт в cookie сам.
pub(crate) async fn sign_in(request: &SignInRequest) -> Result<String, ApiError> {
    let data: AccessTokenData = send_json(Method::POST, "/auth/sign-in", request).await?;
    Ok(data.access_token)
}

/// Регистрация. Токен не выдаётся: сперва нужно подтвердить email.
pub(crate) async fn sign_up(request: &SignUpRequest) -> Result<(), ApiError> {
    send_json_empty(Method::POST, "/auth/sign-up", request).await
}

/// Завершает сессию на сервере.
pub(crate) async fn logout() -> Result<(), ApiError> {
    send_empty(Method::POST, "/auth/logout").await
}

/// Начало OAuth-потока: полная навигация на провайдерский эндпоинт.
pub(crate) fn oauth_start(provider: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window
            .location()
            .set_href(&endpoint(&format!("/auth/{provider}")));
    }
}

/// Завершение OAuth-потока: параметры обратного вызова передаются
/// эндпоинту провайдера как есть.
pub(crate) async fn oauth_callback(provider: &str, raw_query: &str) -> Result<String, ApiError> {
    let raw_query = raw_query.trim_start_matches('?');
    let data: AccessTokenData =
        get_data(&format!("/auth/{provider}/callback?{raw_query}")).await?;
    Ok(data.access_token)
}
