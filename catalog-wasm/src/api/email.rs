use gloo_net::http::Method;
use serde::Serialize;

use super::{send_json_empty, ApiError};

#[derive(Serialize)]
struct SendCodeDto<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ConfirmEmailDto<'a> {
    email: &'a str,
    code: &'a str,
}

/// Отправляет код подтверждения на почту.
pub(crate) async fn send_code(email: &str) -> Result<(), ApiError> {
    send_json_empty(Method::POST, "/email/send-code", &SendCodeDto { email }).await
}

/// Подтверждает почту присланным кодом.
pub(crate) async fn confirm(email: &str, code: &str) -> Result<(), ApiError> {
    send_json_empty(Method::PUT, "/email/confirm", &ConfirmEmailDto { email, code }).await
}
