use reqwest::Method;
use serde::Serialize;

use crate::error::CatalogClientResult;
use crate::http::CatalogClient;

#[derive(Debug, Serialize)]
struct SendCodeDto<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct ConfirmEmailDto<'a> {
    email: &'a str,
    code: &'a str,
}

impl CatalogClient {
    /// Отправляет код подтверждения на почту.
    pub async fn send_confirmation_code(&self, email: &str) -> CatalogClientResult<()> {
        let payload = SendCodeDto { email };
        self.send_json_empty(Method::POST, "/email/send-code", &payload)
            .await
    }

    /// Подтверждает почту присланным кодом.
    pub async fn confirm_email(&self, email: &str, code: &str) -> CatalogClientResult<()> {
        let payload = ConfirmEmailDto { email, code };
        self.send_json_empty(Method::PUT, "/email/confirm", &payload)
            .await
    }
}
