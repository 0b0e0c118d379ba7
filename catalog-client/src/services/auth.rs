use reqwest::Method;

use catalog_models::{AccessTokenData, SignInRequest, SignUpRequest};

use crate::error::CatalogClientResult;
use crate::http::CatalogClient;

impl CatalogClient {
    /// Вход по email и паролю. Полученный access token сохраняется в
    /// клиенте, refresh token оседает в cookie store.
    pub async fn sign_in(&self, request: &SignInRequest) -> CatalogClientResult<()> {
        let data: AccessTokenData = self
            .send_json(Method::POST, "/auth/sign-in", request)
            .await?;
        self.set_token(data.access_token);
        Ok(())
    }

    /// Регистрация. Токен не выдаётся: сперва нужно подтвердить email.
    pub async fn sign_up(&self, request: &SignUpRequest) -> CatalogClientResult<()> {
        self.send_json_empty(Method::POST, "/auth/sign-up", request)
            .await
    }

    /// Завершает сессию на сервере и сбрасывает локальный токен.
    pub async fn logout(&self) -> CatalogClientResult<()> {
        let result = self.send_empty(Method::POST, "/auth/logout", None).await;
        self.clear_token();
        result
    }

    /// URL начала OAuth-потока у выбранного провайдера. Переход по нему —
    /// полная навигация браузера, не XHR.
    pub fn oauth_url(&self, provider: &str) -> String {
        format!(
            "{}/auth/{provider}",
            self.base_url().trim_end_matches('/')
        )
    }

    /// Завершение OAuth-потока: параметры обратного вызова передаются
    /// провайдерскому эндпоинту как есть, access token сохраняется.
    pub async fn oauth_callback(
        &self,
        provider: &str,
        raw_query: &str,
    ) -> CatalogClientResult<()> {
        let raw_query = raw_query.trim_start_matches('?');
        let data: AccessTokenData = self
            .get_data(
                &format!("/auth/{provider}/callback?{raw_query}"),
                None,
            )
            .await?;
        self.set_token(data.access_token);
        Ok(())
    }
}
