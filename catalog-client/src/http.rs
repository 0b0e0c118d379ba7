use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use catalog_models::{AccessTokenData, ApiResponse};

use crate::error::{CatalogClientError, CatalogClientResult};

/// Пары `ключ=значение` строки запроса.
pub(crate) type Query = Vec<(&'static str, String)>;

#[derive(Debug, Clone)]
/// Файл для multipart-загрузки (постер фильма, аватар).
pub struct Upload {
    /// Имя файла, попадает в заголовок части.
    pub file_name: String,
    /// Содержимое файла.
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент каталога фильмов.
///
/// Хранит access token после входа и подставляет его bearer-заголовком.
/// Refresh token живёт в cookie и обслуживается cookie store `reqwest`.
pub struct CatalogClient {
    base_url: String,
    client: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl CatalogClient {
    /// Создаёт новый клиент с базовым URL каталога.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Устанавливает access token вручную.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    /// Возвращает текущий access token, если он установлен.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    /// Очищает сохранённый access token.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Базовый URL каталога.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> CatalogClientError {
        let status = response.status();

        let message = match response.json::<ApiResponse<serde_json::Value>>().await {
            Ok(envelope) => envelope.error,
            Err(_) => None,
        };
        CatalogClientError::from_http_status(status, message)
    }

    /// Единая точка отправки запросов.
    ///
    /// На первый 401 отвечает одним обновлением access token и одним
    /// повтором исходного запроса; флаг `retried` исключает циклы.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<&B>,
    ) -> CatalogClientResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let mut retried = false;
        loop {
            let mut request = self.client.request(method.clone(), self.endpoint(path));
            if let Some(query) = query {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }
            if let Some(token) = self.token() {
                request = request.bearer_auth(token);
            }

            let response = request
                .send()
                .await
                .map_err(CatalogClientError::from_reqwest)?;

            if response.status() == StatusCode::UNAUTHORIZED && !retried {
                retried = true;
                self.refresh_access_token().await?;
                continue;
            }
            if !response.status().is_success() {
                return Err(Self::decode_error(response).await);
            }
            return Ok(response);
        }
    }

    /// То же, что [`CatalogClient::dispatch`], но с multipart-телом.
    /// `make_form` вызывается на каждую попытку: форму нельзя переиспользовать.
    async fn dispatch_multipart<F>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        make_form: F,
    ) -> CatalogClientResult<reqwest::Response>
    where
        F: Fn() -> Form,
    {
        let mut retried = false;
        loop {
            let mut request = self
                .client
                .request(method.clone(), self.endpoint(path))
                .multipart(make_form());
            if let Some(query) = query {
                request = request.query(query);
            }
            if let Some(token) = self.token() {
                request = request.bearer_auth(token);
            }

            let response = request
                .send()
                .await
                .map_err(CatalogClientError::from_reqwest)?;

            if response.status() == StatusCode::UNAUTHORIZED && !retried {
                retried = true;
                self.refresh_access_token().await?;
                continue;
            }
            if !response.status().is_success() {
                return Err(Self::decode_error(response).await);
            }
            return Ok(response);
        }
    }

    /// Обновляет access token по refresh-cookie.
    ///
    /// Неудача фатальна для сессии: токен сбрасывается, вызывающему
    /// возвращается `Unauthorized`.
    async fn refresh_access_token(&self) -> CatalogClientResult<()> {
        let response = self
            .client
            .post(self.endpoint("/auth/refresh-token"))
            .send()
            .await
            .map_err(CatalogClientError::from_reqwest)?;

        if !response.status().is_success() {
            self.clear_token();
            return Err(CatalogClientError::Unauthorized);
        }

        let envelope = response
            .json::<ApiResponse<AccessTokenData>>()
            .await
            .map_err(CatalogClientError::from_reqwest)?;
        let data = envelope
            .into_data()
            .map_err(CatalogClientError::InvalidRequest)?;
        self.set_token(data.access_token);
        Ok(())
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> CatalogClientResult<T> {
        let envelope = response
            .json::<ApiResponse<T>>()
            .await
            .map_err(CatalogClientError::from_reqwest)?;
        envelope
            .into_data()
            .map_err(CatalogClientError::InvalidRequest)
    }

    async fn unwrap_envelope_or_default<T: DeserializeOwned + Default>(
        response: reqwest::Response,
    ) -> CatalogClientResult<T> {
        let envelope = response
            .json::<ApiResponse<T>>()
            .await
            .map_err(CatalogClientError::from_reqwest)?;
        envelope
            .into_data_or_default()
            .map_err(CatalogClientError::InvalidRequest)
    }

    pub(crate) async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Query>,
    ) -> CatalogClientResult<T> {
        let response = self.dispatch(Method::GET, path, query, None::<&()>).await?;
        Self::unwrap_envelope(response).await
    }

    /// GET списочного эндпоинта: `data: null` превращается в пустой список.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Query>,
    ) -> CatalogClientResult<Vec<T>> {
        let response = self.dispatch(Method::GET, path, query, None::<&()>).await?;
        Self::unwrap_envelope_or_default(response).await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> CatalogClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(method, path, None, Some(body)).await?;
        Self::unwrap_envelope(response).await
    }

    pub(crate) async fn send_json_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> CatalogClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, None, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn send_empty(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
    ) -> CatalogClientResult<()> {
        self.dispatch(method, path, query, None::<&()>).await?;
        Ok(())
    }

    pub(crate) async fn send_multipart_empty<F>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        make_form: F,
    ) -> CatalogClientResult<()>
    where
        F: Fn() -> Form,
    {
        self.dispatch_multipart(method, path, query, make_form)
            .await?;
        Ok(())
    }
}

/// Часть multipart-формы из загружаемого файла.
pub(crate) fn upload_part(upload: &Upload) -> Part {
    Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = CatalogClient::new("http://localhost:8080/v1/");
        let full = client.endpoint("/films");
        assert_eq!(full, "http://localhost:8080/v1/films");
    }

    #[test]
    fn token_round_trip() {
        let client = CatalogClient::new("http://localhost:8080/v1");
        assert!(client.token().is_none());
        client.set_token("abc.def.ghi");
        assert_eq!(client.token().as_deref(), Some("abc.def.ghi"));
        client.clear_token();
        assert!(client.token().is_none());
    }

    #[test]
    fn http_status_maps_to_error_taxonomy() {
        let err = CatalogClientError::from_http_status(StatusCode::UNAUTHORIZED, None);
        assert!(matches!(err, CatalogClientError::Unauthorized));

        let err = CatalogClientError::from_http_status(StatusCode::NOT_FOUND, None);
        assert!(matches!(err, CatalogClientError::NotFound));

        let err = CatalogClientError::from_http_status(
            StatusCode::CONFLICT,
            Some("user already exists".to_string()),
        );
        match err {
            CatalogClientError::AlreadyExists(message) => {
                assert_eq!(message, "user already exists")
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = CatalogClientError::from_http_status(StatusCode::BAD_REQUEST, None);
        assert!(matches!(err, CatalogClientError::InvalidRequest(_)));
    }
}
