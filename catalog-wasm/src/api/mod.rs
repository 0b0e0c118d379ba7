//! Слой запросов к API каталога.
//!
//! Все запросы идут с cookie (`credentials: include`). Первый 401 приводит
//! ровно к одному обновлению access token и одному повтору исходного
//! запроса; если refresh не удался, сессия сбрасывается и приложение
//! уходит на страницу входа.

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use catalog_models::{AccessTokenData, ApiResponse};

use crate::storage;

pub(crate) mod actors;
pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod email;
pub(crate) mod films;
pub(crate) mod genres;
pub(crate) mod profile;
pub(crate) mod reviews;

const API_BASE_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:8080/v1",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Api(String),
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Api(msg) => write!(f, "api error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl ApiError {
    /// Человекочитаемый текст для всплывающего уведомления.
    pub(crate) fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Сеть недоступна, попробуйте ещё раз".to_string(),
            Self::Http { status, message } => {
                if let Some(known) = localize(message) {
                    return known;
                }
                match status {
                    400 => "Некорректный запрос".to_string(),
                    401 => "Требуется авторизация".to_string(),
                    403 => "Недостаточно прав для этой операции".to_string(),
                    404 => "Ресурс не найден".to_string(),
                    409 => "Такая запись уже существует".to_string(),
                    500..=599 => "Ошибка сервера, попробуйте позже".to_string(),
                    _ => "Что-то пошло не так".to_string(),
                }
            }
            Self::Api(message) => {
                localize(message).unwrap_or_else(|| "Что-то пошло не так".to_string())
            }
            Self::Decode(_) => "Некорректный ответ сервера".to_string(),
        }
    }
}

/// Известные бизнес-ошибки каталога по тексту из конверта ответа.
fn localize(message: &str) -> Option<String> {
    let lower = message.to_ascii_lowercase();
    if lower.contains("already exists") {
        Some("Пользователь с таким email или логином уже есть".to_string())
    } else if lower.contains("not confirmed") {
        Some("Email не подтверждён — проверьте почту".to_string())
    } else if lower.contains("not found") {
        Some("Ничего не найдено".to_string())
    } else if lower.contains("invalid code") {
        Some("Неверный код подтверждения".to_string())
    } else {
        None
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub(crate) enum RequestBody {
    None,
    Json(serde_json::Value),
    Form(web_sys::FormData),
}

fn build_request(
    method: Method,
    path: &str,
    body: &RequestBody,
) -> Result<gloo_net::http::Request, ApiError> {
    let mut builder = RequestBuilder::new(&endpoint(path))
        .method(method)
        .credentials(RequestCredentials::Include);
    if let Some(token) = storage::load_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    match body {
        RequestBody::None => builder.build(),
        RequestBody::Json(value) => builder.json(value),
        RequestBody::Form(form) => builder.body(form.clone()),
    }
    .map_err(|err| ApiError::Network(err.to_string()))
}

/// Отправляет запрос; на первый 401 — одно обновление токена и один
/// повтор, флаг `retried` исключает циклы.
async fn dispatch(method: Method, path: &str, body: RequestBody) -> Result<Response, ApiError> {
    let mut retried = false;
    loop {
        let request = build_request(method.clone(), path, &body)?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        if response.status() == 401 && !retried {
            retried = true;
            if refresh_access_token().await {
                continue;
            }
            expire_session();
            return Err(parse_error_body(response).await);
        }
        if !response.ok() {
            return Err(parse_error_body(response).await);
        }
        return Ok(response);
    }
}

/// Одно обновление access token по refresh-cookie.
async fn refresh_access_token() -> bool {
    let request = match RequestBuilder::new(&endpoint("/auth/refresh-token"))
        .method(Method::POST)
        .credentials(RequestCredentials::Include)
        .build()
    {
        Ok(request) => request,
        Err(_) => return false,
    };
    let Ok(response) = request.send().await else {
        return false;
    };
    if !response.ok() {
        return false;
    }
    let Ok(envelope) = response.json::<ApiResponse<AccessTokenData>>().await else {
        return false;
    };
    match envelope.into_data() {
        Ok(data) => storage::save_token(&data.access_token).is_ok(),
        Err(_) => false,
    }
}

/// Сессия закончилась: чистим cookie и уходим на страницу входа,
/// если мы ещё не там.
fn expire_session() {
    let _ = storage::clear_token();
    if let Some(window) = web_sys::window() {
        let at_auth = window
            .location()
            .pathname()
            .map(|path| path.starts_with("/auth"))
            .unwrap_or(false);
        if !at_auth {
            let _ = window.location().set_href("/auth");
        }
    }
}

async fn parse_error_body(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ApiResponse<serde_json::Value>>()
        .await
        .ok()
        .and_then(|envelope| envelope.error)
        .unwrap_or_default();
    ApiError::Http { status, message }
}

async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    envelope.into_data().map_err(ApiError::Api)
}

async fn unwrap_envelope_or_default<T: DeserializeOwned + Default>(
    response: Response,
) -> Result<T, ApiError> {
    let envelope = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    envelope.into_data_or_default().map_err(ApiError::Api)
}

pub(crate) async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = dispatch(Method::GET, path, RequestBody::None).await?;
    unwrap_envelope(response).await
}

/// GET списочного эндпоинта: `data: null` превращается в пустой список.
pub(crate) async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let response = dispatch(Method::GET, path, RequestBody::None).await?;
    unwrap_envelope_or_default(response).await
}

pub(crate) async fn send_json<T, B>(method: Method, path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let value = serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    let response = dispatch(method, path, RequestBody::Json(value)).await?;
    unwrap_envelope(response).await
}

pub(crate) async fn send_json_empty<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let value = serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    dispatch(method, path, RequestBody::Json(value)).await?;
    Ok(())
}

pub(crate) async fn send_empty(method: Method, path: &str) -> Result<(), ApiError> {
    dispatch(method, path, RequestBody::None).await?;
    Ok(())
}

pub(crate) async fn send_form_empty(
    method: Method,
    path: &str,
    form: web_sys::FormData,
) -> Result<(), ApiError> {
    dispatch(method, path, RequestBody::Form(form)).await?;
    Ok(())
}
