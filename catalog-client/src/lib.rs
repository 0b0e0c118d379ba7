//! Клиентская библиотека каталога фильмов.
//!
//! Оборачивает REST API каталога в типизированные функции по ресурсам
//! (фильмы, актёры, жанры, отзывы, профиль, аутентификация, почта,
//! админка). Клиент хранит access token после `sign_in` и прозрачно
//! обновляет его по refresh-cookie: первый 401 приводит ровно к одному
//! повтору исходного запроса.
#![warn(missing_docs)]

mod error;
mod http;
mod services;

pub use error::{CatalogClientError, CatalogClientResult};
pub use http::{CatalogClient, Upload};

pub use catalog_models as models;
