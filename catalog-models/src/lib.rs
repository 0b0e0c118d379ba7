//! Общие типы каталога фильмов: DTO ответов API, конверт ответа,
//! контроллер состояния фильтров/пагинации и валидация полей форм.
//!
//! Крейт не делает I/O и собирается как под нативные цели, так и под
//! `wasm32` — его используют `catalog-client` и `catalog-wasm`.
#![warn(missing_docs)]

mod filter;
mod models;
mod validate;

pub use filter::{
    ActorFilter, FilmFilter, PageInputError, SortField, SortOrder, has_next_page,
    parse_page_input, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DURATION_MAX_MINUTES, RATING_MAX,
};
pub use models::{
    AccessTokenData, Actor, ActorPayload, ApiResponse, CreateReviewRequest, Film, FilmPayload,
    Genre, GenrePayload, ProfileUpdate, Review, SignInRequest, SignUpRequest, UpdateReviewRequest,
    User, STATUS_ERROR, STATUS_OK,
};
pub use validate::{email_format, password_strength, runtime_format};
