use catalog_models::{Film, FilmFilter};

use super::{get_data, get_list, ApiError};

/// Список фильмов по структурированному фильтру.
pub(crate) async fn list(filter: &FilmFilter) -> Result<Vec<Film>, ApiError> {
    let query = filter.to_query_string();
    let path = if query.is_empty() {
        "/films".to_string()
    } else {
        format!("/films?{query}")
    };
    get_list(&path).await
}

/// Фильм по идентификатору, с жанрами, актёрами и агрегатами рейтинга.
pub(crate) async fn get(id: u32) -> Result<Film, ApiError> {
    get_data(&format!("/films/{id}")).await
}

/// Полнотекстовый поиск. Структурированные фильтры с поиском не сочетаются.
pub(crate) async fn search(query: &str) -> Result<Vec<Film>, ApiError> {
    get_list(&format!(
        "/films/search?query={}",
        urlencoding::encode(query)
    ))
    .await
}
