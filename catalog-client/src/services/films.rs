use catalog_models::{Film, FilmFilter};

use crate::error::CatalogClientResult;
use crate::http::CatalogClient;

impl CatalogClient {
    /// Список фильмов по структурированному фильтру.
    pub async fn films(&self, filter: &FilmFilter) -> CatalogClientResult<Vec<Film>> {
        self.get_list("/films", Some(&filter.to_query_pairs()))
            .await
    }

    /// Фильм по идентификатору, с жанрами, актёрами и агрегатами рейтинга.
    pub async fn film(&self, id: u32) -> CatalogClientResult<Film> {
        self.get_data(&format!("/films/{id}"), None).await
    }

    /// Полнотекстовый поиск фильмов. Структурированные фильтры с поиском
    /// не сочетаются: передаётся только сам запрос.
    pub async fn search_films(&self, query: &str) -> CatalogClientResult<Vec<Film>> {
        let query = vec![("query", query.to_string())];
        self.get_list("/films/search", Some(&query)).await
    }
}
