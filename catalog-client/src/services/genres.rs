use catalog_models::Genre;

use crate::error::CatalogClientResult;
use crate::http::CatalogClient;

impl CatalogClient {
    /// Полный список жанров.
    pub async fn genres(&self) -> CatalogClientResult<Vec<Genre>> {
        self.get_list("/genres", None).await
    }

    /// Жанр по идентификатору.
    pub async fn genre(&self, id: u32) -> CatalogClientResult<Genre> {
        self.get_data(&format!("/genres/{id}"), None).await
    }

    /// Поиск жанров по названию.
    pub async fn search_genres(&self, query: &str) -> CatalogClientResult<Vec<Genre>> {
        let query = vec![("query", query.to_string())];
        self.get_list("/genres/search", Some(&query)).await
    }
}
