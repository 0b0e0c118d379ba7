use catalog_models::{Actor, ActorFilter};

use crate::error::CatalogClientResult;
use crate::http::CatalogClient;

impl CatalogClient {
    /// Список актёров по фильтру.
    pub async fn actors(&self, filter: &ActorFilter) -> CatalogClientResult<Vec<Actor>> {
        self.get_list("/actors", Some(&filter.to_query_pairs()))
            .await
    }

    /// Актёр по идентификатору.
    pub async fn actor(&self, id: u32) -> CatalogClientResult<Actor> {
        self.get_data(&format!("/actors/{id}"), None).await
    }

    /// Поиск актёров по имени.
    pub async fn search_actors(&self, query: &str) -> CatalogClientResult<Vec<Actor>> {
        let query = vec![("query", query.to_string())];
        self.get_list("/actors/search", Some(&query)).await
    }
}
