use catalog_models::{Actor, ActorFilter};

use super::{get_list, ApiError};

/// Список актёров по фильтру.
pub(crate) async fn list(filter: &ActorFilter) -> Result<Vec<Actor>, ApiError> {
    let query = filter.to_query_string();
    let path = if query.is_empty() {
        "/actors".to_string()
    } else {
        format!("/actors?{query}")
    };
    get_list(&path).await
}
