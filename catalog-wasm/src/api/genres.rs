use catalog_models::Genre;

use super::{get_list, ApiError};

/// Полный список жанров.
pub(crate) async fn list() -> Result<Vec<Genre>, ApiError> {
    get_list("/genres").await
}
