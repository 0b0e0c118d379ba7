use reqwest::Method;
use reqwest::multipart::Form;

use catalog_models::{ProfileUpdate, User};

use crate::error::{CatalogClientError, CatalogClientResult};
use crate::http::{upload_part, CatalogClient, Upload};

impl CatalogClient {
    /// Профиль текущего пользователя. Требует установленный access token.
    pub async fn profile(&self) -> CatalogClientResult<User> {
        self.get_data("/profile", None).await
    }

    /// Обновляет профиль: JSON-поле `json` плюс опциональный аватар и
    /// флаг сброса аватара к заглушке.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
        avatar: Option<&Upload>,
        reset_avatar: bool,
    ) -> CatalogClientResult<()> {
        let json = serde_json::to_string(update)
            .map_err(|err| CatalogClientError::InvalidRequest(err.to_string()))?;

        self.send_multipart_empty(Method::PUT, "/profile", None, move || {
            let mut form = Form::new().text("json", json.clone());
            if let Some(avatar) = avatar {
                form = form.part("avatar", upload_part(avatar));
            }
            if reset_avatar {
                form = form.text("reset_avatar", "true");
            }
            form
        })
        .await
    }

    /// Удаляет профиль текущего пользователя.
    pub async fn delete_profile(&self) -> CatalogClientResult<()> {
        self.send_empty(Method::DELETE, "/profile", None).await
    }
}
