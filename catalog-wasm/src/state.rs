//! Хранилища состояния приложения.
//!
//! Обычные структуры из `RwSignal`, отдаваемые через `provide_context`:
//! в тестах и Storybook-подобных песочницах их можно подменить, не трогая
//! компоненты.

use leptos::prelude::*;

use catalog_models::{
    Actor, Film, FilmPayload, Genre, ProfileUpdate, Review, SignInRequest, SignUpRequest, User,
};

use crate::api::{self, ApiError};
use crate::storage;

#[derive(Debug, Clone)]
/// Состояние сессии: `user == None` и `loading == false` — аноним.
pub(crate) struct AuthStore {
    pub(crate) user: RwSignal<Option<User>>,
    pub(crate) reviews: RwSignal<Vec<Review>>,
    pub(crate) loading: RwSignal<bool>,
}

impl AuthStore {
    pub(crate) fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            reviews: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
        }
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    pub(crate) fn is_admin(&self) -> bool {
        self.user.get().map(|user| user.is_admin).unwrap_or(false)
    }

    /// Проверка сессии на старте приложения. Ошибка профиля не всплывает:
    /// просто остаёмся анонимом.
    pub(crate) async fn check(self) {
        self.loading.set(true);
        if storage::load_token().is_some() {
            match api::profile::get().await {
                Ok(profile) => {
                    self.user.set(Some(profile));
                    self.reload_reviews().await;
                }
                Err(_) => self.user.set(None),
            }
        } else {
            self.user.set(None);
        }
        self.loading.set(false);
    }

    pub(crate) async fn sign_in(self, request: SignInRequest) -> Result<(), ApiError> {
        self.loading.set(true);
        let result = async {
            let token = api::auth::sign_in(&request).await?;
            storage::save_token(&token).map_err(ApiError::Network)?;
            let profile = api::profile::get().await?;
            self.user.set(Some(profile));
            self.reload_reviews().await;
            Ok(())
        }
        .await;
        self.loading.set(false);
        result
    }

    pub(crate) async fn sign_up(self, request: SignUpRequest) -> Result<(), ApiError> {
        self.loading.set(true);
        let result = api::auth::sign_up(&request).await;
        self.loading.set(false);
        result
    }

    pub(crate) async fn oauth_callback(
        self,
        provider: String,
        raw_query: String,
    ) -> Result<(), ApiError> {
        self.loading.set(true);
        let result = async {
            let token = api::auth::oauth_callback(&provider, &raw_query).await?;
            storage::save_token(&token).map_err(ApiError::Network)?;
            let profile = api::profile::get().await?;
            self.user.set(Some(profile));
            self.reload_reviews().await;
            Ok(())
        }
        .await;
        self.loading.set(false);
        result
    }

    /// Выход. Cookie чистится в любом случае, даже если запрос не прошёл.
    pub(crate) async fn logout(self) {
        let _ = storage::clear_token();
        let _ = api::auth::logout().await;
        self.user.set(None);
        self.reviews.set(Vec::new());
    }

    pub(crate) async fn delete_profile(self) -> Result<(), ApiError> {
        api::profile::delete().await?;
        let _ = storage::clear_token();
        self.user.set(None);
        self.reviews.set(Vec::new());
        Ok(())
    }

    /// Обновляет профиль и перечитывает его с сервера.
    pub(crate) async fn update_profile(
        self,
        update: ProfileUpdate,
        avatar: Option<web_sys::File>,
        reset_avatar: bool,
    ) -> Result<(), ApiError> {
        api::profile::update(&update, avatar, reset_avatar).await?;
        let profile = api::profile::get().await?;
        self.user.set(Some(profile));
        Ok(())
    }

    /// Перечитывает отзывы пользователя; ошибка оставляет пустой список.
    pub(crate) async fn reload_reviews(&self) {
        match api::reviews::own().await {
            Ok(reviews) => self.reviews.set(reviews),
            Err(_) => self.reviews.set(Vec::new()),
        }
    }
}

#[derive(Debug, Clone)]
/// Коллекция одного ресурса админки со своим флагом загрузки.
pub(crate) struct ResourceState<T: Send + Sync + 'static> {
    pub(crate) items: RwSignal<Vec<T>>,
    pub(crate) loading: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> ResourceState<T> {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
        }
    }
}

#[derive(Debug, Clone)]
/// Пять независимых коллекций админки.
///
/// Флаг загрузки у каждой свой: одновременные запросы разных ресурсов
/// не мешают друг другу. Каждая мутация завершается безусловным
/// перечитыванием списка своего ресурса.
pub(crate) struct AdminStore {
    pub(crate) films: ResourceState<Film>,
    pub(crate) actors: ResourceState<Actor>,
    pub(crate) genres: ResourceState<Genre>,
    pub(crate) reviews: ResourceState<Review>,
    pub(crate) users: ResourceState<User>,
}

impl AdminStore {
    pub(crate) fn new() -> Self {
        Self {
            films: ResourceState::new(),
            actors: ResourceState::new(),
            genres: ResourceState::new(),
            reviews: ResourceState::new(),
            users: ResourceState::new(),
        }
    }

    pub(crate) async fn fetch_all(self) -> Result<(), ApiError> {
        self.clone().fetch_films().await?;
        self.clone().fetch_actors().await?;
        self.clone().fetch_genres().await?;
        self.clone().fetch_reviews().await?;
        self.fetch_users().await
    }

    pub(crate) async fn fetch_films(self) -> Result<(), ApiError> {
        self.films.loading.set(true);
        let result = api::admin::films().await.map(|items| self.films.items.set(items));
        self.films.loading.set(false);
        result
    }

    pub(crate) async fn create_film(
        self,
        payload: FilmPayload,
        poster: Option<web_sys::File>,
    ) -> Result<(), ApiError> {
        api::admin::create_film(&payload, poster).await?;
        self.fetch_films().await
    }

    pub(crate) async fn update_film(
        self,
        id: u32,
        payload: FilmPayload,
        poster: Option<web_sys::File>,
    ) -> Result<(), ApiError> {
        api::admin::update_film(id, &payload, poster).await?;
        self.fetch_films().await
    }

    pub(crate) async fn delete_film(self, id: u32) -> Result<(), ApiError> {
        api::admin::delete_film(id).await?;
        self.fetch_films().await
    }

    pub(crate) async fn delete_films(self, ids: Vec<u32>) -> Result<(), ApiError> {
        api::admin::delete_films(&ids).await?;
        self.fetch_films().await
    }

    pub(crate) async fn fetch_actors(self) -> Result<(), ApiError> {
        self.actors.loading.set(true);
        let result = api::admin::actors()
            .await
            .map(|items| self.actors.items.set(items));
        self.actors.loading.set(false);
        result
    }

    pub(crate) async fn delete_actor(self, id: u32) -> Result<(), ApiError> {
        api::admin::delete_actor(id).await?;
        self.fetch_actors().await
    }

    pub(crate) async fn delete_actors(self, ids: Vec<u32>) -> Result<(), ApiError> {
        api::admin::delete_actors(&ids).await?;
        self.fetch_actors().await
    }

    pub(crate) async fn fetch_genres(self) -> Result<(), ApiError> {
        self.genres.loading.set(true);
        let result = api::admin::genres()
            .await
            .map(|items| self.genres.items.set(items));
        self.genres.loading.set(false);
        result
    }

    pub(crate) async fn delete_genre(self, id: u32) -> Result<(), ApiError> {
        api::admin::delete_genre(id).await?;
        self.fetch_genres().await
    }

    pub(crate) async fn delete_genres(self, ids: Vec<u32>) -> Result<(), ApiError> {
        api::admin::delete_genres(&ids).await?;
        self.fetch_genres().await
    }

    pub(crate) async fn fetch_reviews(self) -> Result<(), ApiError> {
        self.reviews.loading.set(true);
        let result = api::admin::reviews()
            .await
            .map(|items| self.reviews.items.set(items));
        self.reviews.loading.set(false);
        result
    }

    pub(crate) async fn delete_review(self, id: u32) -> Result<(), ApiError> {
        api::admin::delete_review(id).await?;
        self.fetch_reviews().await
    }

    pub(crate) async fn delete_reviews(self, ids: Vec<u32>) -> Result<(), ApiError> {
        api::admin::delete_reviews(&ids).await?;
        self.fetch_reviews().await
    }

    pub(crate) async fn fetch_users(self) -> Result<(), ApiError> {
        self.users.loading.set(true);
        let result = api::admin::users()
            .await
            .map(|items| self.users.items.set(items));
        self.users.loading.set(false);
        result
    }

    pub(crate) async fn delete_user(self, id: u32) -> Result<(), ApiError> {
        api::admin::delete_user(id).await?;
        self.fetch_users().await
    }

    pub(crate) async fn delete_users(self, ids: Vec<u32>) -> Result<(), ApiError> {
        api::admin::delete_users(&ids).await?;
        self.fetch_users().await
    }
}
