use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use crate::state::AuthStore;

/// Завершение OAuth-потока: провайдер вернул управление с параметрами
/// в строке запроса, передаём их API и уходим в профиль.
#[component]
pub(crate) fn OAuthCallbackPage() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    // Колбэк обрабатывается один раз, повторные запуски эффекта — нет.
    let handled = StoredValue::new(false);

    Effect::new(move |_| {
        if handled.get_value() {
            return;
        }
        let Some(provider) = params.get().get("provider") else {
            return;
        };
        handled.set_value(true);

        let raw_query = location.search.get_untracked();
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.oauth_callback(provider, raw_query).await {
                Ok(()) => navigate("/profile", Default::default()),
                Err(_) => navigate("/auth", Default::default()),
            }
        });
    });

    view! { <div class="spinner">"Завершаем вход..."</div> }
}
