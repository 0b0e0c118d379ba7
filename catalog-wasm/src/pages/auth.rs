use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use catalog_models::{email_format, password_strength, SignInRequest, SignUpRequest};

use crate::api;
use crate::notify::Notices;
use crate::state::AuthStore;

const OAUTH_PROVIDERS: &[(&str, &str)] = &[("google", "Google"), ("yandex", "Яндекс")];

/// Вход и регистрация на одной странице с переключателем режима.
#[component]
pub(crate) fn AuthPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notices = expect_context::<Notices>();
    let navigate = use_navigate();

    let is_login = RwSignal::new(true);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let login_field = RwSignal::new(String::new());

    let on_submit = {
        let auth = auth.clone();
        let notices = notices.clone();
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let email_value = email.get().trim().to_string();
            let password_value = password.get();

            if email_format(&email_value).is_err() {
                notices.error("Некорректный email");
                return;
            }
            // Правила стойкости проверяются только при регистрации:
            // у старых аккаунтов пароль мог быть любым.
            if !is_login.get() && password_strength(&password_value).is_err() {
                notices.error(
                    "Пароль: минимум 6 символов, заглавная и строчная буквы и цифра",
                );
                return;
            }

            let auth = auth.clone();
            let notices = notices.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                if is_login.get_untracked() {
                    let request = SignInRequest {
                        email: email_value,
                        password: password_value,
                    };
                    match auth.sign_in(request).await {
                        Ok(()) => navigate("/profile", Default::default()),
                        Err(err) => notices.error(err.user_message()),
                    }
                } else {
                    let login_value = login_field.get_untracked().trim().to_string();
                    let request = SignUpRequest {
                        email: email_value.clone(),
                        password: password_value,
                        login: (!login_value.is_empty()).then_some(login_value),
                    };
                    match auth.sign_up(request).await {
                        Ok(()) => {
                            let target = format!(
                                "/confirm-email?email={}",
                                urlencoding::encode(&email_value)
                            );
                            navigate(&target, Default::default());
                        }
                        Err(err) => notices.error(err.user_message()),
                    }
                }
            });
        }
    };

    let auth_for_busy = auth.clone();
    let busy = move || auth_for_busy.loading.get();

    view! {
        <div class="auth-page">
            <h1>{move || if is_login.get() { "Вход" } else { "Регистрация" }}</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Пароль"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || !is_login.get()>
                    <input
                        placeholder="Логин (необязательно)"
                        prop:value=move || login_field.get()
                        on:input=move |ev| login_field.set(event_target_value(&ev))
                    />
                </Show>
                <button type="submit" disabled=busy>
                    {move || if is_login.get() { "Войти" } else { "Зарегистрироваться" }}
                </button>
            </form>

            <button class="auth-switch" on:click=move |_| is_login.update(|mode| *mode = !*mode)>
                {move || {
                    if is_login.get() {
                        "Нет аккаунта? Зарегистрируйтесь"
                    } else {
                        "Уже есть аккаунт? Войдите"
                    }
                }}
            </button>

            <div class="oauth-buttons">
                {OAUTH_PROVIDERS
                    .iter()
                    .copied()
                    .map(|(provider, label)| {
                        view! {
                            <button
                                class="oauth-button"
                                on:click=move |_| api::auth::oauth_start(provider)
                            >
                                {format!("Войти через {label}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
