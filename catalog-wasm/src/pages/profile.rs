use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use catalog_models::{ProfileUpdate, UpdateReviewRequest};

use crate::api;
use crate::components::profile_review_card::ProfileReviewCard;
use crate::notify::Notices;
use crate::state::AuthStore;

/// Профиль: аватар, логин, собственные отзывы, выход и удаление аккаунта.
#[component]
pub(crate) fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let notices = expect_context::<Notices>();
    let navigate = use_navigate();

    let edit_login = RwSignal::new(false);
    let login_value = RwSignal::new(String::new());
    let avatar_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_avatar_change = {
        let auth = auth.clone();
        let notices = notices.clone();
        move |_| {
            let Some(file) = avatar_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let auth = auth.clone();
            let notices = notices.clone();
            spawn_local(async move {
                match auth.update_profile(ProfileUpdate::default(), Some(file), false).await {
                    Ok(()) => notices.success("Аватар обновлён"),
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    };

    let on_avatar_reset = {
        let auth = auth.clone();
        let notices = notices.clone();
        move |_| {
            let auth = auth.clone();
            let notices = notices.clone();
            spawn_local(async move {
                match auth.update_profile(ProfileUpdate::default(), None, true).await {
                    Ok(()) => notices.success("Аватар сброшен"),
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    };

    let on_login_save = {
        let auth = auth.clone();
        let notices = notices.clone();
        move |_| {
            let login = login_value.get().trim().to_string();
            if login.is_empty() {
                notices.error("Логин не может быть пустым");
                return;
            }
            let auth = auth.clone();
            let notices = notices.clone();
            spawn_local(async move {
                let update = ProfileUpdate { login: Some(login) };
                match auth.update_profile(update, None, false).await {
                    Ok(()) => {
                        edit_login.set(false);
                        notices.success("Логин обновлён");
                    }
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    };

    let on_logout = {
        let auth = auth.clone();
        let navigate = navigate.clone();
        move |_| {
            let auth = auth.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                auth.logout().await;
                navigate("/auth", Default::default());
            });
        }
    };

    let on_delete_profile = {
        let auth = auth.clone();
        let notices = notices.clone();
        let navigate = navigate.clone();
        move |_| {
            let auth = auth.clone();
            let notices = notices.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match auth.delete_profile().await {
                    Ok(()) => {
                        notices.success("Профиль удалён");
                        navigate("/auth", Default::default());
                    }
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    };

    let on_review_save = Callback::new({
        let auth = auth.clone();
        let notices = notices.clone();
        move |(review_id, rating, review_text): (u32, u8, String)| {
            let auth = auth.clone();
            let notices = notices.clone();
            spawn_local(async move {
                let request = UpdateReviewRequest {
                    rating,
                    review_text,
                };
                match api::reviews::update(review_id, &request).await {
                    Ok(()) => notices.success("Отзыв обновлён"),
                    Err(err) => notices.error(err.user_message()),
                }
                auth.reload_reviews().await;
            });
        }
    });

    let on_review_delete = Callback::new({
        let auth = auth.clone();
        let notices = notices.clone();
        move |review_id: u32| {
            let auth = auth.clone();
            let notices = notices.clone();
            spawn_local(async move {
                match api::reviews::delete(review_id).await {
                    Ok(()) => notices.success("Отзыв удалён"),
                    Err(err) => notices.error(err.user_message()),
                }
                auth.reload_reviews().await;
            });
        }
    });

    let auth_for_user = auth.clone();
    let auth_for_reviews = auth.clone();

    view! {
        <div class="profile-page">
            {move || {
                auth_for_user
                    .user
                    .get()
                    .map(|user| {
                        let avatar = user
                            .avatar_url
                            .clone()
                            .map(|url| {
                                view! { <img class="profile-avatar" src=url alt="аватар" /> }
                            });
                        view! {
                            <div class="profile-head">
                                {avatar}
                                <div class="profile-info">
                                    <h1>{user.display_name()}</h1>
                                    {user.email.clone().map(|email| view! { <p>{email}</p> })}
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="profile-actions">
                <label class="file-label">
                    "Сменить аватар"
                    <input
                        type="file"
                        accept="image/*"
                        node_ref=avatar_input
                        on:change=on_avatar_change
                    />
                </label>
                <button class="secondary" on:click=on_avatar_reset>"Сбросить аватар"</button>

                <Show
                    when=move || edit_login.get()
                    fallback=move || {
                        view! {
                            <button on:click=move |_| edit_login.set(true)>
                                "Изменить логин"
                            </button>
                        }
                    }
                >
                    <input
                        placeholder="Новый логин"
                        prop:value=move || login_value.get()
                        on:input=move |ev| login_value.set(event_target_value(&ev))
                    />
                    <button on:click=on_login_save.clone()>"Сохранить"</button>
                    <button class="secondary" on:click=move |_| edit_login.set(false)>
                        "Отмена"
                    </button>
                </Show>

                <button class="secondary" on:click=on_logout>"Выйти"</button>
                <button class="danger" on:click=on_delete_profile>"Удалить профиль"</button>
            </div>

            <h2>"Мои отзывы"</h2>
            <div class="profile-reviews">
                <For
                    each=move || auth_for_reviews.reviews.get()
                    key=|review| review.review_id
                    children=move |review| {
                        view! {
                            <ProfileReviewCard
                                review=review
                                on_save=on_review_save
                                on_delete=on_review_delete
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
