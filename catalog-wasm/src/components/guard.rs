use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::AuthStore;

/// Ограждает маршрут: анонима уводит на вход, не-админа — на главную.
/// Пока сессия проверяется, показывает спиннер.
#[component]
pub(crate) fn Protected(
    #[prop(optional)] admin_only: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let navigate = use_navigate();

    Effect::new({
        let auth = auth.clone();
        let navigate = navigate.clone();
        move |_| {
            if auth.loading.get() {
                return;
            }
            if auth.user.get().is_none() {
                navigate("/auth", Default::default());
            } else if admin_only && !auth.is_admin() {
                navigate("/", Default::default());
            }
        }
    });

    let auth_for_view = auth.clone();
    view! {
        <Show
            when=move || {
                !auth_for_view.loading.get()
                    && auth_for_view.user.get().is_some()
                    && (!admin_only || auth_for_view.is_admin())
            }
            fallback=|| view! { <div class="spinner">"Загрузка..."</div> }
        >
            {children()}
        </Show>
    }
}
