use leptos::prelude::*;

use crate::state::AuthStore;
use crate::storage;

#[component]
pub(crate) fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<AuthStore>();

    let toggle = move |_| {
        let next = !collapsed.get();
        collapsed.set(next);
        storage::save_sidebar_collapsed(next);
    };

    let auth_for_profile = auth.clone();
    let auth_for_admin = auth.clone();

    view! {
        <aside class=move || {
            if collapsed.get() { "sidebar sidebar-collapsed" } else { "sidebar" }
        }>
            <button class="sidebar-toggle" on:click=toggle>
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>
            <Show when=move || !collapsed.get()>
                <nav class="sidebar-nav">
                    <a href="/">"Главная"</a>
                    <a href="/films">"Фильмы"</a>
                    <a href="/actors">"Актёры"</a>
                    <Show
                        when={
                            let auth = auth_for_profile.clone();
                            move || auth.is_authenticated()
                        }
                        fallback=|| view! { <a href="/auth">"Войти"</a> }
                    >
                        <a href="/profile">"Профиль"</a>
                    </Show>
                    <Show when={
                        let auth = auth_for_admin.clone();
                        move || auth.is_admin()
                    }>
                        <a href="/admin">"Админка"</a>
                    </Show>
                </nav>
            </Show>
        </aside>
    }
}
