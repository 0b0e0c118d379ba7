use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::guard::Protected;
use crate::components::sidebar::Sidebar;
use crate::notify::{NoticeArea, Notices};
use crate::pages::actors::ActorsPage;
use crate::pages::admin::AdminPage;
use crate::pages::auth::AuthPage;
use crate::pages::confirm_email::ConfirmEmailPage;
use crate::pages::film_detail::FilmDetailPage;
use crate::pages::films::FilmsPage;
use crate::pages::home::HomePage;
use crate::pages::oauth_callback::OAuthCallbackPage;
use crate::pages::profile::ProfilePage;
use crate::state::{AdminStore, AuthStore};
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthStore::new();
    let admin = AdminStore::new();
    let notices = Notices::new();
    provide_context(auth.clone());
    provide_context(admin);
    provide_context(notices);

    // Проверка сессии на старте приложения.
    leptos::task::spawn_local(auth.clone().check());

    let collapsed = RwSignal::new(storage::load_sidebar_collapsed());

    view! {
        <Router>
            <div class="layout">
                <Sidebar collapsed=collapsed />
                <main class=move || {
                    if collapsed.get() { "content content-wide" } else { "content" }
                }>
                    <NoticeArea />
                    <Routes fallback=|| view! { <p class="not-found">"Страница не найдена."</p> }>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=StaticSegment("films") view=FilmsPage />
                        <Route
                            path=(StaticSegment("films"), ParamSegment("id"))
                            view=FilmDetailPage
                        />
                        <Route path=StaticSegment("actors") view=ActorsPage />
                        <Route path=StaticSegment("auth") view=AuthPage />
                        <Route
                            path=(
                                StaticSegment("auth"),
                                StaticSegment("callback"),
                                ParamSegment("provider"),
                            )
                            view=OAuthCallbackPage
                        />
                        <Route path=StaticSegment("confirm-email") view=ConfirmEmailPage />
                        <Route
                            path=StaticSegment("profile")
                            view=|| view! { <Protected><ProfilePage /></Protected> }
                        />
                        <Route
                            path=StaticSegment("admin")
                            view=|| {
                                view! {
                                    <Protected admin_only=true>
                                        <AdminPage />
                                    </Protected>
                                }
                            }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
