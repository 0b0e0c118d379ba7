mod actors;
mod films;
mod genres;
mod reviews;
mod users;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::Notices;
use crate::state::AdminStore;

use actors::AdminActors;
use films::AdminFilms;
use genres::AdminGenres;
use reviews::AdminReviews;
use users::AdminUsers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Films,
    Actors,
    Genres,
    Reviews,
    Users,
}

impl AdminTab {
    fn title(self) -> &'static str {
        match self {
            Self::Films => "Фильмы",
            Self::Actors => "Актёры",
            Self::Genres => "Жанры",
            Self::Reviews => "Отзывы",
            Self::Users => "Пользователи",
        }
    }
}

const TABS: [AdminTab; 5] = [
    AdminTab::Films,
    AdminTab::Actors,
    AdminTab::Genres,
    AdminTab::Reviews,
    AdminTab::Users,
];

/// Админка: пять вкладок над пятью коллекциями. Все списки загружаются
/// при входе, дальше каждая мутация перечитывает только свой ресурс.
#[component]
pub(crate) fn AdminPage() -> impl IntoView {
    let admin = expect_context::<AdminStore>();
    let notices = expect_context::<Notices>();
    let tab = RwSignal::new(AdminTab::Films);

    {
        let admin = admin.clone();
        let notices = notices.clone();
        spawn_local(async move {
            if let Err(err) = admin.fetch_all().await {
                notices.error(err.user_message());
            }
        });
    }

    view! {
        <div class="admin-page">
            <h1>"Админка"</h1>
            <div class="admin-tabs">
                {TABS
                    .iter()
                    .map(|&item| {
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == item { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| tab.set(item)
                            >
                                {item.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                AdminTab::Films => view! { <AdminFilms /> }.into_any(),
                AdminTab::Actors => view! { <AdminActors /> }.into_any(),
                AdminTab::Genres => view! { <AdminGenres /> }.into_any(),
                AdminTab::Reviews => view! { <AdminReviews /> }.into_any(),
                AdminTab::Users => view! { <AdminUsers /> }.into_any(),
            }}
        </div>
    }
}
