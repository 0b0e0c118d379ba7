use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use catalog_models::FilmFilter;

#[component]
pub(crate) fn Header() -> impl IntoView {
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw = query.get().trim().to_string();
        let target = if raw.is_empty() {
            "/films".to_string()
        } else {
            let filter = FilmFilter {
                query: raw,
                ..FilmFilter::default()
            };
            format!("/films?{}", filter.to_query_string())
        };
        navigate(&target, Default::default());
    };

    view! {
        <form class="header" on:submit=on_submit>
            <input
                class="header-search"
                placeholder="Найти фильм"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button type="submit">"Поиск"</button>
        </form>
    }
}
