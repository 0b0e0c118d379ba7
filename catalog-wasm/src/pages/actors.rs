use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use catalog_models::{has_next_page, Actor, ActorFilter, SortOrder, DEFAULT_PAGE};

use crate::api;
use crate::components::actor_card::ActorCard;
use crate::components::pagination::Pagination;
use crate::notify::Notices;

/// Список актёров: фильтры, пагинация, синхронизация с URL — та же
/// дисциплина, что и на странице фильмов.
#[component]
pub(crate) fn ActorsPage() -> impl IntoView {
    let notices = expect_context::<Notices>();
    let navigate = use_navigate();
    let location = use_location();

    let filter = RwSignal::new(ActorFilter::default());
    let applied = RwSignal::new(ActorFilter::default());
    let actors = RwSignal::new(Vec::<Actor>::new());
    let loading = RwSignal::new(true);
    let last_row_count = RwSignal::new(0usize);
    let known_total = RwSignal::new(None::<u32>);
    let request_seq = StoredValue::new(0u64);

    Effect::new({
        let notices = notices.clone();
        move |_| {
            let parsed = ActorFilter::from_query_string(&location.search.get());
            filter.set(parsed.clone());
            applied.set(parsed.clone());

            let seq = request_seq.get_value() + 1;
            request_seq.set_value(seq);
            loading.set(true);

            let notices = notices.clone();
            spawn_local(async move {
                let result = api::actors::list(&parsed).await;
                if request_seq.get_value() != seq {
                    return;
                }
                match result {
                    Ok(list) => {
                        last_row_count.set(list.len());
                        let full_page = has_next_page(list.len(), parsed.page_size);
                        known_total.set(if full_page { None } else { Some(parsed.page) });
                        actors.set(list);
                    }
                    Err(err) => {
                        actors.set(Vec::new());
                        last_row_count.set(0);
                        notices.error(err.user_message());
                    }
                }
                loading.set(false);
            });
        }
    });

    let apply = {
        let navigate = navigate.clone();
        move |next: ActorFilter| {
            let query = next.to_query_string();
            let target = if query.is_empty() {
                "/actors".to_string()
            } else {
                format!("/actors?{query}")
            };
            navigate(&target, Default::default());
        }
    };

    let on_search = {
        let apply = apply.clone();
        move |_| {
            let mut next = filter.get();
            next.page = DEFAULT_PAGE;
            apply(next);
        }
    };

    let on_page = Callback::new({
        let apply = apply.clone();
        move |page: u32| apply(applied.get().with_page(page))
    });

    let on_reset = {
        let navigate = navigate.clone();
        move |_| {
            filter.set(ActorFilter::default());
            navigate("/actors", Default::default());
        }
    };

    view! {
        <div class="actors-page">
            <h1>"Актёры"</h1>
            <div class="actors-filters">
                <input
                    placeholder="Имя"
                    prop:value=move || filter.with(|f| f.name.clone())
                    on:input=move |ev| filter.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Год рождения от"
                    prop:value=move || {
                        filter.with(|f| f.min_year.map(|y| y.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        filter.update(|f| f.min_year = event_target_value(&ev).parse().ok())
                    }
                />
                <input
                    type="number"
                    placeholder="Год рождения до"
                    prop:value=move || {
                        filter.with(|f| f.max_year.map(|y| y.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        filter.update(|f| f.max_year = event_target_value(&ev).parse().ok())
                    }
                />
                <select on:change=move |ev| {
                    filter.update(|f| f.sort_by = event_target_value(&ev))
                }>
                    <option value="" selected=move || filter.with(|f| f.sort_by.is_empty())>
                        "Без сортировки"
                    </option>
                    <option value="name" selected=move || filter.with(|f| f.sort_by == "name")>
                        "По имени"
                    </option>
                    <option
                        value="created_at"
                        selected=move || filter.with(|f| f.sort_by == "created_at")
                    >
                        "По дате добавления"
                    </option>
                </select>
                <button
                    type="button"
                    disabled=move || filter.with(|f| f.sort_by.is_empty())
                    on:click=move |_| filter.update(|f| f.order = f.order.toggled())
                >
                    {move || {
                        if filter.with(|f| f.order == SortOrder::Asc) {
                            "По возрастанию"
                        } else {
                            "По убыванию"
                        }
                    }}
                </button>
                <button on:click=on_search>"Применить"</button>
                <button class="secondary" on:click=on_reset>"Сбросить"</button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner">"Загрузка..."</div> }
            >
                <div class="actor-grid">
                    <For
                        each=move || actors.get()
                        key=|actor| actor.actor_id
                        children=move |actor| view! { <ActorCard actor=actor /> }
                    />
                </div>
                <Pagination
                    page=Signal::derive(move || applied.get().page)
                    has_next=Signal::derive(move || {
                        has_next_page(last_row_count.get(), applied.get().page_size)
                    })
                    total_pages=Signal::derive(move || known_total.get())
                    on_page=on_page
                />
            </Show>
        </div>
    }
}
