use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use catalog_models::{
    has_next_page, Actor, ActorFilter, Film, FilmFilter, Genre, DEFAULT_PAGE,
};

use crate::api;
use crate::components::film_card::FilmCard;
use crate::components::filters::FiltersPanel;
use crate::components::header::Header;
use crate::components::pagination::Pagination;
use crate::notify::Notices;

// Сколько актёров показывать в панели фильтров.
const FILTER_ACTORS_PAGE_SIZE: u32 = 100;

/// Список фильмов: фильтры, поиск, пагинация.
///
/// Источник истины — строка запроса URL: каждый переход (в том числе
/// назад/вперёд) перечитывает её и запускает ровно один запрос к API.
#[component]
pub(crate) fn FilmsPage() -> impl IntoView {
    let notices = expect_context::<Notices>();
    let navigate = use_navigate();
    let location = use_location();

    // Рабочая копия фильтров, редактируемая контролами.
    let filter = RwSignal::new(FilmFilter::default());
    // Применённое состояние, восстановленное из URL.
    let applied = RwSignal::new(FilmFilter::default());
    let films = RwSignal::new(Vec::<Film>::new());
    let loading = RwSignal::new(true);
    let last_row_count = RwSignal::new(0usize);
    // Максимальный известный номер страницы (после неполной страницы).
    let known_total = RwSignal::new(None::<u32>);
    // Номер последнего запроса: ответы отставших запросов отбрасываются,
    // побеждает последнее намерение пользователя.
    let request_seq = StoredValue::new(0u64);

    // Справочники для панели фильтров, загружаются один раз.
    let genres = RwSignal::new(Vec::<Genre>::new());
    let actors = RwSignal::new(Vec::<Actor>::new());
    spawn_local(async move {
        if let Ok(list) = api::genres::list().await {
            genres.set(list);
        }
        let actor_filter = ActorFilter {
            page_size: FILTER_ACTORS_PAGE_SIZE,
            ..ActorFilter::default()
        };
        if let Ok(list) = api::actors::list(&actor_filter).await {
            actors.set(list);
        }
    });

    Effect::new({
        let notices = notices.clone();
        move |_| {
            let parsed = FilmFilter::from_query_string(&location.search.get());
            filter.set(parsed.clone());
            applied.set(parsed.clone());

            let seq = request_seq.get_value() + 1;
            request_seq.set_value(seq);
            loading.set(true);

            let notices = notices.clone();
            spawn_local(async move {
                // Непустой поиск уходит на поисковый эндпоинт без
                // остальных фильтров.
                let result = if parsed.query.is_empty() {
                    api::films::list(&parsed).await
                } else {
                    api::films::search(&parsed.query).await
                };

                if request_seq.get_value() != seq {
                    return;
                }
                match result {
                    Ok(list) => {
                        if list.is_empty() && parsed.page == DEFAULT_PAGE {
                            notices.info("Таких фильмов ещё не сняли");
                        }
                        last_row_count.set(list.len());
                        let full_page = has_next_page(list.len(), parsed.page_size);
                        known_total.set(if full_page { None } else { Some(parsed.page) });
                        films.set(list);
                    }
                    Err(err) => {
                        films.set(Vec::new());
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
        move |next: FilmFilter| {
            let query = next.to_query_string();
            let target = if query.is_empty() {
                "/films".to_string()
            } else {
                format!("/films?{query}")
            };
            navigate(&target, Default::default());
        }
    };

    let on_search = Callback::new({
        let apply = apply.clone();
        move |_| {
            // Новые фильтры всегда начинают с первой страницы.
            let mut next = filter.get();
            next.page = DEFAULT_PAGE;
            apply(next);
        }
    });

    let on_page = Callback::new({
        let apply = apply.clone();
        move |page: u32| apply(applied.get().with_page(page))
    });

    let on_reset = Callback::new({
        let navigate = navigate.clone();
        move |_| {
            filter.set(FilmFilter::default());
            navigate("/films", Default::default());
        }
    });

    view! {
        <div class="films-page">
            <Header />
            <div class="films-layout">
                <FiltersPanel
                    filter=filter
                    genres=genres
                    actors=actors
                    on_search=on_search
                    on_reset=on_reset
                />
                <div class="films-results">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="spinner">"Загрузка..."</div> }
                    >
                        <div class="film-grid">
                            <For
                                each=move || films.get()
                                key=|film| film.id
                                children=move |film| view! { <FilmCard film=film /> }
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
            </div>
        </div>
    }
}
