use leptos::prelude::*;

use catalog_models::{
    Actor, FilmFilter, Genre, SortField, SortOrder, DURATION_MAX_MINUTES, RATING_MAX,
};

use crate::util::toggle_id;

/// Панель фильтров списка фильмов. Контролы правят рабочую копию
/// фильтра; в URL она попадает только по кнопке «Применить».
#[component]
pub(crate) fn FiltersPanel(
    filter: RwSignal<FilmFilter>,
    genres: RwSignal<Vec<Genre>>,
    actors: RwSignal<Vec<Actor>>,
    #[prop(into)] on_search: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filters">
            <section class="filter-group">
                <h4>"Жанры"</h4>
                <For
                    each=move || genres.get()
                    key=|genre| genre.genre_id
                    children=move |genre| {
                        let id = genre.genre_id;
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filter.with(|f| f.genre_ids.contains(&id))
                                    on:change=move |_| {
                                        filter.update(|f| toggle_id(&mut f.genre_ids, id))
                                    }
                                />
                                {genre.name.clone()}
                            </label>
                        }
                    }
                />
            </section>

            <section class="filter-group">
                <h4>"Актёры"</h4>
                <For
                    each=move || actors.get()
                    key=|actor| actor.actor_id
                    children=move |actor| {
                        let id = actor.actor_id;
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filter.with(|f| f.actor_ids.contains(&id))
                                    on:change=move |_| {
                                        filter.update(|f| toggle_id(&mut f.actor_ids, id))
                                    }
                                />
                                {actor.name.clone()}
                            </label>
                        }
                    }
                />
            </section>

            <section class="filter-group">
                <h4>"Продюсер"</h4>
                <input
                    prop:value=move || filter.with(|f| f.producer.clone())
                    on:input=move |ev| filter.update(|f| f.producer = event_target_value(&ev))
                />
            </section>

            <section class="filter-group">
                <h4>"Рейтинг"</h4>
                <div class="filter-range">
                    <input
                        type="number"
                        min="0"
                        max="100"
                        prop:value=move || filter.with(|f| f.min_rating.to_string())
                        on:input=move |ev| {
                            filter.update(|f| {
                                f.min_rating = event_target_value(&ev).parse().unwrap_or(0)
                            })
                        }
                    />
                    <input
                        type="number"
                        min="0"
                        max="100"
                        prop:value=move || filter.with(|f| f.max_rating.to_string())
                        on:input=move |ev| {
                            filter.update(|f| {
                                f.max_rating =
                                    event_target_value(&ev).parse().unwrap_or(RATING_MAX)
                            })
                        }
                    />
                </div>
            </section>

            <section class="filter-group">
                <h4>"Длительность, мин"</h4>
                <div class="filter-range">
                    <input
                        type="number"
                        min="0"
                        max="300"
                        prop:value=move || filter.with(|f| f.min_duration.to_string())
                        on:input=move |ev| {
                            filter.update(|f| {
                                f.min_duration = event_target_value(&ev).parse().unwrap_or(0)
                            })
                        }
                    />
                    <input
                        type="number"
                        min="0"
                        max="300"
                        prop:value=move || filter.with(|f| f.max_duration.to_string())
                        on:input=move |ev| {
                            filter.update(|f| {
                                f.max_duration = event_target_value(&ev)
                                    .parse()
                                    .unwrap_or(DURATION_MAX_MINUTES)
                            })
                        }
                    />
                </div>
            </section>

            <section class="filter-group">
                <h4>"Дата выхода"</h4>
                <div class="filter-range">
                    <input
                        type="date"
                        prop:value=move || filter.with(|f| f.min_date.clone())
                        on:input=move |ev| {
                            filter.update(|f| f.min_date = event_target_value(&ev))
                        }
                    />
                    <input
                        type="date"
                        prop:value=move || filter.with(|f| f.max_date.clone())
                        on:input=move |ev| {
                            filter.update(|f| f.max_date = event_target_value(&ev))
                        }
                    />
                </div>
            </section>

            <section class="filter-group">
                <h4>"Сортировка"</h4>
                <select on:change=move |ev| {
                    filter.update(|f| f.sort_by = SortField::parse(&event_target_value(&ev)))
                }>
                    <option value="" selected=move || filter.with(|f| f.sort_by.is_none())>
                        "Без сортировки"
                    </option>
                    <option
                        value="avg_rating"
                        selected=move || filter.with(|f| f.sort_by == Some(SortField::AvgRating))
                    >
                        "По рейтингу"
                    </option>
                    <option
                        value="release_date"
                        selected=move || {
                            filter.with(|f| f.sort_by == Some(SortField::ReleaseDate))
                        }
                    >
                        "По дате выхода"
                    </option>
                    <option
                        value="runtime"
                        selected=move || filter.with(|f| f.sort_by == Some(SortField::Runtime))
                    >
                        "По длительности"
                    </option>
                </select>
                <button
                    type="button"
                    class="order-toggle"
                    disabled=move || filter.with(|f| f.sort_by.is_none())
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
            </section>

            <div class="filter-actions">
                <button on:click=move |_| on_search.run(())>"Применить"</button>
                <button class="secondary" on:click=move |_| on_reset.run(())>"Сбросить"</button>
            </div>
        </div>
    }
}
