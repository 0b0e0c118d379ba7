use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_models::{Film, FilmFilter, SortField};

use crate::api;
use crate::components::film_card::FilmCard;

/// Главная: приветствие и подборка фильмов с лучшим рейтингом.
#[component]
pub(crate) fn HomePage() -> impl IntoView {
    let top_films = RwSignal::new(Vec::<Film>::new());

    spawn_local(async move {
        let filter = FilmFilter {
            sort_by: Some(SortField::AvgRating),
            page_size: 4,
            ..FilmFilter::default()
        };
        if let Ok(films) = api::films::list(&filter).await {
            top_films.set(films);
        }
    });

    view! {
        <div class="home">
            <h1>"Каталог фильмов"</h1>
            <p class="home-lead">
                "Ищите фильмы по жанрам, актёрам и рейтингу, читайте отзывы и делитесь своими."
            </p>
            <div class="home-links">
                <a class="home-link" href="/films">"К фильмам"</a>
                <a class="home-link" href="/actors">"К актёрам"</a>
            </div>

            <Show when=move || !top_films.get().is_empty()>
                <h2>"Лучшие по рейтингу"</h2>
                <div class="film-grid">
                    <For
                        each=move || top_films.get()
                        key=|film| film.id
                        children=move |film| view! { <FilmCard film=film /> }
                    />
                </div>
            </Show>
        </div>
    }
}
