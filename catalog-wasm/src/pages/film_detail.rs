use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use catalog_models::{Film, Review};

use crate::api;
use crate::components::actor_card::ActorCard;
use crate::components::create_review_card::CreateReviewCard;
use crate::components::rating_chart::RatingChart;
use crate::components::review_card::ReviewCard;
use crate::state::AuthStore;
use crate::util;

#[component]
pub(crate) fn FilmDetailPage() -> impl IntoView {
    let params = use_params_map();
    let auth = expect_context::<AuthStore>();

    let film = RwSignal::new(None::<Film>);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let film_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok())
    });

    let load_reviews = move |id: u32| {
        spawn_local(async move {
            if let Ok(list) = api::reviews::by_film(id).await {
                reviews.set(list);
            }
        })
    };

    Effect::new(move |_| {
        let Some(id) = film_id.get() else {
            error.set(Some("Фильм не найден".to_string()));
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::films::get(id).await {
                Ok(loaded) => film.set(Some(loaded)),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
        load_reviews(id);
    });

    let on_review_created = Callback::new(move |_| {
        if let Some(id) = film_id.get_untracked() {
            load_reviews(id);
        }
    });

    let auth_for_form = auth.clone();

    view! {
        <div class="film-detail">
            {move || {
                if loading.get() {
                    return view! { <div class="spinner">"Загрузка..."</div> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <p class="error">{message}</p> }.into_any();
                }
                let Some(film) = film.get() else {
                    return view! { <p class="error">"Фильм не найден"</p> }.into_any();
                };

                let genres = film.genres.clone();
                let actors = film.actors.clone();
                let chart_film = film.clone();

                view! {
                    <div class="film-detail-main">
                        <img
                            class="film-detail-poster"
                            src=film.poster_url.clone()
                            alt=film.title.clone()
                        />
                        <div class="film-detail-info">
                            <h1>{film.title.clone()}</h1>
                            <p class="film-detail-synopsis">{film.synopsis.clone()}</p>
                            <div class="film-detail-badges">
                                <span class=util::rating_badge_class(film.avg_rating)>
                                    {format!("Рейтинг: {:.0}%", film.avg_rating)}
                                </span>
                                <span class="badge">
                                    {format!("Длительность: {}", film.runtime)}
                                </span>
                                <span class="badge">
                                    {format!(
                                        "Дата выхода: {}",
                                        util::format_date(&film.release_date),
                                    )}
                                </span>
                            </div>
                            <p>
                                <strong>"Продюсер: "</strong>
                                {film.producer.clone()}
                            </p>
                            <div class="film-detail-genres">
                                <For
                                    each=move || genres.clone()
                                    key=|genre| genre.genre_id
                                    children=move |genre| {
                                        view! {
                                            <span class="badge badge-genre">{genre.name.clone()}</span>
                                        }
                                    }
                                />
                            </div>
                            <Show when={
                                let total = film.total_reviews;
                                move || total > 0
                            }>
                                <p>
                                    <strong>"Количество отзывов: "</strong>
                                    {film.total_reviews}
                                </p>
                            </Show>
                        </div>
                    </div>

                    <h2>"Актёры"</h2>
                    <div class="actor-grid">
                        <For
                            each=move || actors.clone()
                            key=|actor| actor.actor_id
                            children=move |actor| view! { <ActorCard actor=actor /> }
                        />
                    </div>

                    <RatingChart film=chart_film />
                }
                .into_any()
            }}

            <h2>"Отзывы"</h2>
            <div class="review-list">
                <For
                    each=move || reviews.get()
                    key=|review| review.review_id
                    children=move |review| view! { <ReviewCard review=review /> }
                />
            </div>

            <Show when={
                let auth = auth_for_form.clone();
                move || auth.is_authenticated()
            }>
                {move || {
                    film_id
                        .get()
                        .map(|id| {
                            view! {
                                <CreateReviewCard film_id=id on_created=on_review_created />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
