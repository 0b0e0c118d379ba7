use leptos::prelude::*;

use catalog_models::Film;

use crate::util;

#[component]
pub(crate) fn FilmCard(film: Film) -> impl IntoView {
    let href = format!("/films/{}", film.id);

    view! {
        <a href=href class="film-card">
            <img class="film-card-poster" src=film.poster_url.clone() alt=film.title.clone() />
            <div class="film-card-body">
                <h3>{film.title.clone()}</h3>
                <div class="film-card-meta">
                    <span class=util::rating_badge_class(film.avg_rating)>
                        {format!("{:.0}%", film.avg_rating)}
                    </span>
                    <span class="film-card-date">{util::format_date(&film.release_date)}</span>
                </div>
                <p class="film-card-synopsis">{util::clip(&film.synopsis, 120)}</p>
            </div>
        </a>
    }
}
