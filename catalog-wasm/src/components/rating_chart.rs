use leptos::prelude::*;

use catalog_models::Film;

/// Распределение отзывов по корзинам рейтинга: SVG-гистограмма из пяти
/// столбцов с долей от всех отзывов в подсказке.
#[component]
pub(crate) fn RatingChart(film: Film) -> impl IntoView {
    let buckets = [
        ("0–20", film.count_ratings_0_20),
        ("21–40", film.count_ratings_21_40),
        ("41–60", film.count_ratings_41_60),
        ("61–80", film.count_ratings_61_80),
        ("81–100", film.count_ratings_81_100),
    ];
    let tallest = buckets
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0)
        .max(1);
    let total = film.total_reviews.max(1);

    let bars = buckets
        .iter()
        .enumerate()
        .map(|(index, (label, count))| {
            let height = 100.0 * f64::from(*count) / f64::from(tallest);
            let x = 10.0 + index as f64 * 58.0;
            let y = 110.0 - height;
            let percent = 100.0 * f64::from(*count) / f64::from(total);
            view! {
                <g>
                    <rect class="rating-chart-bar" x=x y=y width="48" height=height>
                        <title>{format!("{label}: {count} ({percent:.0}% от всех отзывов)")}</title>
                    </rect>
                    <text class="rating-chart-label" x={x + 24.0} y="125" text-anchor="middle">
                        {*label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="rating-chart">
            <h3>"Распределение отзывов по рейтингам"</h3>
            <svg viewBox="0 0 300 140" role="img">{bars}</svg>
        </div>
    }
}
