use leptos::prelude::*;

use catalog_models::Review;

use crate::notify::Notices;
use crate::util;

/// Карточка отзыва в профиле: просмотр, правка и удаление.
#[component]
pub(crate) fn ProfileReviewCard(
    review: Review,
    #[prop(into)] on_save: Callback<(u32, u8, String)>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let notices = expect_context::<Notices>();
    let editing = RwSignal::new(false);
    let rating = RwSignal::new(review.rating.to_string());
    let text = RwSignal::new(review.review_text.clone());

    let review_id = review.review_id;
    let film_href = format!("/films/{}", review.film_id);

    let on_save_click = move |_| {
        let parsed = rating.get().trim().parse::<u8>();
        let rating_value = match parsed {
            Ok(value) if value <= 100 => value,
            _ => {
                notices.error("Оценка должна быть числом от 0 до 100");
                return;
            }
        };
        editing.set(false);
        on_save.run((review_id, rating_value, text.get().trim().to_string()));
    };

    view! {
        <div class="profile-review-card">
            <a href=film_href>
                <img
                    class="profile-review-poster"
                    src=review.film_poster_url.clone()
                    alt="постер"
                />
            </a>
            <Show
                when=move || editing.get()
                fallback={
                    let review = review.clone();
                    move || {
                        view! {
                            <div class="profile-review-view">
                                <span class=util::rating_badge_class(f64::from(review.rating))>
                                    {format!("{}/100", review.rating)}
                                </span>
                                <p>{review.review_text.clone()}</p>
                                <span class="review-card-date">
                                    {util::format_date_opt(&review.created_at)}
                                </span>
                            </div>
                        }
                    }
                }
            >
                <div class="profile-review-edit">
                    <input
                        type="number"
                        min="0"
                        max="100"
                        prop:value=move || rating.get()
                        on:input=move |ev| rating.set(event_target_value(&ev))
                    />
                    <textarea
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </Show>
            <div class="profile-review-actions">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <button on:click=move |_| editing.set(true)>"Изменить"</button>
                        }
                    }
                >
                    <button on:click=on_save_click>"Сохранить"</button>
                    <button class="secondary" on:click=move |_| editing.set(false)>
                        "Отмена"
                    </button>
                </Show>
                <button class="danger" on:click=move |_| on_delete.run(review_id)>
                    "Удалить"
                </button>
            </div>
        </div>
    }
}
