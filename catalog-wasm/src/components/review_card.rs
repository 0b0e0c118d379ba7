use leptos::prelude::*;

use catalog_models::Review;

use crate::util;

#[component]
pub(crate) fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="review-card">
            <div class="review-card-head">
                <img class="review-card-avatar" src=review.user_avatar_url.clone() alt="аватар" />
                <span class=util::rating_badge_class(f64::from(review.rating))>
                    {format!("{}/100", review.rating)}
                </span>
                <span class="review-card-date">{util::format_date_opt(&review.created_at)}</span>
            </div>
            <p>{review.review_text.clone()}</p>
        </div>
    }
}
