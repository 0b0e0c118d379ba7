use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_models::CreateReviewRequest;

use crate::api;
use crate::notify::Notices;

/// Форма нового отзыва. Оценка — целое число 0–100.
#[component]
pub(crate) fn CreateReviewCard(
    film_id: u32,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let notices = expect_context::<Notices>();
    let rating = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let parsed = rating.get().trim().parse::<u8>();
        let rating_value = match parsed {
            Ok(value) if value <= 100 => value,
            _ => {
                notices.error("Оценка должна быть числом от 0 до 100");
                return;
            }
        };
        let review_text = text.get().trim().to_string();
        if review_text.is_empty() {
            notices.error("Напишите текст отзыва");
            return;
        }

        busy.set(true);
        let notices = notices.clone();
        spawn_local(async move {
            let request = CreateReviewRequest {
                film_id,
                rating: rating_value,
                review_text,
            };
            match api::reviews::create(&request).await {
                Ok(()) => {
                    notices.success("Отзыв сохранён");
                    rating.set(String::new());
                    text.set(String::new());
                    on_created.run(());
                }
                Err(err) => notices.error(err.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="create-review" on:submit=on_submit>
            <h4>"Оставить отзыв"</h4>
            <input
                type="number"
                min="0"
                max="100"
                placeholder="Оценка, 0–100"
                prop:value=move || rating.get()
                on:input=move |ev| rating.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Текст отзыва"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || busy.get()>"Отправить"</button>
        </form>
    }
}
