use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::Notices;
use crate::state::AdminStore;
use crate::util::{clip, toggle_id};

#[component]
pub(crate) fn AdminReviews() -> impl IntoView {
    let admin = expect_context::<AdminStore>();
    let notices = expect_context::<Notices>();

    let selected = RwSignal::new(Vec::<u32>::new());

    let on_delete = Callback::new({
        let admin = admin.clone();
        let notices = notices.clone();
        move |id: u32| {
            let admin = admin.clone();
            let notices = notices.clone();
            spawn_local(async move {
                match admin.delete_review(id).await {
                    Ok(()) => notices.success("Отзыв удалён"),
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    });

    let on_delete_selected = {
        let admin = admin.clone();
        let notices = notices.clone();
        move |_| {
            let ids = selected.get();
            if ids.is_empty() {
                return;
            }
            let admin = admin.clone();
            let notices = notices.clone();
            spawn_local(async move {
                match admin.delete_reviews(ids).await {
                    Ok(()) => {
                        selected.set(Vec::new());
                        notices.success("Выбранные отзывы удалены");
                    }
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    };

    let admin_for_loading = admin.clone();
    let admin_for_rows = admin.clone();

    view! {
        <div class="admin-section">
            <div class="admin-toolbar">
                <button
                    class="danger"
                    disabled=move || selected.with(|ids| ids.is_empty())
                    on:click=on_delete_selected
                >
                    "Удалить выбранные"
                </button>
            </div>

            <Show
                when=move || !admin_for_loading.reviews.loading.get()
                fallback=|| view! { <div class="spinner">"Загрузка..."</div> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Фильм"</th>
                            <th>"Оценка"</th>
                            <th>"Текст"</th>
                            <th>"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || admin_for_rows.reviews.items.get()
                            key=|review| review.review_id
                            children=move |review| {
                                let id = review.review_id;
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    selected.with(|ids| ids.contains(&id))
                                                }
                                                on:change=move |_| {
                                                    selected.update(|ids| toggle_id(ids, id))
                                                }
                                            />
                                        </td>
                                        <td>
                                            <a href=format!("/films/{}", review.film_id)>
                                                {format!("№{}", review.film_id)}
                                            </a>
                                        </td>
                                        <td>{format!("{}/100", review.rating)}</td>
                                        <td>{clip(&review.review_text, 80)}</td>
                                        <td>
                                            <button
                                                class="danger"
                                                on:click=move |_| on_delete.run(id)
                                            >
                                                "Удалить"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
