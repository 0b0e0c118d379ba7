use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use catalog_models::parse_page_input;

use crate::notify::Notices;

/// Пагинация с ручным вводом номера страницы.
///
/// «Вперёд» гаснет, когда последняя загрузка вернула неполную страницу;
/// «Назад» — на первой странице. Некорректный ввод номера показывает
/// уведомление и не навигирует.
#[component]
pub(crate) fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] total_pages: Signal<Option<u32>>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let notices = expect_context::<Notices>();
    let page_input = RwSignal::new(String::new());

    // Поле ввода следует за актуальной страницей.
    Effect::new(move |_| page_input.set(page.get().to_string()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match parse_page_input(&page_input.get(), total_pages.get()) {
            Ok(next) => on_page.run(next),
            Err(err) => notices.error(err.to_string()),
        }
    };

    view! {
        <div class="pagination">
            <button
                disabled=move || page.get() <= 1
                on:click=move |_| on_page.run(page.get().saturating_sub(1))
            >
                "Назад"
            </button>
            <form on:submit=on_submit>
                <input
                    class="page-input"
                    prop:value=move || page_input.get()
                    on:input=move |ev| page_input.set(event_target_value(&ev))
                />
            </form>
            <button
                disabled=move || !has_next.get()
                on:click=move |_| on_page.run(page.get() + 1)
            >
                "Вперёд"
            </button>
        </div>
    }
}
