use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::Notices;
use crate::state::AdminStore;
use crate::util::{format_date_opt, toggle_id};

/// Вкладка актёров: список и удаление. Создание и правка пока доступны
/// только через клиентскую библиотеку.
#[component]
pub(crate) fn AdminActors() -> impl IntoView {
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
                match admin.delete_actor(id).await {
                    Ok(()) => notices.success("Актёр удалён"),
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
                match admin.delete_actors(ids).await {
                    Ok(()) => {
                        selected.set(Vec::new());
                        notices.success("Выбранные актёры удалены");
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
                    "Удалить выбранных"
                </button>
            </div>

            <Show
                when=move || !admin_for_loading.actors.loading.get()
                fallback=|| view! { <div class="spinner">"Загрузка..."</div> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Имя"</th>
                            <th>"Добавлен"</th>
                            <th>"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || admin_for_rows.actors.items.get()
                            key=|actor| actor.actor_id
                            children=move |actor| {
                                let id = actor.actor_id;
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
                                        <td>{actor.name.clone()}</td>
                                        <td>{format_date_opt(&actor.created_at)}</td>
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
