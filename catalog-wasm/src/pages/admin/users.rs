use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::Notices;
use crate::state::AdminStore;
use crate::util::toggle_id;

#[component]
pub(crate) fn AdminUsers() -> impl IntoView {
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
                match admin.delete_user(id).await {
                    Ok(()) => notices.success("Пользователь удалён"),
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
                match admin.delete_users(ids).await {
                    Ok(()) => {
                        selected.set(Vec::new());
                        notices.success("Выбранные пользователи удалены");
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
                when=move || !admin_for_loading.users.loading.get()
                fallback=|| view! { <div class="spinner">"Загрузка..."</div> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Логин"</th>
                            <th>"Email"</th>
                            <th>"Админ"</th>
                            <th>"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || admin_for_rows.users.items.get()
                            key=|user| user.user_id.unwrap_or_default()
                            children=move |user| {
                                let id = user.user_id.unwrap_or_default();
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
                                        <td>{user.login.clone().unwrap_or_default()}</td>
                                        <td>{user.email.clone().unwrap_or_default()}</td>
                                        <td>{if user.is_admin { "да" } else { "нет" }}</td>
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
