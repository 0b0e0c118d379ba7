use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_models::{runtime_format, FilmPayload};

use crate::notify::Notices;
use crate::state::AdminStore;
use crate::util::{format_date, toggle_id};

/// Вкладка фильмов: таблица с удалением (в том числе массовым) и форма
/// создания/правки с загрузкой постера.
#[component]
pub(crate) fn AdminFilms() -> impl IntoView {
    let admin = expect_context::<AdminStore>();
    let notices = expect_context::<Notices>();

    let selected = RwSignal::new(Vec::<u32>::new());

    // Форма создания/правки; `editing == None` — создание нового фильма.
    let editing = RwSignal::new(None::<u32>);
    let form_open = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let synopsis = RwSignal::new(String::new());
    let release_date = RwSignal::new(String::new());
    let runtime = RwSignal::new(String::new());
    let producer = RwSignal::new(String::new());
    let genre_ids = RwSignal::new(Vec::<u32>::new());
    let actor_ids = RwSignal::new(Vec::<u32>::new());
    let poster_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let reset_form = move || {
        editing.set(None);
        title.set(String::new());
        synopsis.set(String::new());
        release_date.set(String::new());
        runtime.set(String::new());
        producer.set(String::new());
        genre_ids.set(Vec::new());
        actor_ids.set(Vec::new());
    };

    let open_edit = Callback::new({
        let admin = admin.clone();
        move |id: u32| {
            let Some(film) = admin
                .films
                .items
                .get_untracked()
                .into_iter()
                .find(|film| film.id == id)
            else {
                return;
            };
            editing.set(Some(id));
            title.set(film.title);
            synopsis.set(film.synopsis);
            release_date.set(film.release_date.format("%Y-%m-%d").to_string());
            runtime.set(film.runtime);
            producer.set(film.producer);
            genre_ids.set(if film.genre_ids.is_empty() {
                film.genres.iter().map(|genre| genre.genre_id).collect()
            } else {
                film.genre_ids
            });
            actor_ids.set(if film.actor_ids.is_empty() {
                film.actors.iter().map(|actor| actor.actor_id).collect()
            } else {
                film.actor_ids
            });
            form_open.set(true);
        }
    });

    let on_submit = {
        let admin = admin.clone();
        let notices = notices.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let title_value = title.get().trim().to_string();
            if title_value.is_empty() {
                notices.error("Укажите название");
                return;
            }
            let runtime_value = runtime.get().trim().to_string();
            if runtime_format(&runtime_value).is_err() {
                notices.error("Длительность в формате \"2h 30m\", \"2h\" или \"30m\"");
                return;
            }

            let payload = FilmPayload {
                title: title_value,
                synopsis: synopsis.get().trim().to_string(),
                release_date: release_date.get(),
                runtime: runtime_value,
                producer: producer.get().trim().to_string(),
                genre_ids: genre_ids.get(),
                actor_ids: actor_ids.get(),
            };
            let poster = poster_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            let admin = admin.clone();
            let notices = notices.clone();
            spawn_local(async move {
                let result = match editing.get_untracked() {
                    Some(id) => admin.update_film(id, payload, poster).await,
                    None => admin.create_film(payload, poster).await,
                };
                match result {
                    Ok(()) => {
                        notices.success("Фильм сохранён");
                        form_open.set(false);
                    }
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    };

    let on_delete = Callback::new({
        let admin = admin.clone();
        let notices = notices.clone();
        move |id: u32| {
            let admin = admin.clone();
            let notices = notices.clone();
            spawn_local(async move {
                match admin.delete_film(id).await {
                    Ok(()) => notices.success("Фильм удалён"),
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
                match admin.delete_films(ids).await {
                    Ok(()) => {
                        selected.set(Vec::new());
                        notices.success("Выбранные фильмы удалены");
                    }
                    Err(err) => notices.error(err.user_message()),
                }
            });
        }
    };

    let admin_for_loading = admin.clone();
    let admin_for_rows = admin.clone();
    let admin_for_genres = admin.clone();
    let admin_for_actors = admin.clone();

    view! {
        <div class="admin-section">
            <div class="admin-toolbar">
                <button on:click=move |_| {
                    reset_form();
                    form_open.set(true);
                }>"Добавить фильм"</button>
                <button
                    class="danger"
                    disabled=move || selected.with(|ids| ids.is_empty())
                    on:click=on_delete_selected
                >
                    "Удалить выбранные"
                </button>
            </div>

            <Show when=move || form_open.get()>
                <form class="admin-form" on:submit=on_submit.clone()>
                    <h3>
                        {move || {
                            if editing.get().is_some() {
                                "Правка фильма"
                            } else {
                                "Новый фильм"
                            }
                        }}
                    </h3>
                    <input
                        placeholder="Название"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Описание"
                        prop:value=move || synopsis.get()
                        on:input=move |ev| synopsis.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        type="date"
                        prop:value=move || release_date.get()
                        on:input=move |ev| release_date.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Длительность, например 2h 30m"
                        prop:value=move || runtime.get()
                        on:input=move |ev| runtime.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Продюсер"
                        prop:value=move || producer.get()
                        on:input=move |ev| producer.set(event_target_value(&ev))
                    />

                    <h4>"Жанры"</h4>
                    <div class="admin-checklist">
                        <For
                            each=move || admin_for_genres.genres.items.get()
                            key=|genre| genre.genre_id
                            children=move |genre| {
                                let id = genre.genre_id;
                                view! {
                                    <label class="filter-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                genre_ids.with(|ids| ids.contains(&id))
                                            }
                                            on:change=move |_| {
                                                genre_ids.update(|ids| toggle_id(ids, id))
                                            }
                                        />
                                        {genre.name.clone()}
                                    </label>
                                }
                            }
                        />
                    </div>

                    <h4>"Актёры"</h4>
                    <div class="admin-checklist">
                        <For
                            each=move || admin_for_actors.actors.items.get()
                            key=|actor| actor.actor_id
                            children=move |actor| {
                                let id = actor.actor_id;
                                view! {
                                    <label class="filter-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                actor_ids.with(|ids| ids.contains(&id))
                                            }
                                            on:change=move |_| {
                                                actor_ids.update(|ids| toggle_id(ids, id))
                                            }
                                        />
                                        {actor.name.clone()}
                                    </label>
                                }
                            }
                        />
                    </div>

                    <label class="file-label">
                        "Постер"
                        <input type="file" accept="image/*" node_ref=poster_input />
                    </label>

                    <div class="admin-form-actions">
                        <button type="submit">"Сохранить"</button>
                        <button
                            type="button"
                            class="secondary"
                            on:click=move |_| form_open.set(false)
                        >
                            "Отмена"
                        </button>
                    </div>
                </form>
            </Show>

            <Show
                when=move || !admin_for_loading.films.loading.get()
                fallback=|| view! { <div class="spinner">"Загрузка..."</div> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Название"</th>
                            <th>"Дата выхода"</th>
                            <th>"Рейтинг"</th>
                            <th>"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || admin_for_rows.films.items.get()
                            key=|film| film.id
                            children=move |film| {
                                let id = film.id;
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
                                        <td>{film.title.clone()}</td>
                                        <td>{format_date(&film.release_date)}</td>
                                        <td>{format!("{:.0}", film.avg_rating)}</td>
                                        <td>
                                            <button on:click=move |_| open_edit.run(id)>
                                                "Изменить"
                                            </button>
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
