use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api;
use crate::notify::Notices;
use crate::util;

const RESEND_COOLDOWN_SECONDS: u32 = 60;

/// Подтверждение почты: отправка кода с минутным таймером повтора
/// и ввод присланного кода.
#[component]
pub(crate) fn ConfirmEmailPage() -> impl IntoView {
    let notices = expect_context::<Notices>();
    let navigate = use_navigate();
    let location = use_location();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let code_sent = RwSignal::new(false);
    let timer = RwSignal::new(0u32);
    // Номер запущенного отсчёта: устаревшие циклы сами останавливаются.
    let timer_seq = StoredValue::new(0u64);

    let start_timer = move || {
        let seq = timer_seq.get_value() + 1;
        timer_seq.set_value(seq);
        timer.set(RESEND_COOLDOWN_SECONDS);
        spawn_local(async move {
            while timer_seq.get_value() == seq && timer.get_untracked() > 0 {
                TimeoutFuture::new(1_000).await;
                if timer_seq.get_value() != seq {
                    return;
                }
                timer.update(|left| *left = left.saturating_sub(1));
            }
        });
    };

    let send_code = {
        let notices = notices.clone();
        move || {
            let email_value = email.get_untracked().trim().to_string();
            if email_value.is_empty() {
                notices.error("Укажите email");
                return;
            }
            busy.set(true);
            let notices = notices.clone();
            spawn_local(async move {
                match api::email::send_code(&email_value).await {
                    Ok(()) => {
                        code_sent.set(true);
                        start_timer();
                        notices.success("Код отправлен — проверьте почту");
                    }
                    Err(err) => notices.error(err.user_message()),
                }
                busy.set(false);
            });
        }
    };

    // Email из строки запроса (сюда приводит регистрация); код уходит сразу.
    {
        let send_code = send_code.clone();
        Effect::new(move |_| {
            if code_sent.get_untracked() {
                return;
            }
            let search = location.search.get();
            if let Some(value) = util::query_param(&search, "email") {
                email.set(value);
                send_code();
            }
        });
    }

    let on_confirm = {
        let notices = notices.clone();
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let email_value = email.get().trim().to_string();
            let code_value = code.get().trim().to_string();
            if code_value.is_empty() {
                notices.error("Введите код из письма");
                return;
            }
            busy.set(true);
            let notices = notices.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::email::confirm(&email_value, &code_value).await {
                    Ok(()) => {
                        notices.success("Email подтверждён, теперь можно войти");
                        navigate("/auth", Default::default());
                    }
                    Err(err) => notices.error(err.user_message()),
                }
                busy.set(false);
            });
        }
    };

    let send_code_for_click = send_code.clone();

    view! {
        <div class="confirm-email-page">
            <h1>"Подтверждение почты"</h1>
            <form class="auth-form" on:submit=on_confirm>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    placeholder="Код из письма"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Подтвердить"</button>
            </form>
            <button
                class="secondary"
                disabled=move || busy.get() || timer.get() > 0
                on:click=move |_| send_code_for_click()
            >
                {move || {
                    let left = timer.get();
                    if left > 0 {
                        format!("Отправить код ещё раз ({left} с)")
                    } else if code_sent.get() {
                        "Отправить код ещё раз".to_string()
                    } else {
                        "Отправить код".to_string()
                    }
                }}
            </button>
        </div>
    }
}
