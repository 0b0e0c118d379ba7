//! Всплывающие уведомления.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notice notice-info",
            Self::Success => "notice notice-success",
            Self::Error => "notice notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Notice {
    pub(crate) id: u64,
    pub(crate) kind: NoticeKind,
    pub(crate) text: String,
}

#[derive(Debug, Clone)]
/// Очередь уведомлений; каждое живёт пять секунд и снимается само.
pub(crate) struct Notices {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl Notices {
    pub(crate) fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    fn push(&self, kind: NoticeKind, text: impl Into<String>) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);

        let items = self.items;
        items.update(|items| {
            items.push(Notice {
                id,
                kind,
                text: text.into(),
            })
        });

        spawn_local(async move {
            TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
            items.update(|items| items.retain(|notice| notice.id != id));
        });
    }

    pub(crate) fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text);
    }

    pub(crate) fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text);
    }

    pub(crate) fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text);
    }
}

#[component]
pub(crate) fn NoticeArea() -> impl IntoView {
    let notices = expect_context::<Notices>();

    view! {
        <div class="notices">
            <For
                each=move || notices.items.get()
                key=|notice| notice.id
                children=move |notice| {
                    view! { <div class=notice.kind.css_class()>{notice.text.clone()}</div> }
                }
            />
        </div>
    }
}
