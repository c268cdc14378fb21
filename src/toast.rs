#![allow(non_snake_case)]

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

const HIDE_AFTER_MS: u32 = 3_000;

/// Handle for showing transient notifications. The pending hide timer lives
/// in a single slot: showing a new toast drops (and thereby cancels) the
/// previous timer, so a late timeout can never hide a newer message.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    message: Signal<String>,
    visible: Signal<bool>,
    pending: Signal<Option<Timeout>>,
}

pub fn use_toaster() -> Toaster {
    Toaster {
        message: use_signal(String::new),
        visible: use_signal(|| false),
        pending: use_signal(|| None),
    }
}

impl Toaster {
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("toast: {message}");
        let mut text = self.message;
        let mut visible = self.visible;
        let mut pending = self.pending;
        text.set(message);
        visible.set(true);
        let timeout = Timeout::new(HIDE_AFTER_MS, move || visible.set(false));
        pending.set(Some(timeout));
    }
}

#[component]
pub fn Toast(toaster: Toaster) -> Element {
    let slide = if *toaster.visible.read() {
        ""
    } else {
        " translate-y-20 opacity-0"
    };
    rsx! {
        div {
            id: "toast",
            class: "fixed bottom-6 left-1/2 -translate-x-1/2 bg-gray-900 text-white px-4 py-2 rounded-lg shadow-lg transition-all z-50{slide}",
            span { id: "toast-msg", "{toaster.message}" }
        }
    }
}
