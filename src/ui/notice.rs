//! Toast notice component and its context
//!
//! A single transient message with guaranteed disappearance. The dismiss
//! timer is a cancellable scheduled task: every `show` takes a fresh
//! generation token from the core state, and the timer clears the message
//! only if its token is still current (last-write-wins, no queue).

use leptos::prelude::*;

use crate::core::NoticeState;

#[cfg(not(feature = "ssr"))]
use crate::core::NOTICE_DISMISS_MS;

#[derive(Clone, Copy)]
pub struct NoticeContext {
    state: RwSignal<NoticeState>,
}

impl NoticeContext {
    /// Show `message`, replacing any visible notice and restarting the
    /// dismiss countdown.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        let mut token = 0;
        self.state.update(|state| token = state.show(message));

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let state = self.state;
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                // A no-op if a newer show superseded this timer.
                state.update(|state| state.expire(token));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = token;
        }
    }

    pub fn message(&self) -> Option<String> {
        self.state.with(|state| state.message().map(str::to_owned))
    }
}

/// Notice toast, rendered while a message is visible.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let notice = use_notice_context();

    view! {
        <Show when=move || notice.message().is_some()>
            <div class="toast">{move || notice.message()}</div>
        </Show>
    }
}

/// Provide notice context to the application
pub fn provide_notice_context() -> NoticeContext {
    let ctx = NoticeContext {
        state: RwSignal::new(NoticeState::new()),
    };
    provide_context(ctx);
    ctx
}

/// Use notice context from anywhere in the component tree
pub fn use_notice_context() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}
