use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use bizprofile_core::notification::{Level, Notice, Notification, NotificationId, Notifications};

/// Shared access to the toast notifications.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    queue: RwSignal<Notifications>,
    timeout_ms: u32,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            queue: create_rw_signal(Notifications::default()),
            timeout_ms: u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX),
        }
    }

    pub fn notify(self, notice: Notice) {
        let Some(id) = self.queue.try_update(|queue| queue.push(notice)) else {
            return;
        };
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            self.dismiss(id);
        });
    }

    pub fn dismiss(self, id: NotificationId) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

#[must_use]
pub fn use_notifications() -> NotificationCenter {
    expect_context()
}

#[component]
pub fn Toasts() -> impl IntoView {
    let center = use_notifications();
    let notifications =
        Signal::derive(move || center.queue.with(|q| q.iter().cloned().collect::<Vec<_>>()));

    view! {
      <Show when=move || !center.queue.with(Notifications::is_empty)>
        <div class="fixed top-4 right-4 z-50 flex w-80 flex-col gap-y-2" aria-live="polite">
          <For
            each=move || notifications.get()
            key=|notification| notification.id
            let:notification
          >
            <Toast notification on_dismiss = move |id| center.dismiss(id) />
          </For>
        </div>
      </Show>
    }
}

#[component]
fn Toast<F>(notification: Notification, on_dismiss: F) -> impl IntoView
where
    F: Fn(NotificationId) + 'static,
{
    let Notification { id, notice } = notification;
    let class = match notice.level {
        Level::Success => "rounded-md bg-green-50 p-4 text-sm text-green-800 shadow ring-1 ring-green-600/20 cursor-pointer",
        Level::Error => "rounded-md bg-red-50 p-4 text-sm text-red-800 shadow ring-1 ring-red-600/20 cursor-pointer",
    };
    view! {
      <div role="status" class=class on:click=move |_| on_dismiss(id)>
        { notice.message }
      </div>
    }
}
