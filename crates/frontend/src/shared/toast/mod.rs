//! Toast notifications.
//!
//! Screens only see the [`Notifier`] trait through [`use_notifier`]; the
//! concrete [`ToastService`] is installed once by the root component.

mod toaster;

pub use toaster::Toaster;

use contracts::shared::errors::ApiError;
use contracts::shared::notice::{Notice, Severity};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::Arc;
use uuid::Uuid;

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notice: Notice,
}

/// Queue of visible toasts, auto-dismissed with `gloo-timers`
#[derive(Clone, Copy)]
pub struct ToastService {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, notice: Notice) {
        let id = Uuid::new_v4();
        let life = notice.life_ms;
        match notice.severity {
            Severity::Error => log::error!("{}: {:?}", notice.summary, notice.detail),
            Severity::Warn => log::warn!("{}: {:?}", notice.summary, notice.detail),
            _ => log::debug!("{}: {:?}", notice.summary, notice.detail),
        }
        self.toasts.update(|list| list.push(Toast { id, notice }));
        if let Some(ms) = life {
            let this = *self;
            gloo_timers::callback::Timeout::new(ms, move || this.dismiss(id)).forget();
        }
    }
}

/// Handle stored in context
#[derive(Clone)]
pub struct NotifierHandle(Arc<dyn Notifier + Send + Sync>);

impl NotifierHandle {
    pub fn new(inner: impl Notifier + Send + Sync + 'static) -> Self {
        Self(Arc::new(inner))
    }

    pub fn notify(&self, notice: Notice) {
        self.0.notify(notice);
    }

    pub fn success(&self, detail: impl Into<String>) {
        self.notify(Notice::success(detail));
    }

    pub fn info(&self, detail: impl Into<String>) {
        self.notify(Notice::info(detail));
    }

    pub fn warn(&self, detail: impl Into<String>) {
        self.notify(Notice::warn(detail));
    }

    pub fn error(&self, detail: impl Into<String>) {
        self.notify(Notice::error(detail));
    }

    /// Cancellation is informational; errors carrying a correlation id stay
    /// until closed so the id can be copied
    pub fn api_error(&self, err: &ApiError) {
        let notice = match err {
            ApiError::Cancelled => Notice::info(err.to_string()),
            ApiError::Validation(_) => Notice::warn(err.to_string()),
            ApiError::Http {
                correlation_id: Some(_),
                ..
            } => Notice::error(err.to_string()).sticky(),
            _ => Notice::error(err.to_string()),
        };
        self.notify(notice);
    }
}

pub fn use_notifier() -> NotifierHandle {
    use_context::<NotifierHandle>().expect("NotifierHandle not found in component tree")
}

/// Runs an async action with a loading flag; `Err` becomes a toast
pub fn spawn_action<F>(notifier: NotifierHandle, loading: RwSignal<bool>, action: F)
where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    loading.set(true);
    spawn_local(async move {
        if let Err(err) = action.await {
            notifier.api_error(&err);
        }
        // The screen may be gone by now
        let _ = loading.try_set(false);
    });
}
