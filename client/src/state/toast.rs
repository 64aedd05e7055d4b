//! Toast notification queue.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain queue so ordering, dismissal, and promise
//! settlement are testable without a reactive runtime. `Toasts` is the
//! `Copy` handle components pull from context; in the browser it also
//! schedules auto-dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Auto-dismiss delay for settled toasts.
pub const DEFAULT_DURATION_MS: u32 = 4000;

/// Number of toasts shown while the stack is collapsed.
pub const VISIBLE_LIMIT: usize = 3;

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Error,
    Info,
    Warning,
    Loading,
}

impl ToastKind {
    /// CSS modifier for the toast card.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Default => "toast--default",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
            Self::Warning => "toast--warning",
            Self::Loading => "toast--loading",
        }
    }

    /// Tone of a headless toast: the four typed kinds pass through, anything
    /// else (or nothing) renders as `Info`.
    #[must_use]
    pub fn headless_tone(kind: Option<Self>) -> Self {
        match kind {
            Some(kind @ (Self::Success | Self::Error | Self::Info | Self::Warning)) => kind,
            _ => Self::Info,
        }
    }
}

/// Button attached to a toast. Clicking it runs the callback and dismisses.
#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    pub on_click: Option<Callback<()>>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), on_click: None }
    }

    #[must_use]
    pub fn on_click(mut self, callback: Callback<()>) -> Self {
        self.on_click = Some(callback);
        self
    }
}

impl std::fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastOptions {
    pub description: Option<String>,
    pub action: Option<ToastAction>,
    pub cancel: Option<ToastAction>,
    /// Render as a bare tinted card instead of the standard toast chrome.
    pub headless: bool,
}

impl ToastOptions {
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn cancel(mut self, cancel: ToastAction) -> Self {
        self.cancel = Some(cancel);
        self
    }

    #[must_use]
    pub fn headless(mut self) -> Self {
        self.headless = true;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub description: Option<String>,
    pub action: Option<ToastAction>,
    pub cancel: Option<ToastAction>,
    pub headless: bool,
}

impl Toast {
    /// Auto-dismiss delay; loading toasts stay until settled.
    #[must_use]
    pub fn duration_ms(&self) -> Option<u32> {
        (self.kind != ToastKind::Loading).then_some(DEFAULT_DURATION_MS)
    }
}

/// Ordered toast queue, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl ToastState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            description: options.description,
            action: options.action,
            cancel: options.cancel,
            headless: options.headless,
        });
        id
    }

    /// Replace a toast's kind and text in place. Returns `false` if it is gone.
    pub fn settle(&mut self, id: ToastId, kind: ToastKind, message: impl Into<String>) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        toast.kind = kind;
        toast.message = message.into();
        true
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Newest first, capped at `VISIBLE_LIMIT`.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(VISIBLE_LIMIT)
    }
}

// =============================================================================
// CONTEXT HANDLE
// =============================================================================

/// Context handle for raising toasts from any component.
#[derive(Clone, Copy)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Toasts {
    #[must_use]
    pub fn new(state: RwSignal<ToastState>) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> RwSignal<ToastState> {
        self.state
    }

    fn push(self, kind: ToastKind, message: String, options: ToastOptions) -> ToastId {
        let id = self
            .state
            .try_update(|s| s.push(kind, message, options))
            .unwrap_or_default();
        self.schedule_dismiss(id);
        id
    }

    fn with_description(description: Option<&str>) -> ToastOptions {
        ToastOptions { description: description.map(str::to_owned), ..ToastOptions::default() }
    }

    pub fn show(self, message: impl Into<String>, description: Option<&str>) -> ToastId {
        self.push(ToastKind::Default, message.into(), Self::with_description(description))
    }

    pub fn success(self, message: impl Into<String>, description: Option<&str>) -> ToastId {
        self.push(ToastKind::Success, message.into(), Self::with_description(description))
    }

    pub fn error(self, message: impl Into<String>, description: Option<&str>) -> ToastId {
        self.push(ToastKind::Error, message.into(), Self::with_description(description))
    }

    pub fn info(self, message: impl Into<String>, description: Option<&str>) -> ToastId {
        self.push(ToastKind::Info, message.into(), Self::with_description(description))
    }

    pub fn warning(self, message: impl Into<String>, description: Option<&str>) -> ToastId {
        self.push(ToastKind::Warning, message.into(), Self::with_description(description))
    }

    /// Toast with action and/or cancel buttons.
    pub fn custom(self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.push(ToastKind::Default, message.into(), options)
    }

    /// Typed toast rendered as a tinted card with its own close button.
    pub fn headless(
        self,
        message: impl Into<String>,
        description: Option<&str>,
        kind: Option<ToastKind>,
    ) -> ToastId {
        let options = ToastOptions { headless: true, ..Self::with_description(description) };
        self.push(ToastKind::headless_tone(kind), message.into(), options)
    }

    /// Dismiss one toast, or all of them when `id` is `None`.
    pub fn dismiss(self, id: Option<ToastId>) {
        self.state.update(|s| match id {
            Some(id) => {
                s.dismiss(id);
            }
            None => s.dismiss_all(),
        });
    }

    /// Show a loading toast for `task`, then replace it with the outcome.
    #[cfg(feature = "hydrate")]
    pub fn promise<T, E, F>(
        self,
        task: F,
        loading: impl Into<String>,
        on_success: impl FnOnce(&T) -> String + 'static,
        on_error: impl FnOnce(&E) -> String + 'static,
    ) -> ToastId
    where
        F: std::future::Future<Output = Result<T, E>> + 'static,
        T: 'static,
        E: 'static,
    {
        let id = self.push(ToastKind::Loading, loading.into(), ToastOptions::default());
        leptos::task::spawn_local(async move {
            let (kind, message) = match task.await {
                Ok(value) => (ToastKind::Success, on_success(&value)),
                Err(err) => (ToastKind::Error, on_error(&err)),
            };
            if self.state.try_update(|s| s.settle(id, kind, message)) == Some(true) {
                self.schedule_dismiss(id);
            }
        });
        id
    }

    /// Dismiss `id` once its duration elapses. Loading toasts are skipped.
    fn schedule_dismiss(self, id: ToastId) {
        let Some(duration_ms) = self
            .state
            .try_with_untracked(|s| s.get(id).and_then(Toast::duration_ms))
            .flatten()
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            self.state.try_update(|s| s.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration_ms;
        }
    }
}

/// Toast handle provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_toast() -> Toasts {
    expect_context::<Toasts>()
}
