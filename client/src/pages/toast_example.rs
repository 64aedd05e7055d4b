//! Showcase page exercising every toast variant.

use leptos::prelude::*;

use crate::state::toast::{ToastAction, ToastKind, ToastOptions, use_toast};

#[component]
pub fn ToastExamplePage() -> impl IntoView {
    let toasts = use_toast();

    let on_custom = move |_| {
        let undo = Callback::new(move |()| {
            toasts.info("Undone", None);
        });
        toasts.custom(
            "Item moved to trash",
            ToastOptions::default()
                .description("You can undo this action")
                .action(ToastAction::new("Undo").on_click(undo))
                .cancel(ToastAction::new("Dismiss")),
        );
    };

    let on_promise = move |_| {
        #[cfg(feature = "hydrate")]
        toasts.promise(
            async {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                Ok::<_, String>("report.pdf")
            },
            "Saving...",
            |name| format!("Saved {name}"),
            |err| format!("Save failed: {err}"),
        );
    };

    view! {
        <div class="toast-example">
            <h1>"Toast Notifications"</h1>
            <div class="toast-example__grid">
                <button class="btn btn--success" on:click=move |_| {
                    toasts.success("Saved successfully", Some("Your changes have been stored"));
                }>
                    "Success"
                </button>
                <button class="btn btn--error" on:click=move |_| {
                    toasts.error("Something went wrong", Some("Please try again"));
                }>
                    "Error"
                </button>
                <button class="btn btn--info" on:click=move |_| {
                    toasts.info("New information", None);
                }>
                    "Info"
                </button>
                <button class="btn btn--warning" on:click=move |_| {
                    toasts.warning("Please review your input", None);
                }>
                    "Warning"
                </button>
                <button class="btn" on:click=move |_| {
                    toasts.show("Plain notification", None);
                }>
                    "Default"
                </button>
                <button class="btn" on:click=move |_| {
                    toasts.headless("Headless toast", Some("Rendered as a bare card"), Some(ToastKind::Success));
                }>
                    "Headless"
                </button>
                <button class="btn" on:click=on_custom>
                    "With action"
                </button>
                <button class="btn" on:click=on_promise>
                    "Promise"
                </button>
                <button class="btn btn--ghost" on:click=move |_| toasts.dismiss(None)>
                    "Dismiss all"
                </button>
            </div>
        </div>
    }
}
