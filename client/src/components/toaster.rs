//! Toast stack rendered once at the application root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastAction, ToastId, Toasts};

/// Top-right toast stack. Shows the newest toasts with close buttons.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let state = toasts.state();

    view! {
        <section class="toaster toaster--top-right" aria-live="polite">
            <For
                each=move || state.with(|s| s.visible().cloned().collect::<Vec<_>>())
                key=|toast| (toast.id, toast.kind, toast.message.clone())
                children=move |toast| {
                    let id = toast.id;
                    let description = toast.description.clone();
                    let action = toast.action.clone();
                    let cancel = toast.cancel.clone();
                    view! {
                        <div class=toast_class(&toast) role="status">
                            <div class="toast__body">
                                <p class="toast__message">{toast.message.clone()}</p>
                                {description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <div class="toast__buttons">
                                {cancel.map(|c| action_button(toasts, id, c, "toast__cancel"))}
                                {action.map(|a| action_button(toasts, id, a, "toast__action"))}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Close"
                                on:click=move |_| toasts.dismiss(Some(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </section>
    }
}

fn action_button(toasts: Toasts, id: ToastId, action: ToastAction, class: &'static str) -> impl IntoView {
    let on_click = action.on_click;
    view! {
        <button
            class=class
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
                toasts.dismiss(Some(id));
            }
        >
            {action.label}
        </button>
    }
}

fn toast_class(toast: &Toast) -> String {
    if toast.headless {
        format!("toast toast--headless {}", toast.kind.css_modifier())
    } else {
        format!("toast {}", toast.kind.css_modifier())
    }
}
