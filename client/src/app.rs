//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `shell` renders the SSR document and embeds the pre-render initializer in
//! `<head>`, ahead of the hydration scripts. `App` builds the `Platform` and
//! the preference/toast state once and provides them as context. The single
//! mount effect fires each provider's `Pending -> Reconciled` transition;
//! nothing else reads the document root before it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toaster::Toaster;
use crate::pages::{home::HomePage, login::LoginPage, toast_example::ToastExamplePage};
use crate::state::language::{Language, LanguageState};
use crate::state::preference::PreferenceValue;
use crate::state::theme::ThemeState;
use crate::state::toast::{ToastState, Toasts};
use crate::util::init_script::init_script;
use crate::util::platform::Platform;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=Language::DEFAULT.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=init_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the platform handles, preference state, and toast queue, then
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let platform = Platform::current();
    let theme = RwSignal::new(ThemeState::new());
    let language = RwSignal::new(LanguageState::new());
    let toasts = Toasts::new(RwSignal::new(ToastState::new()));

    provide_context(platform.clone());
    provide_context(theme);
    provide_context(language);
    provide_context(toasts);

    // Effects only run in the browser after hydration: this is the mount transition.
    Effect::new(move || {
        theme.update(|t| {
            t.reconcile(&platform);
        });
        language.update(|l| {
            l.reconcile(&platform);
        });
        log::debug!(
            "preferences reconciled: theme={:?} language={:?}",
            theme.get_untracked().theme(),
            language.get_untracked().language()
        );
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/template-app.css"/>
        <Title text="Template App"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("examples"), StaticSegment("toast-example"))
                        view=ToastExamplePage
                    />
                </Routes>
            </main>
        </Router>
        <Toaster/>
    }
}
