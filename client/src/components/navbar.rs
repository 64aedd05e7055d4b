//! Top navigation bar with section links, language switch, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every label comes from the language provider and every control reads the
//! provider state, so the server markup and first client frame both show the
//! defaults. Control labels that depend on the real preference wait for
//! `mounted` before changing.

use leptos::prelude::*;

use crate::i18n;
use crate::state::language::{Language, LanguageState};
use crate::state::preference::PreferenceValue;
use crate::state::theme::{Theme, ThemeState};
use crate::util::platform::Platform;

const SECTIONS: [(&str, &str); 4] = [
    ("home", "nav.home"),
    ("about", "nav.about"),
    ("services", "nav.services"),
    ("contact", "nav.contact"),
];

/// Smooth-scroll to the element with `id` on the current page.
fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let platform = expect_context::<Platform>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let language = expect_context::<RwSignal<LanguageState>>();

    let mounted = move || theme.get().mounted() && language.get().mounted();
    let t = move |key: &'static str| language.get().t(key).to_owned();

    let on_language = {
        let platform = platform.clone();
        move |_| {
            language.update(|l| {
                let next = l.language().toggled();
                l.set_language(next, &platform);
            });
        }
    };

    let on_theme = move |_| {
        theme.update(|t| {
            t.toggle(&platform);
        });
    };

    // Pre-mount labels are pinned to the defaults so SSR and hydration agree.
    let language_label = move || {
        let state = language.get();
        let shown = if mounted() { state.language() } else { Language::DEFAULT };
        i18n::translate(shown, shown.label_key()).to_owned()
    };
    let theme_icon = move || {
        if mounted() && theme.get().theme() == Theme::Dark { "☀" } else { "☾" }
    };
    let theme_label = move || {
        let next = theme.get().theme().toggled();
        language.get().t(next.label_key()).to_owned()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__logo">
                    {move || t("nav.logo")}
                </a>

                <div class="navbar__links">
                    {SECTIONS
                        .into_iter()
                        .map(|(id, key)| {
                            view! {
                                <a
                                    href=format!("/#{id}")
                                    class="navbar__link"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section(id);
                                    }
                                >
                                    {move || t(key)}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar__controls">
                    <button
                        class="btn navbar__language"
                        on:click=on_language
                        aria-label=language_label
                        title=language_label
                    >
                        {language_label}
                    </button>
                    <button
                        class="btn navbar__theme"
                        on:click=on_theme
                        aria-label=theme_label
                        title=theme_label
                    >
                        {theme_icon}
                    </button>
                </div>
            </div>
        </nav>
    }
}
