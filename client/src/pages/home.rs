//! Landing page with the sections the navbar links to.

use leptos::prelude::*;

use crate::state::language::LanguageState;
use crate::state::toast::use_toast;

#[component]
pub fn HomePage() -> impl IntoView {
    let language = expect_context::<RwSignal<LanguageState>>();
    let toasts = use_toast();
    let t = move |key: &'static str| language.get().t(key).to_owned();

    view! {
        <div class="home">
            <section id="home" class="home__hero">
                <h1>{move || t("page.welcome")}</h1>
                <p>{move || t("page.description")}</p>
                <a href="/examples/toast-example" class="btn btn--primary">
                    {move || t("page.getStarted")}
                </a>
            </section>

            <section id="about" class="home__section">
                <h2>{move || t("nav.about")}</h2>
                <p>{move || t("page.learnMore")}</p>
            </section>

            <section id="services" class="home__section">
                <h2>{move || t("nav.services")}</h2>
                <p>{move || t("page.contactDescription")}</p>
            </section>

            <section id="contact" class="home__section">
                <h2>{move || t("nav.contact")}</h2>
                <p>{move || t("page.contact")}</p>
                <button
                    class="btn"
                    on:click=move |_| {
                        let state = language.get_untracked();
                        toasts.info(state.t("page.contactButton"), Some(state.t("page.contactButtonDescription")));
                    }
                >
                    {move || t("page.contactButton")}
                </button>
            </section>
        </div>
    }
}
