use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::settings::{SETTINGS_META, SiteSettings};
use crate::ui::{LandingPage, NotFoundPage, NotificationsContainer, provide_site_helpers};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // The hydrated client reads its settings back from this tag
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let settings_json = serde_json::to_string(&settings).unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=SETTINGS_META content=settings_json/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Settings provided by the server for this request, or read from the
/// rendered page after hydration
fn site_settings() -> SiteSettings {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::effects::dom;

        let mut site = SiteSettings::from_meta(dom::meta_content(SETTINGS_META).as_deref());
        if dom::prefers_reduced_motion() {
            site.effects = site.effects.without_motion();
        }
        site
    }

    #[cfg(feature = "ssr")]
    {
        use_context::<SiteSettings>().unwrap_or_default()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Notifications, smooth scrolling and effect settings for every page
    let helpers = provide_site_helpers(site_settings());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/plantgift.css"/>

        <Title text=helpers.site_name()/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>

        <NotificationsContainer notifications=helpers.notifications()/>
    }
}
