//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::EVENT;
use crate::net::api::backend_config;
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides the backend configuration to the registration form and sets up
/// routing for the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(backend_config());

    let title = format!("{} {}", EVENT.title, EVENT.edition);

    view! {
        <Stylesheet id="leptos" href="/pkg/meetup.css"/>
        <Title text=title/>
        <Meta name="description" content=EVENT.tagline/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
