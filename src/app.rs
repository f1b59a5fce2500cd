//! Root application component with routing and meta context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::register::RegisterPage;

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
/// The login page is a server-rendered page outside this app; the success
/// path leaves the SPA with a full browser navigation, so only the
/// registration route is mounted here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/agrimart.css"/>
        <Title text="AgriMart"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=(StaticSegment("myapp"), StaticSegment("register"))
                    view=RegisterPage
                />
            </Routes>
        </Router>
    }
}
