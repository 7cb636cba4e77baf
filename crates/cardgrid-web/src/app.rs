/// Root application component
///
/// Document shell around the home page: stylesheet, title and meta tags.

use leptos::*;
use leptos_meta::*;

use crate::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cardgrid-web.css"/>
        <Title text="CardGrid"/>
        <Meta name="description" content="A static grid of informational cards"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <main>
            <HomePage/>
        </main>
    }
}
