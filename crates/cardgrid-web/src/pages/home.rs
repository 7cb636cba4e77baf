/// Home page
///
/// Owns the card catalogue and renders it as a grid.

use leptos::*;

use crate::components::card_grid::CardGrid;
use crate::types::CardRecord;

/// Cards shown on the home page, in display order
pub const CARDS: &[CardRecord] = &[
    CardRecord::new(
        "React",
        "Une bibliothèque JavaScript pour construire des interfaces dynamiques.",
        "https://upload.wikimedia.org/wikipedia/commons/a/a7/React-icon.svg",
    ),
    CardRecord::new(
        "Vite",
        "Un bundler rapide pour projets modernes.",
        "https://vitejs.dev/logo-with-shadow.png",
    ),
    // Shares the Vite logo; kept as published
    CardRecord::new(
        "Tailwind CSS",
        "Un framework CSS utilitaire pour créer des designs rapides.",
        "https://vitejs.dev/logo-with-shadow.png",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <CardGrid records=CARDS/> }
}
