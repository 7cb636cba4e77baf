/// Card component
///
/// Renders one record as an image, a heading and a paragraph. Values are
/// passed through untouched; escaping is left to the renderer.

use leptos::*;

#[component]
pub fn Card(
    /// Heading text, also used as the image's alt text
    #[prop(into)]
    title: String,
    /// Paragraph text
    #[prop(into)]
    description: String,
    /// Image source URL
    #[prop(into)]
    image: String,
) -> impl IntoView {
    let alt = title.clone();

    view! {
        <div class="card">
            <img src=image alt=alt class="card-image"/>
            <h2 class="card-title">{title}</h2>
            <p class="card-description">{description}</p>
        </div>
    }
}
