//! Helpers for rendering components to HTML in tests.

use leptos::*;

/// Render a view to an HTML string inside a fresh reactive runtime
pub fn render<F, N>(f: F) -> String
where
    F: FnOnce() -> N,
    N: IntoView,
{
    let runtime = create_runtime();
    leptos::leptos_dom::HydrationCtx::reset_id();
    let html = f().into_view().render_to_string().to_string();
    runtime.dispose();
    html
}

/// Remove hydration keys and marker comments, leaving plain markup
pub fn strip_hydration(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    loop {
        let comment = rest.find("<!--");
        let key = rest.find(" data-hk=\"");

        let (start, end_marker) = match (comment, key) {
            (Some(c), Some(k)) if k < c => (k, "\""),
            (Some(c), _) => (c, "-->"),
            (None, Some(k)) => (k, "\""),
            (None, None) => break,
        };

        out.push_str(&rest[..start]);
        let skip = if end_marker == "\"" { " data-hk=\"".len() } else { "<!--".len() };
        let tail = &rest[start + skip..];
        match tail.find(end_marker) {
            Some(end) => rest = &tail[end + end_marker.len()..],
            None => {
                rest = "";
                break;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Number of card fragments in rendered markup
pub fn card_count(html: &str) -> usize {
    html.matches(r#"class="card""#).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hydration() {
        let html = r#"<!--hk=0-0-0-1|leptos-card-start--><div data-hk="0-0-0-2" class="card"><h2 class="card-title">React</h2></div><!--hk=0-0-0-1|leptos-card-end-->"#;
        assert_eq!(
            strip_hydration(html),
            r#"<div class="card"><h2 class="card-title">React</h2></div>"#
        );
    }

    #[test]
    fn test_card_count_ignores_child_classes() {
        let html = r#"<div class="card"><img class="card-image"/><h2 class="card-title"></h2></div>"#;
        assert_eq!(card_count(html), 1);
    }
}
