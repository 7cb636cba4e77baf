/// Card grid component
///
/// Maps a record sequence into one `Card` per record, keyed by position.

use leptos::*;

use crate::components::card::Card;
use crate::types::CardRecord;

#[component]
pub fn CardGrid(
    /// Records to render, in display order
    records: &'static [CardRecord],
) -> impl IntoView {
    view! {
        <div class="card-grid">
            <For
                each=move || records.iter().copied().enumerate()
                key=|(index, _)| *index
                children=|(_, record)| view! {
                    <Card
                        title=record.title
                        description=record.description
                        image=record.image_url
                    />
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{card_count, render, strip_hydration};

    const RECORDS: &[CardRecord] = &[
        CardRecord::new("first", "one", "https://example.com/1.png"),
        CardRecord::new("second", "two", "https://example.com/2.png"),
        CardRecord::new("first", "one", "https://example.com/1.png"),
        CardRecord::new("fourth", "four", "https://example.com/4.png"),
    ];

    #[test]
    fn test_one_card_per_record() {
        let html = render(|| view! { <CardGrid records=RECORDS/> });
        assert_eq!(card_count(&html), RECORDS.len());
    }

    #[test]
    fn test_cards_follow_record_order() {
        let html = strip_hydration(&render(|| view! { <CardGrid records=RECORDS/> }));

        let positions: Vec<usize> = ["first", "second", "fourth"]
            .iter()
            .map(|title| html.find(&format!(r#"<h2 class="card-title">{}</h2>"#, title)).unwrap())
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_duplicate_records_render_separately() {
        let html = strip_hydration(&render(|| view! { <CardGrid records=RECORDS/> }));
        assert_eq!(html.matches(r#"<h2 class="card-title">first</h2>"#).count(), 2);
        assert_eq!(html.matches(r#"src="https://example.com/1.png""#).count(), 2);
    }

    #[test]
    fn test_empty_sequence() {
        const EMPTY: &[CardRecord] = &[];
        let html = strip_hydration(&render(|| view! { <CardGrid records=EMPTY/> }));

        assert_eq!(card_count(&html), 0);
        assert!(html.contains(r#"<div class="card-grid">"#));
    }
}
