/// Type definitions for the card grid
///
/// Display records shared between the server render and the hydrated client.

/// One entry in the card grid.
///
/// Records carry no identity of their own; the grid keys them by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

impl CardRecord {
    pub const fn new(title: &'static str, description: &'static str, image_url: &'static str) -> Self {
        Self {
            title,
            description,
            image_url,
        }
    }
}
