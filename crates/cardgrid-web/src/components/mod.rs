/// UI components for the card grid
///
/// Presentational building blocks; they hold no state.

pub mod card;
pub mod card_grid;
