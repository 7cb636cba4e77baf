/// Page components for the card grid
///
/// Top-level views mounted by the root component.

pub mod home;
