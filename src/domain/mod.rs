//! Format-agnostic domain types and market math.

mod competition;
mod market;
mod selection;

pub use competition::{Competition, CompetitionInfo};
pub use market::calc_market_percentage;
pub use selection::Selection;
