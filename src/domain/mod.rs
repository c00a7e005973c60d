//! Domain logic for unit price comparison lives here.

pub mod app_state;
pub mod entities;
pub mod ranking;
pub mod units;

#[allow(unused_imports)]
pub use app_state::{AppState, ItemField};
#[allow(unused_imports)]
pub use entities::{Item, SavedComparison, ValidationError};
#[allow(unused_imports)]
pub use ranking::{evaluate, normalize, sanitize_price, ItemOutcome, RankedItem, RankingResult};
#[allow(unused_imports)]
pub use units::{Dimension, Unit, UnitError};
