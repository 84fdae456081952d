//! Pure bond-market primitives shared by the hub and the chain data layer.
//!
//! This crate intentionally keeps business logic free from I/O and clock
//! reads: every function is deterministic in its arguments. Amounts are
//! integer base units throughout; the only place a fraction appears is in
//! formatted display strings, which are presentation artifacts and never
//! feed back into computation.

mod error;
mod filter;
mod interest;
mod money;
mod record;
mod view;

pub use error::CoreError;
pub use filter::{filter_and_sort, FilterSpec, SortKey};
pub use interest::{compute_interest_reserve, BPS_DENOM, SECONDS_PER_YEAR};
pub use money::{format_display, truncate_to_display, BASE_UNITS_PER_DISPLAY};
pub use record::BondRecord;
pub use view::MarketView;
