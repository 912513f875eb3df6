//! Cost calculations for a team plan.
//!
//! [`engine`] produces the totals that are stored with the plan,
//! [`breakdown`] produces the presentation-only figures the summary and
//! settings pages show.

pub mod breakdown;
pub mod common;
pub mod engine;

pub use breakdown::{PerPlayerBreakdown, SummaryBreakdown, TotalBreakdown, fee_example};
pub use engine::recalculate;
