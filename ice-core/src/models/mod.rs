mod derived_totals;
mod page;
mod plan_event;
mod plan_field;
mod plan_state;

pub use derived_totals::DerivedTotals;
pub use page::{Page, ParsePageError};
pub use plan_event::PlanEvent;
pub use plan_field::{FieldKind, ParseFieldError, PlanField};
pub use plan_state::{DEFAULT_TEAM_NAME, PlanState};
