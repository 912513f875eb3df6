use super::{Page, PlanField};

/// Events that travel upward from the views to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEvent {
    /// An input changed; `raw` is the text as typed.
    FieldChanged { field: PlanField, raw: String },
    /// A navigation control was activated.
    Navigate(Page),
    /// The user asked for the shareable link on the clipboard. The store
    /// changes nothing; the front end owns the clipboard.
    CopyLink,
}

impl PlanEvent {
    pub fn field_changed(
        field: PlanField,
        raw: impl Into<String>,
    ) -> Self {
        Self::FieldChanged {
            field,
            raw: raw.into(),
        }
    }
}
