//! Page projections.
//!
//! Each page is a plain function `fn(&PlanState, &DerivedTotals) -> PageView`
//! selected by [`view_for`]. A [`PageView`] describes what to show and which
//! [`PlanEvent`] each control emits; it never holds state of its own and is
//! rebuilt after every change.

mod calculator;
mod settings;
mod summary;

use ice_core::{DerivedTotals, Page, PlanEvent, PlanField, PlanState};
use rust_decimal::Decimal;

pub use calculator::calculator_view;
pub use settings::settings_view;
pub use summary::summary_view;

pub const FOOTER: &str = "Ice Planner v2 • Multiple Pages • Responsive Design";

pub type ViewFn = fn(&PlanState, &DerivedTotals) -> PageView;

/// The view function for `page`.
pub fn view_for(page: Page) -> ViewFn {
    match page {
        Page::Calculator => calculator_view,
        Page::Summary => summary_view,
        Page::Settings => settings_view,
    }
}

/// Builds the view of the state's current page.
pub fn current_view(
    state: &PlanState,
    totals: &DerivedTotals,
) -> PageView {
    view_for(state.current_page)(state, totals)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: Page,
    pub title: &'static str,
    pub nav: Vec<NavItem>,
    pub sections: Vec<Section>,
    pub footer: &'static str,
}

impl PageView {
    /// A page with the shared header and footer.
    pub fn new(
        page: Page,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            page,
            title: page.title(),
            nav: NavItem::for_page(page),
            sections,
            footer: FOOTER,
        }
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Input> {
        self.sections.iter().flat_map(|s| s.items.iter()).filter_map(|item| match item {
            Item::Input(input) => Some(input),
            _ => None,
        })
    }

    pub fn input(
        &self,
        field: PlanField,
    ) -> Option<&Input> {
        self.inputs().find(|input| input.field == field)
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.sections.iter().flat_map(|s| s.items.iter()).filter_map(|item| match item {
            Item::Action(action) => Some(action),
            _ => None,
        })
    }

    /// Value of the first stat or line labelled `label`.
    pub fn value_of(
        &self,
        label: &str,
    ) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find_map(|item| match item {
                Item::Stat { label: l, value } | Item::Line { label: l, value } if l == label => {
                    Some(value.as_str())
                }
                _ => None,
            })
    }
}

/// One entry of the navigation header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

impl NavItem {
    fn for_page(current: Page) -> Vec<Self> {
        Page::ALL
            .into_iter()
            .map(|page| Self {
                page,
                label: page.title(),
                active: page == current,
            })
            .collect()
    }

    pub fn event(&self) -> PlanEvent {
        PlanEvent::Navigate(self.page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(
        heading: impl Into<String>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            heading: Some(heading.into()),
            items,
        }
    }

    pub fn untitled(items: Vec<Item>) -> Self {
        Self {
            heading: None,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Input(Input),
    /// A headline figure.
    Stat { label: String, value: String },
    /// A label/value row.
    Line { label: String, value: String },
    Text(String),
    Action(Action),
}

impl Item {
    pub fn stat(
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Stat {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn line(
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Line {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Url,
    Number {
        min: Decimal,
        step: Decimal,
    },
}

/// An editable field bound to one [`PlanField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub field: PlanField,
    pub label: &'static str,
    pub kind: InputKind,
    /// Current value as it appears in the input.
    pub value: String,
    pub placeholder: Option<&'static str>,
    pub suffix: Option<&'static str>,
    pub hint: Option<String>,
}

impl Input {
    pub fn text(
        field: PlanField,
        label: &'static str,
        value: &str,
    ) -> Self {
        Self {
            field,
            label,
            kind: InputKind::Text,
            value: value.to_string(),
            placeholder: None,
            suffix: None,
            hint: None,
        }
    }

    pub fn number(
        field: PlanField,
        label: &'static str,
        value: impl ToString,
        min: Decimal,
        step: Decimal,
    ) -> Self {
        Self {
            field,
            label,
            kind: InputKind::Number { min, step },
            value: value.to_string(),
            placeholder: None,
            suffix: None,
            hint: None,
        }
    }

    pub fn with_kind(
        mut self,
        kind: InputKind,
    ) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_suffix(
        mut self,
        suffix: &'static str,
    ) -> Self {
        self.suffix = Some(suffix);
        self
    }

    pub fn with_placeholder(
        mut self,
        placeholder: &'static str,
    ) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_hint(
        mut self,
        hint: impl Into<String>,
    ) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The event emitted when the user types `raw` into this input.
    pub fn event(
        &self,
        raw: impl Into<String>,
    ) -> PlanEvent {
        PlanEvent::field_changed(self.field, raw)
    }
}

/// A button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub event: PlanEvent,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_page_has_a_view() {
        let state = PlanState::default();
        let totals = ice_core::calculations::recalculate(&state);

        for page in Page::ALL {
            let view = view_for(page)(&state, &totals);
            assert_eq!(view.page, page);
            assert_eq!(view.title, page.title());
        }
    }

    #[test]
    fn nav_marks_only_the_current_page() {
        let state = PlanState {
            current_page: Page::Settings,
            ..PlanState::default()
        };
        let totals = ice_core::calculations::recalculate(&state);

        let view = current_view(&state, &totals);

        let active: Vec<_> = view.nav.iter().filter(|n| n.active).map(|n| n.page).collect();
        assert_eq!(active, vec![Page::Settings]);
        assert_eq!(view.nav.len(), 3);
        assert_eq!(view.footer, FOOTER);
    }

    #[test]
    fn nav_items_emit_navigation() {
        let item = NavItem {
            page: Page::Summary,
            label: "Summary",
            active: false,
        };

        assert_eq!(item.event(), PlanEvent::Navigate(Page::Summary));
    }
}
