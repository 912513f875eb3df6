use ice_core::query::format_number;
use ice_core::{DerivedTotals, Page, PlanEvent, PlanField, PlanState};
use rust_decimal::Decimal;

use super::{Action, Input, Item, PageView, Section};
use crate::widgets::format_currency;

pub fn calculator_view(
    state: &PlanState,
    totals: &DerivedTotals,
) -> PageView {
    let mut identity = Vec::with_capacity(3);
    if state.has_logo() {
        identity.push(Item::line("Logo", state.logo_url.clone()));
    }
    identity.push(Item::Input(Input::text(PlanField::TeamName, "Team", &state.team_name)));
    identity.push(Item::Input(Input::text(PlanField::LogoUrl, "Logo URL", &state.logo_url)));

    let costs = vec![
        Item::Input(
            Input::number(
                PlanField::IceCostPerHour,
                "Ice cost ($/hour)",
                format_number(state.ice_cost_per_hour),
                Decimal::ZERO,
                Decimal::ONE,
            )
            .with_suffix("$"),
        ),
        Item::Input(Input::number(
            PlanField::Hours,
            "Hours",
            format_number(state.hours),
            Decimal::ZERO,
            Decimal::ONE,
        )),
        Item::Input(
            Input::number(
                PlanField::CoachCost,
                "Coaches ($)",
                format_number(state.coach_cost),
                Decimal::ZERO,
                Decimal::ONE,
            )
            .with_suffix("$"),
        ),
        Item::Input(
            Input::number(
                PlanField::JerseyCostPerPlayer,
                "Jerseys ($)",
                format_number(state.jersey_cost_per_player),
                Decimal::ZERO,
                Decimal::ONE,
            )
            .with_suffix("$"),
        ),
        Item::Input(Input::number(
            PlanField::Players,
            "Players",
            state.players,
            Decimal::ONE,
            Decimal::ONE,
        )),
    ];

    let summary = vec![
        Item::stat("Base total", format_currency(totals.base_total)),
        Item::stat("With fees", format_currency(totals.total_with_fees)),
        Item::stat("Per player", format_currency(totals.per_player)),
        Item::Action(Action {
            label: "Copy sharable URL",
            event: PlanEvent::CopyLink,
        }),
    ];

    PageView::new(
        Page::Calculator,
        vec![
            Section::new("Ice Planner", identity),
            Section::untitled(costs),
            Section::new("Totals", summary),
        ],
    )
}
