use ice_core::calculations::fee_example;
use ice_core::query::format_number;
use ice_core::{DerivedTotals, Page, PlanField, PlanState};
use rust_decimal::Decimal;

use super::{Input, InputKind, Item, PageView, Section};
use crate::widgets::{format_amount, format_currency, format_percent};

const ABOUT: &str = "Ice Planner v2 helps teams calculate costs and share expenses fairly. \
                     Data is saved locally on this device and synced via shareable URLs.";

pub fn settings_view(
    state: &PlanState,
    _totals: &DerivedTotals,
) -> PageView {
    let pct = state.fee_percent;
    let fixed = state.fee_fixed;
    let fixed_text = format_currency(fixed);

    let team = vec![
        Item::Input(
            Input::text(PlanField::TeamName, "Team Name", &state.team_name)
                .with_placeholder("Enter team name"),
        ),
        Item::Input(
            Input::text(PlanField::LogoUrl, "Logo URL", &state.logo_url)
                .with_kind(InputKind::Url)
                .with_placeholder("https://example.com/logo.png")
                .with_hint("Logo will appear at 42×42px on the calculator page"),
        ),
    ];

    let fees = vec![
        Item::text("Fees are applied to the base cost. Formula: (Base × Percent) + Fixed"),
        Item::Input(
            Input::number(
                PlanField::FeePercent,
                "Fee Percentage",
                format_number(pct),
                Decimal::ZERO,
                Decimal::new(5, 3),
            )
            .with_hint(format!("{} = {} fee", format_amount(pct, 3), format_percent(pct))),
        ),
        Item::Input(
            Input::number(
                PlanField::FeeFixed,
                "Fixed Fee",
                format_number(fixed),
                Decimal::ZERO,
                Decimal::new(5, 1),
            )
            .with_suffix("$")
            .with_hint(format!("Flat {fixed_text} added per transaction")),
        ),
        Item::text(format!(
            "Example: Base cost $1000 with {} + {fixed_text}: ($1000 × {}) + {fixed_text}",
            format_percent(pct),
            format_amount(Decimal::ONE.saturating_add(pct), 3),
        )),
        Item::line("Example total", format_currency(fee_example(pct, fixed))),
    ];

    PageView::new(
        Page::Settings,
        vec![
            Section::new("Team Information", team),
            Section::new("Fee Configuration", fees),
            Section::new("About", vec![Item::text(ABOUT)]),
        ],
    )
}
