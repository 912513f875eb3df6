use ice_core::calculations::SummaryBreakdown;
use ice_core::query::format_number;
use ice_core::{DerivedTotals, Page, PlanState};

use super::{Item, PageView, Section};
use crate::widgets::format_currency;

/// "1 player", "15 players".
pub fn player_count_label(players: u32) -> String {
    if players == 1 {
        "1 player".to_string()
    } else {
        format!("{players} players")
    }
}

pub fn summary_view(
    state: &PlanState,
    totals: &DerivedTotals,
) -> PageView {
    let breakdown = SummaryBreakdown::compute(state, totals);
    let team = if state.team_name.is_empty() {
        "Team"
    } else {
        state.team_name.as_str()
    };

    let mut header = Vec::with_capacity(2);
    if state.has_logo() {
        header.push(Item::line("Logo", state.logo_url.clone()));
    }
    header.push(Item::text(player_count_label(state.players)));

    let stats = vec![
        Item::stat("Base Total", format_currency(totals.base_total)),
        Item::stat("Fees", format_currency(breakdown.totals.fees)),
        Item::stat("Total", format_currency(totals.total_with_fees)),
        Item::stat("Per Player", format_currency(totals.per_player)),
    ];

    let t = &breakdown.totals;
    let whole = vec![
        Item::line(
            format!(
                "Ice Time ({}h @ ${}/h)",
                format_number(state.hours),
                format_number(state.ice_cost_per_hour)
            ),
            format_currency(t.ice),
        ),
        Item::line("Coaches", format_currency(t.coach)),
        Item::line(
            format!(
                "Jerseys ({} @ ${} each)",
                state.players,
                format_number(state.jersey_cost_per_player)
            ),
            format_currency(t.jersey),
        ),
        Item::line("Subtotal", format_currency(t.subtotal)),
        Item::line("Fees", format_currency(t.fees)),
        Item::line("Total", format_currency(t.total)),
    ];

    let p = &breakdown.per_player;
    let share = vec![
        Item::line("Ice Time Share", format_currency(p.ice)),
        Item::line("Coach Share", format_currency(p.coach)),
        Item::line("Jersey", format_currency(p.jersey)),
        Item::line("Fee Share", format_currency(p.fees)),
        Item::line("Total Per Player", format_currency(p.total)),
    ];

    PageView::new(
        Page::Summary,
        vec![
            Section::new(team, header),
            Section::untitled(stats),
            Section::new("Cost Breakdown (Total)", whole),
            Section::new("Per-Player Breakdown", share),
        ],
    )
}
