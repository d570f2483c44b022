//! The stats card component and the row of cards on the dashboard.

use maud::{Markup, html};

use crate::html::format_currency;

use super::stats::DashboardStats;

/// Render the three summary cards.
///
/// With `out_of_band` set, htmx swaps the section into the page in place of
/// the current `#stats`, whatever the target of the request was.
pub(crate) fn stats_section(stats: &DashboardStats, out_of_band: bool) -> Markup {
    html! {
        section
            id="stats"
            hx-swap-oob=[out_of_band.then_some("true")]
            class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8"
        {
            (stats_card(
                "Total Transactions",
                &stats.total_count.to_string(),
                &format_currency(stats.total_amount),
            ))
            (stats_card(
                "Categorized",
                &stats.categorized_count.to_string(),
                &format!("{}%", stats.categorized_percentage),
            ))
            (stats_card(
                "Uncategorized",
                &stats.uncategorized_count.to_string(),
                "Needs review",
            ))
        }
    }
}

/// Render a card with a `title`, a prominent `value` and a `subtitle`.
pub(super) fn stats_card(title: &str, value: &str, subtitle: &str) -> Markup {
    html! {
        div class="stats-card bg-slate-800 rounded-lg border border-slate-700 p-6"
        {
            p class="stats-title text-slate-400 text-sm font-medium" { (title) }
            p class="stats-value text-3xl font-bold text-white mt-2" { (value) }
            p class="stats-subtitle text-slate-500 text-sm mt-1" { (subtitle) }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use crate::{dashboard::DashboardStats, test_utils::select_text};

    use super::{stats_card, stats_section};

    #[test]
    fn renders_title_value_and_subtitle() {
        let html = Html::parse_fragment(&stats_card("Categorized", "67%", "2 transactions").into_string());

        assert_eq!(select_text(&html, ".stats-title"), ["Categorized"]);
        assert_eq!(select_text(&html, ".stats-value"), ["67%"]);
        assert_eq!(select_text(&html, ".stats-subtitle"), ["2 transactions"]);
    }

    #[test]
    fn out_of_band_section_is_marked_for_swap() {
        let stats = DashboardStats {
            total_count: 2,
            categorized_count: 1,
            uncategorized_count: 1,
            total_amount: 12.5,
            categorized_percentage: 50,
        };

        let page = Html::parse_fragment(&stats_section(&stats, false).into_string());
        let swap = Html::parse_fragment(&stats_section(&stats, true).into_string());

        assert!(select_text(&page, "#stats[hx-swap-oob]").is_empty());
        assert_eq!(select_text(&swap, "#stats[hx-swap-oob=true] .stats-value"), ["2", "1", "1"]);
        assert_eq!(
            select_text(&swap, "#stats .stats-subtitle"),
            ["$12.50", "50%", "Needs review"]
        );
    }
}
