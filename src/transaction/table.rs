//! HTML rendering for the transactions table and the section around it.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_SECONDARY_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
};

use super::core::{Category, ConfidenceLevel, Transaction, format_confidence};

/// The text shown in place of rows when there are no transactions.
pub const EMPTY_TABLE_MESSAGE: &str = "No transactions yet. Import a CSV file or categorize manually.";

/// The id of the element wrapping the table and the clear button.
pub const TRANSACTIONS_SECTION_ID: &str = "transactions-section";

const BADGE_STYLE: &str = "px-3 py-1 rounded-full text-sm font-medium";

fn category_badge_class(category: Category) -> &'static str {
    match category {
        Category::Food => "bg-orange-500/20 text-orange-400",
        Category::Transport => "bg-blue-500/20 text-blue-400",
        Category::Bills => "bg-red-500/20 text-red-400",
        Category::Shopping => "bg-pink-500/20 text-pink-400",
        Category::Entertainment => "bg-purple-500/20 text-purple-400",
        Category::WorkSupplies => "bg-green-500/20 text-green-400",
        Category::Health => "bg-yellow-500/20 text-yellow-400",
        Category::Other => "bg-slate-500/20 text-slate-400",
    }
}

fn confidence_badge_class(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "bg-green-500/20 text-green-400",
        ConfidenceLevel::Medium => "bg-yellow-500/20 text-yellow-400",
        ConfidenceLevel::Low => "bg-red-500/20 text-red-400",
    }
}

/// Render a badge for `category` in its own colour.
pub(crate) fn category_badge(category: Category) -> Markup {
    html! {
        span
            class={ (BADGE_STYLE) " " (category_badge_class(category)) }
            data-category=(category.label())
        {
            (category.label())
        }
    }
}

/// Render the transactions table and, when there are transactions, the button
/// that clears them.
///
/// Endpoints that remove transactions respond with this section so the empty
/// state and the clear button always match the store.
pub(crate) fn transactions_section(transactions: &[Transaction]) -> Markup {
    html! {
        div id=(TRANSACTIONS_SECTION_ID)
        {
            (transactions_table(transactions))

            @if !transactions.is_empty() {
                div class="flex justify-end mt-4"
                {
                    button
                        id="clear-transactions"
                        hx-post=(endpoints::CLEAR_TRANSACTIONS)
                        hx-confirm="Delete all transactions?"
                        hx-target-error="#alert-container"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Clear All"
                    }
                }
            }
        }
    }
}

/// Render the transactions table in store order.
fn transactions_table(transactions: &[Transaction]) -> Markup {
    html! {
        div class="bg-slate-800 rounded-lg border border-slate-700 overflow-hidden"
        {
            div class="px-6 py-4 border-b border-slate-700"
            {
                h2 class="text-xl font-semibold text-white" { "Recent Transactions" }
            }

            div class="overflow-x-auto"
            {
                table id="transactions-table" class="w-full"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Confidence" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Status" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }

                        @if transactions.is_empty() {
                            tr
                            {
                                td
                                    colspan="6"
                                    data-empty-state="true"
                                    class="px-6 py-8 text-center text-slate-400"
                                {
                                    (EMPTY_TABLE_MESSAGE)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Render a single table row. Endpoints that change one transaction respond
/// with this so htmx can swap the row in place.
pub(crate) fn transaction_row(transaction: &Transaction) -> Markup {
    let level = ConfidenceLevel::from_confidence(transaction.predicted_confidence);
    let correction_route = format_endpoint(endpoints::CORRECT_TRANSACTION, transaction.id);
    let delete_route = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);
    let selected_category = transaction.effective_category();

    html! {
        tr id={ "transaction-" (transaction.id) } class=(TABLE_ROW_STYLE)
        {
            td class={ (TABLE_CELL_STYLE) " text-white" } { (transaction.description) }

            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }

            td class=(TABLE_CELL_STYLE)
            {
                (category_badge(selected_category))

                @if transaction.is_corrected {
                    span class="ml-2 text-xs text-slate-400" { "(corrected)" }
                }
            }

            td class=(TABLE_CELL_STYLE) { (format_confidence(transaction.predicted_confidence)) }

            td class=(TABLE_CELL_STYLE)
            {
                span
                    class={ (BADGE_STYLE) " " (confidence_badge_class(level)) }
                    data-confidence-level=(level.label())
                {
                    (level.label())
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex items-center gap-4"
                {
                    form
                        hx-post=(correction_route)
                        hx-trigger="change"
                        hx-target="closest tr"
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                    {
                        label class="sr-only" for={ "category-" (transaction.id) } { "Correct category" }

                        select
                            id={ "category-" (transaction.id) }
                            name="category"
                            class="bg-slate-700 border border-slate-600 rounded px-2 py-1 text-sm text-white"
                        {
                            @for category in Category::ALL {
                                option
                                    value=(category.label())
                                    selected[category == selected_category]
                                {
                                    (category.label())
                                }
                            }
                        }
                    }

                    button
                        hx-delete=(delete_route)
                        hx-target={ "#" (TRANSACTIONS_SECTION_ID) }
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}
