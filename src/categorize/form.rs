//! The single-description categorize form.
//!
//! The form is rendered by the categorize page and re-rendered by the
//! categorize endpoint, which swaps it in place. While a request is in flight
//! htmx adds the `htmx-request` class, which shows the spinner, and disables
//! the submit button. The server always renders the idle form.

use maud::{Markup, html};

use crate::{
    api_client::CategorizationResult,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
    transaction::{category_badge, format_confidence},
};

/// The message shown when the categorization service could not be reached
/// or returned an error.
pub const CATEGORIZE_FAILED_MESSAGE: &str = "Failed to categorize transaction";

/// The result of the last submission shown under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum CategorizeOutcome {
    Categorized(CategorizationResult),
    Failed,
}

/// Render the categorize form with `description` in the input.
pub fn categorize_form(description: &str, outcome: Option<&CategorizeOutcome>) -> Markup {
    html! {
        form
            id="categorize-form"
            hx-post=(endpoints::CATEGORIZE)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#categorize-indicator"
            hx-disabled-elt="find button"
            class="space-y-4"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Transaction description" }

                div class="flex gap-4"
                {
                    input
                        id="description"
                        type="text"
                        name="description"
                        value=(description)
                        placeholder="e.g., Starbucks coffee, Uber to airport, Electricity bill..."
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);

                    button type="submit" class=(BUTTON_PRIMARY_STYLE)
                    {
                        span id="categorize-indicator" class="htmx-indicator" { (loading_spinner()) }
                        "Categorize"
                    }
                }
            }

            @match outcome {
                Some(CategorizeOutcome::Categorized(result)) => {
                    div
                        id="categorize-result"
                        class="bg-green-500/20 border border-green-500/50 rounded-lg p-4"
                    {
                        p class="text-sm text-slate-400" { (result.description) }

                        div class="flex items-center gap-4 mt-2"
                        {
                            (category_badge(result.category))

                            span class="text-green-400 font-medium confidence"
                            {
                                (format_confidence(result.confidence)) " confidence"
                            }
                        }
                    }
                }
                Some(CategorizeOutcome::Failed) => {
                    div
                        id="categorize-error"
                        role="alert"
                        class="bg-red-500/20 border border-red-500/50 rounded-lg p-4 text-red-400"
                    {
                        (CATEGORIZE_FAILED_MESSAGE)
                    }
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use crate::{
        api_client::CategorizationResult,
        endpoints,
        test_utils::{
            assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_valid_html,
            must_get_form, must_select, select_text,
        },
        transaction::Category,
    };

    use super::{CATEGORIZE_FAILED_MESSAGE, CategorizeOutcome, categorize_form};

    #[test]
    fn idle_form_posts_to_categorize_endpoint() {
        let html = Html::parse_fragment(&categorize_form("", None).into_string());

        assert_valid_html(&html);
        let form = must_get_form(&html, "categorize-form");
        assert_hx_endpoint(&form, endpoints::CATEGORIZE, "hx-post");
        assert_hx_endpoint(&form, "outerHTML", "hx-swap");
        assert_form_input(&form, "description", "input[type=text]");
        assert_form_submit_button(&form);
        assert!(select_text(&html, "#categorize-result").is_empty());
        assert!(select_text(&html, "#categorize-error").is_empty());
    }

    #[test]
    fn shows_category_and_confidence() {
        let outcome = CategorizeOutcome::Categorized(CategorizationResult {
            description: "Starbucks coffee".to_owned(),
            category: Category::Food,
            confidence: 0.92,
        });

        let html = Html::parse_fragment(&categorize_form("", Some(&outcome)).into_string());

        assert_eq!(select_text(&html, "#categorize-result span[data-category]"), ["Food"]);
        assert_eq!(select_text(&html, "#categorize-result .confidence"), ["92% confidence"]);
    }

    #[test]
    fn shows_generic_failure_message_and_keeps_input() {
        let html = Html::parse_fragment(
            &categorize_form("Starbucks coffee", Some(&CategorizeOutcome::Failed)).into_string(),
        );

        assert_eq!(select_text(&html, "#categorize-error"), [CATEGORIZE_FAILED_MESSAGE]);
        assert_eq!(
            must_select(&html, "input[name=description]")[0]
                .value()
                .attr("value"),
            Some("Starbucks coffee")
        );
    }
}
