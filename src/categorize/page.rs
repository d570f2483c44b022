//! The categorize page.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        PANEL_STYLE, base, loading_spinner,
    },
    navigation::NavBar,
    transaction::{Category, category_badge},
    upload::FILE_FIELD,
};

use super::form::categorize_form;

/// Render the categorize page.
pub async fn get_categorize_page() -> Response {
    categorize_view().into_response()
}

fn categorize_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::CATEGORIZE_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="max-w-2xl mx-auto space-y-8"
            {
                section class=(PANEL_STYLE)
                {
                    h2 class="text-2xl font-bold text-white mb-6" { "Categorize Transaction" }

                    (categorize_form("", None))
                }

                section class=(PANEL_STYLE)
                {
                    h2 class="text-xl font-semibold text-white mb-4" { "Batch Categorize" }

                    (batch_form())
                }

                section class=(PANEL_STYLE)
                {
                    h2 class="text-xl font-semibold text-white mb-4" { "Scan a Receipt" }

                    (receipt_form())
                }

                (categories_panel())
            }
        }
    };

    base("Categorize", &content)
}

fn batch_form() -> Markup {
    html! {
        form
            id="batch-categorize-form"
            hx-post=(endpoints::BATCH_CATEGORIZE)
            hx-target="#alert-container"
            hx-target-error="#alert-container"
            hx-indicator="#batch-indicator"
            hx-disabled-elt="find button"
            class="space-y-4"
        {
            label for="descriptions" class=(FORM_LABEL_STYLE) { "One description per line" }

            textarea
                id="descriptions"
                name="descriptions"
                rows="5"
                required
                placeholder="Starbucks coffee\nUber to airport\nElectricity bill"
                class=(FORM_TEXT_INPUT_STYLE)
            {}

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="batch-indicator" class="htmx-indicator" { (loading_spinner()) }
                "Categorize All"
            }
        }
    }
}

fn receipt_form() -> Markup {
    html! {
        form
            id="receipt-form"
            hx-post=(endpoints::OCR_CATEGORIZE)
            hx-encoding="multipart/form-data"
            hx-target="#alert-container"
            hx-target-error="#alert-container"
            hx-indicator="#receipt-indicator"
            hx-disabled-elt="find button"
            class="space-y-4"
        {
            label for="receipt" class=(FORM_LABEL_STYLE) { "Receipt image" }

            input
                id="receipt"
                type="file"
                name=(FILE_FIELD)
                accept="image/*"
                required
                class="block w-full text-sm text-slate-300 file:mr-4 file:py-2 file:px-4
                    file:rounded-lg file:border-0 file:bg-slate-700 file:text-slate-300";

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="receipt-indicator" class="htmx-indicator" { (loading_spinner()) }
                "Scan Receipt"
            }
        }
    }
}

fn categories_panel() -> Markup {
    html! {
        section id="categories" class=(PANEL_STYLE)
        {
            h3 class="text-lg font-semibold text-white mb-4" { "Available Categories" }

            div class="grid grid-cols-2 md:grid-cols-4 gap-3"
            {
                @for category in Category::ALL {
                    (category_badge(category))
                }
            }
        }
    }
}
