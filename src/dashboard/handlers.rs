//! Dashboard HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::{DashboardStats, stats_section},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, PANEL_STYLE, base, loading_spinner},
    navigation::NavBar,
    store::TransactionStore,
    transaction::transactions_section,
    upload::FILE_FIELD,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display the dashboard with the summary cards, the CSV import area and
/// the transactions table.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Response {
    let store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    dashboard_view(&store).into_response()
}

fn dashboard_view(store: &TransactionStore) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let stats = DashboardStats::from_store(store);

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            (stats_section(&stats, false))

            (import_panel())

            (transactions_section(store.transactions()))
        }
    };

    base("Dashboard", &content)
}

fn import_panel() -> Markup {
    html! {
        section class={ (PANEL_STYLE) " mb-8" }
        {
            h2 class="text-xl font-semibold text-white mb-2" { "Import Transactions" }
            p class="text-slate-400 mb-4" { "Upload a CSV file of bank transactions to categorize them." }

            form
                id="import-form"
                hx-post=(endpoints::IMPORT)
                hx-encoding="multipart/form-data"
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                hx-indicator="#import-indicator"
                hx-disabled-elt="find button"
                class="flex items-center gap-4"
            {
                input
                    type="file"
                    name=(FILE_FIELD)
                    accept=".csv,text/csv"
                    required
                    class="block w-full text-sm text-slate-300 file:mr-4 file:py-2 file:px-4
                        file:rounded-lg file:border-0 file:bg-slate-700 file:text-slate-300";

                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="import-indicator" class="htmx-indicator" { (loading_spinner()) }
                    "Import"
                }
            }
        }
    }
}
