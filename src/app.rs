//! App Root Component
//!
//! Main application component with routing and the dataset provider.

use leptos::*;
use leptos_router::*;

use crate::data::{provide_dashboard_data, DashboardData};
use crate::pages::Dashboard;
use crate::theme;

/// Root application component. The dataset is a parameter so a future data
/// loader can mount the app over live data; the embedded sample is the
/// default.
#[component]
pub fn App(
    #[prop(default = DashboardData::sample())]
    data: DashboardData,
) -> impl IntoView {
    // Provide the dataset to all components
    provide_dashboard_data(data);

    view! {
        <Router>
            <div
                class="min-h-screen p-6 flex flex-col"
                style=format!(
                    "background: {}; color: {}",
                    theme::BACKGROUND,
                    theme::PRIMARY_TEXT,
                )
            >
                <div class="max-w-7xl mx-auto w-full flex-1">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </div>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer with the data source note
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer
            class="mt-8 text-sm text-center"
            style=format!("color: {}", theme::SECONDARY_TEXT)
        >
            "Data source: macOS Beta Community Insights, cleaned and corrected (42 records, Oct 2025)"
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="mb-6" style=format!("color: {}", theme::SECONDARY_TEXT)>
                "The page you're looking for doesn't exist."
            </p>
            <A
                href="/"
                class="px-6 py-3 rounded-lg font-medium hover:underline"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
