//! Dashboard Page
//!
//! The single dashboard view: header, chart grid, contributor section,
//! reaction breakdown. Binds the dataset and its derived totals to the
//! display components; everything below the header is a pure function of
//! that input.

use leptos::*;

use crate::components::{ContributorCard, ReactionPie, SummaryCard, TimelineChart, TopicBars};
use crate::data::use_dashboard_data;
use crate::metrics::DerivedTotals;
use crate::theme;

/// Link to the Teams channel this dashboard summarizes.
const CHANNEL_URL: &str = "https://teams.microsoft.com/l/channel/19%3AltsddcMYixLw0ftrKEKMHr7R7gLs-bsj2WP7mexxa2w1%40thread.tacv2/macOS%20Tahoe%20Feedback?groupId=05c93ec5-f53f-491d-a30f-4f083101939e&tenantId=3cbcc3d3-094d-4006-9849-0d11d61f484d";

/// Header figure for channel membership; not derived from the dataset.
const ACTIVE_USERS: u32 = 190;

const LAST_UPDATED: &str = "Oct 20";

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let data = use_dashboard_data();
    let totals = DerivedTotals::compute(&data);

    view! {
        <div>
            <Header />

            <main class="grid grid-cols-3 gap-6">
                // Activity Timeline (left two columns)
                <section
                    class="col-span-2 rounded-2xl p-6"
                    style=format!("background: {}", theme::CARD)
                >
                    <div class="flex items-center justify-between mb-4">
                        <h2
                            class="text-lg font-semibold"
                            style=format!("color: {}", theme::PRIMARY_TEXT)
                        >
                            "Activity Timeline"
                        </h2>
                        <span class="text-sm" style=format!("color: {}", theme::SECONDARY_TEXT)>
                            "Messages per day"
                        </span>
                    </div>
                    <TimelineChart />
                </section>

                // Top Topics (right column)
                <section
                    class="rounded-2xl p-6"
                    style=format!("background: {}", theme::CARD)
                >
                    <h2
                        class="text-lg font-semibold mb-4"
                        style=format!("color: {}", theme::PRIMARY_TEXT)
                    >
                        "Top Topics"
                    </h2>
                    <TopicBars />
                </section>

                // Most Active Contributors (full width)
                <section
                    class="col-span-3 rounded-2xl p-6"
                    style=format!("background: {}", theme::CARD)
                >
                    <div class="flex items-center justify-between mb-4">
                        <h2
                            class="text-lg font-semibold"
                            style=format!("color: {}", theme::PRIMARY_TEXT)
                        >
                            "Most Active Contributors"
                        </h2>
                        <span class="text-sm" style=format!("color: {}", theme::SECONDARY_TEXT)>
                            "Reactions / Responses"
                        </span>
                    </div>

                    // Summary boxes for the two derived totals
                    <div class="grid grid-cols-2 gap-4 mb-4">
                        <SummaryCard
                            label="Total Reactions"
                            value=totals.total_reactions
                            secondary_label="from"
                            secondary_value=format!("{} users", data.contributors.len())
                            accent=theme::ACCENT_BLUE
                        />
                        <SummaryCard
                            label="Total Responses"
                            value=totals.total_responses
                            secondary_label="reactions"
                            secondary_value=totals.total_reactions.to_string()
                            accent=theme::ACCENT_GREEN
                        />
                    </div>

                    // One card per contributor
                    <div class="grid grid-cols-5 gap-4">
                        {data.contributors
                            .iter()
                            .map(|c| view! { <ContributorCard contributor=c.clone() /> })
                            .collect_view()}
                    </div>
                </section>

                // Reaction Breakdown (one of three columns)
                <section
                    class="col-span-1 rounded-2xl p-6"
                    style=format!("background: {}", theme::CARD)
                >
                    <h2
                        class="text-lg font-semibold mb-4"
                        style=format!("color: {}", theme::PRIMARY_TEXT)
                    >
                        "Reaction Breakdown"
                    </h2>
                    <ReactionPie />
                </section>
            </main>
        </div>
    }
}

/// Page header: title, channel link, last-updated badge, export placeholder
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-6 gap-3">
            <div>
                <h1
                    class="text-2xl font-semibold"
                    style=format!("color: {}", theme::PRIMARY_TEXT)
                >
                    "macOS Beta Community Insights"
                </h1>
                <p class="text-sm mt-1" style=format!("color: {}", theme::SECONDARY_TEXT)>
                    "Based on the corrected October 2025 Beta Teams dataset."
                </p>
                <a
                    href=CHANNEL_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-2 inline-block text-sm font-medium hover:underline"
                    style=format!("color: {}", theme::ACCENT_GREEN)
                >
                    "There are currently "
                    <span class="font-semibold">{ACTIVE_USERS} " active users"</span>
                    " in this Teams channel."
                </a>
            </div>

            <div class="flex items-center gap-3">
                <span
                    class="px-3 py-2 rounded-md text-sm font-medium"
                    style=format!("background: {}", theme::CARD)
                >
                    {format!("Last updated: {LAST_UPDATED}")}
                </span>
                // Placeholder for a future export subsystem; intentionally
                // has no handler.
                <button
                    class="px-4 py-2 rounded-md font-medium opacity-80 cursor-not-allowed"
                    style=format!(
                        "background: {}; color: {}",
                        theme::ACCENT_BLUE,
                        theme::BACKGROUND,
                    )
                    disabled=true
                >
                    "Export CSV"
                </button>
            </div>
        </header>
    }
}
