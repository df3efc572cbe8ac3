//! Summary Card
//!
//! Inset box showing one derived total verbatim, with a small secondary
//! figure on the right.

use leptos::*;

use crate::theme;

/// Summary box for a single derived total
#[component]
pub fn SummaryCard(
    /// Label above the total
    label: &'static str,
    /// The derived total, displayed verbatim
    value: u64,
    /// Caption above the secondary figure
    secondary_label: &'static str,
    /// Secondary figure text
    #[prop(into)]
    secondary_value: String,
    /// Accent color for the secondary figure
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="p-4 rounded-lg flex items-center justify-between"
            style=format!("background: {}", theme::CARD_INSET)
        >
            <div>
                <div class="text-xs" style=format!("color: {}", theme::SECONDARY_TEXT)>
                    {label}
                </div>
                <div
                    class="text-2xl font-semibold"
                    style=format!("color: {}", theme::PRIMARY_TEXT)
                >
                    {value}
                </div>
            </div>
            <div class="text-sm" style=format!("color: {accent}")>
                <div class="text-xs">{secondary_label}</div>
                <div class="font-medium">{secondary_value}</div>
            </div>
        </div>
    }
}
