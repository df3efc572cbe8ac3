//! Contributor Card
//!
//! One card per contributor: name, message count, engagement count, and a
//! small indicator bar. The bar width is capped at 100% while the displayed
//! engagement number stays uncapped.

use leptos::*;

use crate::data::Contributor;
use crate::theme;

/// Card for a single contributor
#[component]
pub fn ContributorCard(contributor: Contributor) -> impl IntoView {
    let bar_width = engagement_bar_pct(contributor.engagement);

    view! {
        <div
            class="p-4 rounded-lg flex flex-col justify-between"
            style=format!("background: {}", theme::CARD_INSET)
        >
            <div class="flex items-start justify-between">
                <div>
                    <div
                        class="text-sm font-medium"
                        style=format!("color: {}", theme::PRIMARY_TEXT)
                    >
                        {contributor.name.clone()}
                    </div>
                    <div
                        class="text-xs mt-1"
                        style=format!("color: {}", theme::SECONDARY_TEXT)
                    >
                        {format!("{} messages", contributor.messages)}
                    </div>
                </div>
                <div class="text-right">
                    <div
                        class="text-lg font-semibold"
                        style=format!("color: {}", theme::ACCENT_BLUE)
                    >
                        {contributor.engagement}
                    </div>
                    <div class="text-xs" style=format!("color: {}", theme::SECONDARY_TEXT)>
                        "responses"
                    </div>
                </div>
            </div>

            // Indicator bar, keeps card heights consistent
            <div class="mt-3">
                <div style=format!("height: 6px; border-radius: 6px; background: {}", theme::BAR_TRACK)>
                    <div style=format!(
                        "width: {bar_width}%; height: 6px; border-radius: 6px; background: {}",
                        theme::ACCENT_BLUE,
                    ) />
                </div>
            </div>
        </div>
    }
}

/// Indicator bar width in percent, capped at 100 for heavy engagers.
pub(crate) fn engagement_bar_pct(engagement: u32) -> u32 {
    engagement.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_caps_at_full_width() {
        assert_eq!(engagement_bar_pct(150), 100);
        assert_eq!(engagement_bar_pct(102), 100);
        assert_eq!(engagement_bar_pct(100), 100);
    }

    #[test]
    fn test_bar_below_cap_unchanged() {
        assert_eq!(engagement_bar_pct(47), 47);
        assert_eq!(engagement_bar_pct(0), 0);
    }
}
