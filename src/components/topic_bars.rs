//! Top Topics Bars
//!
//! Ranked horizontal bars, one row per topic, in input order. Bar length is
//! proportional to the largest count on display.

use leptos::*;

use crate::data::use_dashboard_data;
use crate::theme;

/// Horizontal bar list for topic counts
#[component]
pub fn TopicBars() -> impl IntoView {
    let data = use_dashboard_data();
    let max_value = data.topics.iter().map(|t| t.value).max().unwrap_or(0);

    view! {
        <div class="space-y-3">
            {data.topics
                .iter()
                .map(|topic| {
                    let width = bar_width_pct(topic.value, max_value);
                    view! {
                        <div class="flex items-center gap-3">
                            <span
                                class="text-sm w-36 truncate"
                                style=format!("color: {}", theme::SECONDARY_TEXT)
                            >
                                {topic.name.clone()}
                            </span>
                            <div
                                class="flex-1 rounded"
                                style=format!("height: 10px; background: {}", theme::BAR_TRACK)
                            >
                                <div
                                    class="rounded"
                                    style=format!(
                                        "width: {width:.1}%; height: 10px; background: {}",
                                        theme::ACCENT_YELLOW,
                                    )
                                />
                            </div>
                            <span
                                class="text-sm font-medium w-6 text-right"
                                style=format!("color: {}", theme::PRIMARY_TEXT)
                            >
                                {topic.value}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Bar width as a percentage of the largest value. A zero maximum renders
/// every bar empty rather than dividing by zero.
pub(crate) fn bar_width_pct(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(max) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_topic_fills_the_row() {
        assert_eq!(bar_width_pct(7, 7), 100.0);
    }

    #[test]
    fn test_bar_width_proportional() {
        assert!((bar_width_pct(5, 7) - 71.428).abs() < 0.01);
        assert_eq!(bar_width_pct(0, 7), 0.0);
    }

    #[test]
    fn test_zero_max_renders_empty_bars() {
        assert_eq!(bar_width_pct(0, 0), 0.0);
    }
}
