//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod contributor_card;
pub mod reaction_pie;
pub mod summary_card;
pub mod timeline_chart;
pub mod topic_bars;

pub use contributor_card::ContributorCard;
pub use reaction_pie::ReactionPie;
pub use summary_card::SummaryCard;
pub use timeline_chart::TimelineChart;
pub use topic_bars::TopicBars;
