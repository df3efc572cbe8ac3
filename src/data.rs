//! Dashboard Data Model
//!
//! The four record collections the dashboard renders, plus the embedded
//! sample dataset used when no other data is supplied.
//!
//! All numeric fields carry `#[serde(default)]` so that records arriving from
//! an external JSON export with a missing count simply read as zero instead
//! of failing deserialization. The collections are immutable for the lifetime
//! of a render pass; nothing here mutates after construction.

use leptos::*;

/// One point on the activity timeline. `date` is a display label; points are
/// plotted in the order the caller supplies them, never re-sorted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelinePoint {
    pub date: String,
    #[serde(default)]
    pub messages: u32,
}

/// A topic and how many messages mentioned it. Input order is display order
/// (descending by convention upstream, not enforced here).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TopicCount {
    pub name: String,
    #[serde(default)]
    pub value: u32,
}

/// Per-contributor summary. `name` is the stable identity key.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Contributor {
    pub name: String,
    #[serde(default)]
    pub messages: u32,
    #[serde(default)]
    pub engagement: u32,
}

/// A reaction category and its count. Colors are a presentation concern and
/// live in [`crate::theme`], not on the record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reaction {
    pub name: String,
    #[serde(default)]
    pub value: u32,
}

/// Everything the dashboard renders, bundled so it can be passed into the
/// render entry point as a single value. Empty collections are valid and
/// render as empty charts with zero totals.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashboardData {
    pub timeline: Vec<TimelinePoint>,
    pub topics: Vec<TopicCount>,
    pub contributors: Vec<Contributor>,
    pub reactions: Vec<Reaction>,
}

impl DashboardData {
    /// The corrected October 2025 Beta Teams dataset (42 records). This is
    /// the process-wide default; swap in live data by passing a different
    /// `DashboardData` to `App`.
    pub fn sample() -> Self {
        Self {
            timeline: [
                ("Jul 22", 3),
                ("Jul 24", 2),
                ("Jul 28", 1),
                ("Aug 11", 1),
                ("Aug 13", 2),
                ("Aug 14", 1),
                ("Aug 18", 1),
                ("Aug 19", 2),
                ("Sep 16", 1),
                ("Sep 17", 2),
                ("Sep 18", 1),
                ("Sep 21", 1),
                ("Sep 24", 2),
                ("Sep 30", 1),
                ("Oct 6", 3),
                ("Oct 20", 1),
            ]
            .into_iter()
            .map(|(date, messages)| TimelinePoint {
                date: date.to_string(),
                messages,
            })
            .collect(),
            topics: [
                ("News", 7),
                ("Outlook", 5),
                ("Password", 4),
                ("Feedback Assistant", 2),
                ("Speed", 2),
                ("Performance", 2),
                ("Connectivity", 1),
                ("Display", 1),
            ]
            .into_iter()
            .map(|(name, value)| TopicCount {
                name: name.to_string(),
                value,
            })
            .collect(),
            contributors: [
                ("Jesper Johansson", 7, 102),
                ("Carlos Garcia", 8, 47),
                ("Ashish Gupta", 1, 26),
                ("Tushar Kohli", 3, 20),
                ("Vinoth Boobalan", 3, 20),
            ]
            .into_iter()
            .map(|(name, messages, engagement)| Contributor {
                name: name.to_string(),
                messages,
                engagement,
            })
            .collect(),
            reactions: [
                ("Like", 38),
                ("Love", 24),
                ("Insightful", 12),
                ("Confused", 8),
            ]
            .into_iter()
            .map(|(name, value)| Reaction {
                name: name.to_string(),
                value,
            })
            .collect(),
        }
    }
}

/// Provide the dashboard dataset to the component tree.
pub fn provide_dashboard_data(data: DashboardData) {
    provide_context(data);
}

/// Fetch the dataset from context. Panics if no `App` provided it, matching
/// how every component expects its providers to be mounted above it.
pub fn use_dashboard_data() -> DashboardData {
    use_context::<DashboardData>().expect("DashboardData not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_collection_sizes() {
        let data = DashboardData::sample();
        assert_eq!(data.timeline.len(), 16);
        assert_eq!(data.topics.len(), 8);
        assert_eq!(data.contributors.len(), 5);
        assert_eq!(data.reactions.len(), 4);
    }

    #[test]
    fn test_sample_topic_names_unique() {
        let data = DashboardData::sample();
        let mut names: Vec<_> = data.topics.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), data.topics.len());
    }

    #[test]
    fn test_sample_contributor_names_unique() {
        let data = DashboardData::sample();
        let mut names: Vec<_> = data.contributors.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), data.contributors.len());
    }

    #[test]
    fn test_missing_count_reads_as_zero() {
        // A record exported without a count must coerce to zero, not fail.
        let reaction: Reaction = serde_json::from_str(r#"{"name": "Like"}"#).unwrap();
        assert_eq!(reaction.value, 0);

        let contributor: Contributor =
            serde_json::from_str(r#"{"name": "Carlos Garcia"}"#).unwrap();
        assert_eq!(contributor.messages, 0);
        assert_eq!(contributor.engagement, 0);
    }

    #[test]
    fn test_empty_default() {
        let data = DashboardData::default();
        assert!(data.timeline.is_empty());
        assert!(data.reactions.is_empty());
    }
}
