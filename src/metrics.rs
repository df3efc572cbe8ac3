//! Derived Metrics
//!
//! The summary totals shown in the dashboard's summary cards. Totals are
//! recomputed from the source collections on every render pass; there is no
//! cache to go stale.

use crate::data::DashboardData;

/// Sum a selected count field across a record collection.
///
/// Total over every input: an empty collection sums to 0, and the selector
/// cannot fail (missing fields are already zeroed at the serde boundary).
pub fn sum_by<T, F>(records: &[T], field: F) -> u64
where
    F: Fn(&T) -> u32,
{
    records.iter().map(|r| u64::from(field(r))).sum()
}

/// The two derived figures for the summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DerivedTotals {
    /// Sum of `Reaction.value` across all reaction categories.
    pub total_reactions: u64,
    /// Sum of `Contributor.engagement` across all contributors.
    pub total_responses: u64,
}

impl DerivedTotals {
    pub fn compute(data: &DashboardData) -> Self {
        Self {
            total_reactions: sum_by(&data.reactions, |r| r.value),
            total_responses: sum_by(&data.contributors, |c| c.engagement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Contributor, DashboardData, Reaction};

    fn reactions(values: &[(&str, u32)]) -> Vec<Reaction> {
        values
            .iter()
            .map(|(name, value)| Reaction {
                name: name.to_string(),
                value: *value,
            })
            .collect()
    }

    fn contributors(engagements: &[u32]) -> Vec<Contributor> {
        engagements
            .iter()
            .enumerate()
            .map(|(i, engagement)| Contributor {
                name: format!("user-{i}"),
                messages: 1,
                engagement: *engagement,
            })
            .collect()
    }

    #[test]
    fn test_empty_collections_sum_to_zero() {
        let totals = DerivedTotals::compute(&DashboardData::default());
        assert_eq!(totals.total_reactions, 0);
        assert_eq!(totals.total_responses, 0);
    }

    #[test]
    fn test_total_reactions_scenario() {
        let data = DashboardData {
            reactions: reactions(&[("Like", 38), ("Love", 24), ("Insightful", 12), ("Confused", 8)]),
            ..Default::default()
        };
        assert_eq!(DerivedTotals::compute(&data).total_reactions, 82);
    }

    #[test]
    fn test_total_responses_scenario() {
        let data = DashboardData {
            contributors: contributors(&[102, 47, 26, 20, 20]),
            ..Default::default()
        };
        assert_eq!(DerivedTotals::compute(&data).total_responses, 215);
    }

    #[test]
    fn test_sample_dataset_totals() {
        let totals = DerivedTotals::compute(&DashboardData::sample());
        assert_eq!(totals.total_reactions, 82);
        assert_eq!(totals.total_responses, 215);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let data = DashboardData::sample();
        let first = DerivedTotals::compute(&data);
        let second = DerivedTotals::compute(&data);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sum_by_single_record() {
        let data = reactions(&[("Like", 7)]);
        assert_eq!(sum_by(&data, |r| r.value), 7);
    }
}
