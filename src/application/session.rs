//! AssessmentSession - state of one dashboard session.
//!
//! Holds the summary cache, the comparison matrix, the override store and
//! the currently open domain. Readers use the public accessors; only the
//! application handlers mutate it.

use crate::domain::assessment::{
    DomainAssessment, DomainSummary, MatrixRow, OrganizationSummary, OverrideStore, Overview,
    PillarRanking,
};

/// Session state shared by every view.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    summaries: Vec<DomainSummary>,
    overview: Overview,
    overrides: OverrideStore,
    current: Option<DomainAssessment>,
}

impl AssessmentSession {
    /// Creates a session with no domain open.
    pub fn new(summaries: Vec<DomainSummary>, overview: Overview, overrides: OverrideStore) -> Self {
        Self {
            summaries,
            overview,
            overrides,
            current: None,
        }
    }

    /// Summary cache (`allDomains`).
    pub fn summaries(&self) -> &[DomainSummary] {
        &self.summaries
    }

    /// Summary cache entry of one domain.
    pub fn summary(&self, domain: &str) -> Option<&DomainSummary> {
        self.summaries.iter().find(|s| s.domain == domain)
    }

    /// Comparison matrix cache with its pillar list.
    pub fn overview(&self) -> &Overview {
        &self.overview
    }

    pub fn matrix(&self) -> &[MatrixRow] {
        &self.overview.matrix
    }

    /// Every override made in this or a previous session.
    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// The open domain, if any.
    pub fn current(&self) -> Option<&DomainAssessment> {
        self.current.as_ref()
    }

    /// Headline numbers derived from the summary cache.
    pub fn organization_summary(&self) -> OrganizationSummary {
        OrganizationSummary::from_summaries(&self.summaries)
    }

    /// Per-pillar rankings derived from the matrix cache.
    pub fn pillar_rankings(&self) -> Vec<PillarRanking> {
        PillarRanking::all(&self.overview.pillars, &self.overview.matrix)
    }

    /// Borrows the open domain and the override store together, so one
    /// change can update both.
    pub(crate) fn current_and_overrides_mut(
        &mut self,
    ) -> (Option<&mut DomainAssessment>, &mut OverrideStore) {
        (self.current.as_mut(), &mut self.overrides)
    }

    /// Makes `domain` the open domain, dropping the previous one.
    pub(crate) fn replace_current(&mut self, domain: DomainAssessment) {
        self.current = Some(domain);
    }

    /// Copies the open domain's aggregates into its summary entry and matrix row.
    ///
    /// A domain missing from either cache is skipped for that cache.
    pub(crate) fn refresh_caches(&mut self) {
        let Some(current) = self.current.as_ref() else {
            return;
        };

        match self.summaries.iter_mut().find(|s| s.domain == current.domain) {
            Some(summary) => summary.refresh_from(current),
            None => tracing::debug!(domain = %current.domain, "No summary entry to refresh"),
        }

        match self.overview.row_mut(&current.domain) {
            Some(row) => row.refresh_from(current),
            None => tracing::debug!(domain = %current.domain, "No matrix row to refresh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{Band, PillarName, Question};

    fn sales() -> DomainAssessment {
        DomainAssessment::new(
            "sales",
            vec![
                Question::new("Q1", "Data as a Product", "", Some(3.0)),
                Question::new("Q2", "Data as a Product", "", Some(5.0)),
            ],
        )
    }

    fn stale_summary(domain: &str) -> DomainSummary {
        DomainSummary {
            domain: domain.to_string(),
            overall_score: Some(1.0),
            overall_band: Band::Initial,
            pillars: vec![],
        }
    }

    #[test]
    fn new_session_has_no_open_domain() {
        let session = AssessmentSession::new(vec![], Overview::default(), OverrideStore::new());
        assert!(session.current().is_none());
        assert!(session.matrix().is_empty());
    }

    #[test]
    fn refresh_caches_copies_open_domain_aggregates() {
        let overview = Overview {
            matrix: vec![MatrixRow::empty("sales"), MatrixRow::empty("finance")],
            ..Overview::default()
        };
        let mut session = AssessmentSession::new(
            vec![stale_summary("sales"), stale_summary("finance")],
            overview,
            OverrideStore::new(),
        );
        session.replace_current(sales());
        session.refresh_caches();

        let summary = session.summary("sales").unwrap();
        assert_eq!(summary.overall_score, Some(4.0));
        assert_eq!(summary.overall_band, Band::Managed);
        assert_eq!(summary.pillars.len(), 4);

        let row = session.overview().row("sales").unwrap();
        assert_eq!(row.overall, Some(4.0));
        assert_eq!(row.value(PillarName::DataAsAProduct), Some(4.0));
        assert_eq!(row.value(PillarName::DomainOwnership), None);

        assert_eq!(session.summary("finance").unwrap().overall_score, Some(1.0));
    }

    #[test]
    fn refresh_caches_tolerates_missing_entries() {
        let mut session = AssessmentSession::default();
        session.replace_current(sales());
        session.refresh_caches();

        assert!(session.summaries().is_empty());
        assert!(session.matrix().is_empty());
    }

    #[test]
    fn derived_views_follow_caches() {
        let mut a = MatrixRow::empty("a");
        a.domain_ownership = Some(2.0);
        let overview = Overview {
            matrix: vec![a],
            ..Overview::default()
        };
        let session = AssessmentSession::new(vec![stale_summary("a")], overview, OverrideStore::new());

        assert_eq!(session.organization_summary().count_for(Band::Initial), 1);

        let rankings = session.pillar_rankings();
        assert_eq!(rankings.len(), 4);
        assert_eq!(rankings[0].entries[0].domain, "a");
        assert!(rankings[1].entries.is_empty());
    }
}
