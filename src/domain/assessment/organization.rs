//! Organization-wide views derived from the summary and matrix caches.

use serde::{Deserialize, Serialize};

use super::{round_aggregate, Band, DomainSummary, MatrixRow, PillarName};

/// Count of domains in one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCount {
    pub band: Band,
    pub count: usize,
}

/// Headline numbers for the whole organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub domain_count: usize,
    /// Mean overall score; an unscored domain counts as 0.
    pub average_score: Option<f64>,
    /// One entry per assessed band, highest first. Unassessed domains are not counted.
    pub band_distribution: Vec<BandCount>,
}

impl OrganizationSummary {
    /// Derives the summary from the `allDomains` cache.
    pub fn from_summaries(summaries: &[DomainSummary]) -> Self {
        let average_score = if summaries.is_empty() {
            None
        } else {
            let total: f64 = summaries.iter().map(|s| s.overall_score.unwrap_or(0.0)).sum();
            Some(round_aggregate(total / summaries.len() as f64))
        };

        let band_distribution = Band::ASSESSED
            .into_iter()
            .map(|band| BandCount {
                band,
                count: summaries.iter().filter(|s| s.overall_band == band).count(),
            })
            .collect();

        Self {
            domain_count: summaries.len(),
            average_score,
            band_distribution,
        }
    }

    /// Number of domains in `band`.
    pub fn count_for(&self, band: Band) -> usize {
        self.band_distribution
            .iter()
            .find(|c| c.band == band)
            .map_or(0, |c| c.count)
    }
}

/// One ranked domain within a pillar ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub domain: String,
    pub score: f64,
}

/// Domains ordered by their score on one pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarRanking {
    pub pillar: PillarName,
    pub entries: Vec<RankingEntry>,
}

impl PillarRanking {
    /// Ranks matrix rows on `pillar`, highest first; rows without a value are left out.
    pub fn for_pillar(pillar: PillarName, matrix: &[MatrixRow]) -> Self {
        let mut scored: Vec<(&str, f64)> = matrix
            .iter()
            .filter_map(|row| row.value(pillar).map(|v| (row.domain.as_str(), v)))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let entries = scored
            .into_iter()
            .enumerate()
            .map(|(i, (domain, score))| RankingEntry {
                rank: i + 1,
                domain: domain.to_string(),
                score,
            })
            .collect();

        Self { pillar, entries }
    }

    /// Ranks every pillar listed in `pillars`.
    pub fn all(pillars: &[PillarName], matrix: &[MatrixRow]) -> Vec<Self> {
        pillars
            .iter()
            .map(|pillar| Self::for_pillar(*pillar, matrix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(domain: &str, score: Option<f64>) -> DomainSummary {
        DomainSummary {
            domain: domain.to_string(),
            overall_score: score,
            overall_band: Band::classify(score),
            pillars: vec![],
        }
    }

    #[test]
    fn average_counts_unscored_domains_as_zero() {
        let summaries = vec![summary("a", Some(4.0)), summary("b", None), summary("c", Some(2.0))];
        let org = OrganizationSummary::from_summaries(&summaries);
        assert_eq!(org.domain_count, 3);
        assert_eq!(org.average_score, Some(2.0));
    }

    #[test]
    fn empty_organization_has_no_average() {
        let org = OrganizationSummary::from_summaries(&[]);
        assert_eq!(org.average_score, None);
        assert!(org.band_distribution.iter().all(|c| c.count == 0));
    }

    #[test]
    fn band_distribution_skips_not_assessed() {
        let summaries = vec![
            summary("a", Some(4.6)),
            summary("b", Some(4.9)),
            summary("c", Some(1.0)),
            summary("d", None),
        ];
        let org = OrganizationSummary::from_summaries(&summaries);

        assert_eq!(org.band_distribution.len(), 5);
        assert_eq!(org.band_distribution[0].band, Band::Optimized);
        assert_eq!(org.count_for(Band::Optimized), 2);
        assert_eq!(org.count_for(Band::Initial), 1);
        assert_eq!(org.count_for(Band::NotAssessed), 0);
    }

    #[test]
    fn pillar_ranking_orders_descending_and_skips_nulls() {
        let mut a = MatrixRow::empty("a");
        a.data_as_a_product = Some(2.5);
        let b = MatrixRow::empty("b");
        let mut c = MatrixRow::empty("c");
        c.data_as_a_product = Some(4.0);

        let ranking = PillarRanking::for_pillar(PillarName::DataAsAProduct, &[a, b, c]);

        let domains: Vec<_> = ranking.entries.iter().map(|e| e.domain.as_str()).collect();
        assert_eq!(domains, vec!["c", "a"]);
        assert_eq!(ranking.entries[0].rank, 1);
        assert_eq!(ranking.entries[1].score, 2.5);
    }

    #[test]
    fn all_rankings_follow_pillar_order() {
        let rankings = PillarRanking::all(&PillarName::ALL, &[]);
        let pillars: Vec<_> = rankings.iter().map(|r| r.pillar).collect();
        assert_eq!(pillars, PillarName::ALL.to_vec());
    }
}
