//! Port doubles shared by the handler tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::assessment::{
    DomainAssessment, DomainSummary, MatrixRow, OverrideRecord, OverrideStore, Overview,
};
use crate::domain::foundation::Score;
use crate::ports::{AssessmentReader, OverrideRepository, SourceError};

/// "sales" as served by the API: Q1/Q2 scored in Data as a Product, Q3 unscored.
pub(crate) fn sales_detail() -> DomainAssessment {
    serde_json::from_value(serde_json::json!({
        "domain": "sales",
        "questions": [
            {"id": "Q1", "pillar": "Data as a Product", "text": "Products published?", "score": 3},
            {"id": "Q2", "pillar": "Data as a Product", "text": "Contracts defined?", "score": 5},
            {"id": "Q3", "pillar": "Domain Ownership", "text": "Owner named?", "score": null}
        ],
        "overall_score": 4.0,
        "overall_band": "Managed"
    }))
    .unwrap()
}

pub(crate) fn finance_detail() -> DomainAssessment {
    serde_json::from_value(serde_json::json!({
        "domain": "finance",
        "questions": [
            {"id": "F1", "pillar": "Federated Governance", "text": "Policies automated?", "score": 2},
            {"id": "F2", "pillar": "Federated Governance", "text": "Standards shared?", "score": 3}
        ]
    }))
    .unwrap()
}

pub(crate) struct MockReader {
    summaries: Vec<DomainSummary>,
    overview: Overview,
    details: BTreeMap<String, DomainAssessment>,
}

#[async_trait]
impl AssessmentReader for MockReader {
    async fn list_domains(&self) -> Result<Vec<DomainSummary>, SourceError> {
        Ok(self.summaries.clone())
    }

    async fn get_overview(&self) -> Result<Overview, SourceError> {
        Ok(self.overview.clone())
    }

    async fn get_domain_detail(&self, domain: &str) -> Result<DomainAssessment, SourceError> {
        self.details
            .get(domain)
            .cloned()
            .ok_or_else(|| SourceError::DomainNotFound(domain.to_string()))
    }
}

/// Reader over "sales" and "finance"; the matrix arrives unsorted.
pub(crate) fn sales_reader() -> MockReader {
    let sales = DomainAssessment::new("sales", sales_detail().questions);
    let finance = DomainAssessment::new("finance", finance_detail().questions);

    let overview = Overview {
        matrix: vec![
            MatrixRow::from_assessment(&finance),
            MatrixRow::from_assessment(&sales),
        ],
        ..Overview::default()
    };
    let summaries = vec![
        DomainSummary::from_assessment(&sales),
        DomainSummary::from_assessment(&finance),
    ];

    let mut details = BTreeMap::new();
    details.insert("sales".to_string(), sales_detail());
    details.insert("finance".to_string(), finance_detail());

    MockReader {
        summaries,
        overview,
        details,
    }
}

pub(crate) struct FailingReader;

#[async_trait]
impl AssessmentReader for FailingReader {
    async fn list_domains(&self) -> Result<Vec<DomainSummary>, SourceError> {
        Err(SourceError::Transport("connection refused".to_string()))
    }

    async fn get_overview(&self) -> Result<Overview, SourceError> {
        Err(SourceError::Transport("connection refused".to_string()))
    }

    async fn get_domain_detail(&self, _domain: &str) -> Result<DomainAssessment, SourceError> {
        Err(SourceError::Transport("connection refused".to_string()))
    }
}

pub(crate) struct MockOverrides {
    store: Mutex<OverrideStore>,
    saved: Mutex<Vec<OverrideRecord>>,
    fail: bool,
}

impl MockOverrides {
    pub(crate) fn new() -> Self {
        Self {
            store: Mutex::new(OverrideStore::new()),
            saved: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub(crate) fn seed(&self, domain: &str, question_id: &str, score: Score) {
        self.store.lock().unwrap().set(domain, question_id, Some(score));
    }

    pub(crate) fn saved(&self) -> Vec<OverrideRecord> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl OverrideRepository for MockOverrides {
    async fn load_all(&self) -> Result<OverrideStore, SourceError> {
        if self.fail {
            return Err(SourceError::Transport("connection refused".to_string()));
        }
        Ok(self.store.lock().unwrap().clone())
    }

    async fn save(&self, record: &OverrideRecord) -> Result<(), SourceError> {
        self.saved.lock().unwrap().push(record.clone());
        if self.fail {
            return Err(SourceError::Rejected("500 Internal Server Error".to_string()));
        }
        self.store
            .lock()
            .unwrap()
            .set(&record.domain, &record.question_id, record.score);
        Ok(())
    }
}
