//! Integration tests for override propagation.
//!
//! These tests drive the public controller API against the in-process
//! adapters, and against the axum service through the reqwest client:
//! 1. A score change reaches the snapshot, summary cache and matrix cache
//! 2. Overrides survive switching domains
//! 3. Subscribers receive `score.changed.v1`
//! 4. Failed persistence never unwinds the local change

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use mesh_maturity::adapters::http::{build_router, AssessmentAppState};
use mesh_maturity::adapters::{
    FileAssessmentCatalog, HttpAssessmentClient, HttpClientConfig, InMemoryEventBus,
    InMemoryOverrideRepository,
};
use mesh_maturity::application::{ChangeScoreError, DataSource, PropagationController};
use mesh_maturity::config::ServerConfig;
use mesh_maturity::domain::assessment::{
    Band, DomainAssessment, DomainSummary, MatrixRow, OverrideRecord, OverrideStore, Overview,
    PillarName, Question, ScoreChangedEvent, SCORE_CHANGED_EVENT,
};
use mesh_maturity::domain::foundation::{DomainError, EventEnvelope, Score};
use mesh_maturity::ports::{EventHandler, EventSubscriber, OverrideRepository, SourceError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn sales() -> DomainAssessment {
    DomainAssessment::new(
        "sales",
        vec![
            Question::new("Q1", "Data as a Product", "Products published?", Some(3.0)),
            Question::new("Q2", "Data as a Product", "Contracts defined?", Some(5.0)),
            Question::new("Q3", "Domain Ownership", "Owner named?", None),
        ],
    )
}

fn finance() -> DomainAssessment {
    DomainAssessment::new(
        "finance",
        vec![
            Question::new("F1", "Federated Governance", "Policies automated?", Some(2.0)),
            Question::new("F2", "Self-Serve Data Platform", "Platform adopted?", Some(4.0)),
        ],
    )
}

fn catalog() -> FileAssessmentCatalog {
    let domains = [sales(), finance()];
    let summaries = domains.iter().map(DomainSummary::from_assessment).collect();
    let overview = Overview {
        matrix: domains.iter().map(MatrixRow::from_assessment).collect(),
        ..Overview::default()
    };
    let details: BTreeMap<_, _> = domains
        .into_iter()
        .map(|d| (d.domain.clone(), d))
        .collect();
    FileAssessmentCatalog::new(summaries, overview, details)
}

/// Records the domain of every event it receives.
struct ViewRecorder {
    domains: Mutex<Vec<String>>,
}

#[async_trait]
impl EventHandler for ViewRecorder {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.domains.lock().unwrap().push(event.aggregate_id);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ViewRecorder"
    }
}

/// Override store whose writes always fail.
struct UnreachableOverrides {
    attempts: Mutex<usize>,
}

#[async_trait]
impl OverrideRepository for UnreachableOverrides {
    async fn load_all(&self) -> Result<OverrideStore, SourceError> {
        Err(SourceError::Transport("connection refused".to_string()))
    }

    async fn save(&self, _record: &OverrideRecord) -> Result<(), SourceError> {
        *self.attempts.lock().unwrap() += 1;
        Err(SourceError::Transport("connection refused".to_string()))
    }
}

async fn start() -> (PropagationController, Arc<InMemoryOverrideRepository>, Arc<InMemoryEventBus>) {
    let overrides = Arc::new(InMemoryOverrideRepository::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let controller =
        PropagationController::start(Arc::new(catalog()), overrides.clone(), bus.clone()).await;
    (controller, overrides, bus)
}

// =============================================================================
// Propagation
// =============================================================================

#[tokio::test]
async fn sales_scenario_propagates_to_every_cache() {
    let (mut controller, _, _) = start().await;

    let opened = controller.open_domain("sales").await.unwrap();
    assert_eq!(opened.overall_score, Some(4.0));
    assert_eq!(
        opened.pillar(PillarName::DomainOwnership).unwrap().band,
        Band::NotAssessed
    );

    let result = controller.on_score_change("sales", "Q3", Some(2)).await.unwrap();

    assert_eq!(result.snapshot.overall_score, Some(3.33));
    assert_eq!(
        result.snapshot.pillar(PillarName::DomainOwnership).unwrap().avg_score,
        Some(2.0)
    );

    let session = controller.session();
    let summary = session.summary("sales").unwrap();
    assert_eq!(summary.overall_score, result.snapshot.overall_score);
    assert_eq!(summary.overall_band, result.snapshot.overall_band);
    assert_eq!(summary.pillars, result.snapshot.pillars);

    let row = session.overview().row("sales").unwrap();
    assert_eq!(row.overall, Some(3.33));
    for pillar in PillarName::ALL {
        assert_eq!(
            row.value(pillar),
            result.snapshot.pillar(pillar).and_then(|p| p.avg_score)
        );
    }
}

#[tokio::test]
async fn overrides_survive_domain_switches() {
    let (mut controller, _, _) = start().await;

    controller.open_domain("sales").await.unwrap();
    controller.on_score_change("sales", "Q1", Some(5)).await.unwrap();
    controller.open_domain("finance").await.unwrap();
    let reopened = controller.open_domain("sales").await.unwrap();

    assert_eq!(reopened.question("Q1").unwrap().score, Some(5.0));
    assert_eq!(reopened.overall_score, Some(5.0));
}

#[tokio::test]
async fn clearing_override_reverts_to_fetched_value() {
    let (mut controller, overrides, _) = start().await;
    controller.open_domain("sales").await.unwrap();

    controller.on_score_change("sales", "Q2", Some(1)).await.unwrap();
    let result = controller.on_score_change("sales", "Q2", None).await.unwrap();
    result.persistence.await.unwrap();

    assert_eq!(result.snapshot.question("Q2").unwrap().score, Some(5.0));
    assert_eq!(result.snapshot.overall_score, Some(4.0));
    assert!(controller.session().overrides().is_empty());
    assert!(overrides.snapshot().await.is_empty());
}

#[tokio::test]
async fn organization_views_follow_changes() {
    let (mut controller, _, _) = start().await;
    assert_eq!(
        controller.session().organization_summary().average_score,
        Some(3.5)
    );

    controller.open_domain("finance").await.unwrap();
    controller.on_score_change("finance", "F1", Some(5)).await.unwrap();

    let org = controller.session().organization_summary();
    assert_eq!(org.average_score, Some(4.25));
    assert_eq!(org.count_for(Band::Optimized), 1);

    let governance = controller
        .session()
        .pillar_rankings()
        .into_iter()
        .find(|r| r.pillar == PillarName::FederatedGovernance)
        .unwrap();
    assert_eq!(governance.entries.len(), 1);
    assert_eq!(governance.entries[0].score, 5.0);
}

// =============================================================================
// Events
// =============================================================================

#[tokio::test]
async fn subscribers_receive_score_changed() {
    let (mut controller, _, bus) = start().await;
    let view = Arc::new(ViewRecorder {
        domains: Mutex::new(Vec::new()),
    });
    bus.subscribe(SCORE_CHANGED_EVENT, view.clone());

    controller.open_domain("sales").await.unwrap();
    controller.on_score_change("sales", "Q3", Some(4)).await.unwrap();

    assert_eq!(*view.domains.lock().unwrap(), vec!["sales"]);
    let event: ScoreChangedEvent = bus.published_events()[0].payload_as().unwrap();
    assert_eq!(event.question_id, "Q3");
    assert_eq!(event.score, Some(Score::try_new(4).unwrap()));
}

#[tokio::test]
async fn rejected_change_publishes_nothing() {
    let (mut controller, _, bus) = start().await;
    controller.open_domain("sales").await.unwrap();
    let before = controller.session().current().cloned();

    let err = controller
        .on_score_change("sales", "Q1", Some(7))
        .await
        .unwrap_err();

    assert!(matches!(err, ChangeScoreError::InvalidScore(_)));
    assert_eq!(controller.session().current().cloned(), before);
    assert_eq!(bus.event_count(), 0);
}

// =============================================================================
// Failure handling
// =============================================================================

#[tokio::test]
async fn failed_persistence_keeps_local_state() {
    let overrides = Arc::new(UnreachableOverrides {
        attempts: Mutex::new(0),
    });
    let mut controller = PropagationController::start(
        Arc::new(catalog()),
        overrides.clone(),
        Arc::new(InMemoryEventBus::new()),
    )
    .await;
    assert_eq!(controller.degraded_sources(), &[DataSource::Overrides]);

    controller.open_domain("sales").await.unwrap();
    let result = controller.on_score_change("sales", "Q3", Some(2)).await.unwrap();
    result.persistence.await.unwrap();

    assert_eq!(*overrides.attempts.lock().unwrap(), 1);
    assert_eq!(controller.session().current().unwrap().overall_score, Some(3.33));
    assert_eq!(
        controller.session().overrides().score_for("sales", "Q3"),
        Some(Score::try_new(2).unwrap())
    );
}

// =============================================================================
// Remote service
// =============================================================================

async fn serve(overrides: Arc<InMemoryOverrideRepository>) -> String {
    let state = AssessmentAppState::new(Arc::new(catalog()), overrides);
    let router = build_router(state, &ServerConfig::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn controller_runs_against_remote_service() {
    let server_overrides = Arc::new(InMemoryOverrideRepository::new());
    let base_url = serve(server_overrides.clone()).await;
    let client = Arc::new(HttpAssessmentClient::new(HttpClientConfig::new(base_url)).unwrap());

    let mut controller =
        PropagationController::start(client.clone(), client.clone(), Arc::new(InMemoryEventBus::new()))
            .await;
    assert!(controller.degraded_sources().is_empty());
    assert_eq!(controller.session().summaries().len(), 2);

    controller.open_domain("sales").await.unwrap();
    let result = controller.on_score_change("sales", "Q3", Some(2)).await.unwrap();
    result.persistence.await.unwrap();

    assert_eq!(
        server_overrides.snapshot().await.score_for("sales", "Q3"),
        Some(Score::try_new(2).unwrap())
    );

    // A new session picks the override up again
    let mut next =
        PropagationController::start(client.clone(), client, Arc::new(InMemoryEventBus::new()))
            .await;
    let reopened = next.open_domain("sales").await.unwrap();
    assert_eq!(reopened.overall_score, Some(3.33));
}

#[tokio::test]
async fn remote_unknown_domain_is_not_found() {
    let base_url = serve(Arc::new(InMemoryOverrideRepository::new())).await;
    let client = Arc::new(HttpAssessmentClient::new(HttpClientConfig::new(base_url)).unwrap());
    let mut controller =
        PropagationController::start(client.clone(), client, Arc::new(InMemoryEventBus::new()))
            .await;

    let err = controller.open_domain("hr").await.unwrap_err();
    assert_eq!(err.to_string(), "Domain not found: hr");
}

#[tokio::test]
async fn remote_service_rejects_out_of_range_override() {
    let base_url = serve(Arc::new(InMemoryOverrideRepository::new())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/override", base_url))
        .json(&json!({"domain": "sales", "questionId": "Q1", "score": 9}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}
