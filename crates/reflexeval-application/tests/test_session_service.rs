use reflexeval_application::SessionService;
use reflexeval_core::config::PlanEntry;
use reflexeval_core::params::ParamsSchema;
use reflexeval_core::session::{FinalReflectionSession, MetadataValue, SessionKind};
use reflexeval_infrastructure::InMemoryPlanProvider;
use std::sync::Arc;

fn demo_service() -> SessionService {
    let schema = ParamsSchema::builtin().expect("builtin schema should parse");
    let entries = vec![
        PlanEntry::new("demo-plan"),
        PlanEntry {
            id: "solo-plan".to_string(),
            sessions_number: Some(1),
        },
    ];
    let provider =
        InMemoryPlanProvider::from_params_schema(&schema, &entries).expect("plans should build");
    SessionService::new(Arc::new(provider))
}

#[tokio::test]
async fn test_demo_plan_walkthrough() {
    let service = demo_service();

    let initial = service.get_session_view("demo-plan", 0).await.unwrap();
    assert_eq!(initial.kind, SessionKind::Initial);
    assert_eq!(initial.plan_id, "demo-plan");
    assert_eq!(initial.index, 0);
    assert!(initial.prompt.starts_with("Esta é a primeira sessão de reflexão."));
    assert_eq!(initial.title, "Reflexão inicial");
    assert_eq!(initial.questions.len(), 3);
    assert_eq!(initial.criteria_weights.len(), 3);

    let middle = service.get_session_view("demo-plan", 1).await.unwrap();
    assert_eq!(middle.kind, SessionKind::Intermediate);
    assert_eq!(middle.title, "Reflexão intermédia #1");
    assert_eq!(
        middle.metadata.get("opensAfterDays"),
        Some(&MetadataValue::Integer(7))
    );

    let last = service.get_session_view("demo-plan", 2).await.unwrap();
    assert_eq!(last.kind, SessionKind::Final);
    assert_eq!(
        last.metadata.get("summaryRequired"),
        Some(&MetadataValue::Bool(true))
    );
    assert_eq!(last.questions.len(), 5);
    assert_eq!(
        last.questions.last().map(String::as_str),
        Some(FinalReflectionSession::CLOSING_QUESTIONS[1])
    );
}

#[tokio::test]
async fn test_single_stage_plan_is_initial() {
    let view = demo_service().get_session_view("solo-plan", 0).await.unwrap();
    assert_eq!(view.kind, SessionKind::Initial);
    assert!(!view.metadata.contains_key("summaryRequired"));
}

#[tokio::test]
async fn test_errors_reach_the_caller() {
    let service = demo_service();

    let unknown = service.get_session_view("no-such-plan", 0).await.unwrap_err();
    assert!(unknown.is_unknown_plan());

    let too_far = service.get_session_view("demo-plan", 3).await.unwrap_err();
    assert!(too_far.is_index_out_of_range());

    let negative = service.get_session_view("demo-plan", -1).await.unwrap_err();
    assert!(negative.is_index_out_of_range());
}

#[tokio::test]
async fn test_view_model_json_shape() {
    let view = demo_service().get_session_view("demo-plan", 0).await.unwrap();
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(value["kind"], "Initial");
    assert_eq!(value["planId"], "demo-plan");
    assert_eq!(value["index"], 0);
    assert_eq!(value["metadata"]["stageLabel"], "Sessão 1");
    assert_eq!(value["metadata"]["deadlineUtc"], "2025-12-20T23:59:00Z");
    assert_eq!(value["metadata"]["locale"], "pt-PT");
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let service = demo_service();
    let handles: Vec<_> = (0..3)
        .flat_map(|index| std::iter::repeat_n(index, 4))
        .map(|index| {
            let service = service.clone();
            tokio::spawn(async move { service.get_session_view("demo-plan", index).await })
        })
        .collect();

    for handle in handles {
        let view = handle.await.unwrap().unwrap();
        let expected = match view.index {
            0 => SessionKind::Initial,
            1 => SessionKind::Intermediate,
            _ => SessionKind::Final,
        };
        assert_eq!(view.kind, expected);
    }
}
