//! End-to-end lifecycle flows against the scripted HTTP double

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use lifecycle_harness_client::{ApiCreationRequest, PublisherClient, StoreClient};
use lifecycle_harness_core::{ApiIdentity, HarnessConfig, LifecycleError, LifecycleState};
use lifecycle_harness_sequencer::LifecycleSequencer;
use lifecycle_harness_testing::{bodies, MockHttpClient};
use std::sync::Arc;

fn harness() -> (Arc<MockHttpClient>, LifecycleSequencer) {
    lifecycle_harness_testing::init_test_tracing();
    let mock = Arc::new(MockHttpClient::new());
    let sequencer = LifecycleSequencer::new(
        PublisherClient::new(mock.clone()),
        StoreClient::new(mock.clone()),
        HarnessConfig::default(),
    );
    (mock, sequencer)
}

fn weather_api() -> ApiCreationRequest {
    ApiCreationRequest::new(
        "WeatherAPI",
        "/weather",
        "1.0.0",
        "bob",
        "http://backend:8080/weather",
    )
}

#[tokio::test]
async fn test_create_and_publish_happy_path() {
    let (mock, sequencer) = harness();
    mock.enqueue_response(200, bodies::error_body(false));
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Created, LifecycleState::Published, 100)]),
    );

    let result = sequencer.create_and_publish(&weather_api(), false).await;

    assert!(result.is_ok());
    let requests = mock.recorded_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].param("action"), Some("addAPI"));
    assert_eq!(requests[1].param("action"), Some("updateStatus"));
    assert_eq!(requests[1].param("status"), Some("PUBLISHED"));
    assert_eq!(requests[1].param("requireResubscription"), Some("false"));
}

#[tokio::test]
async fn test_create_failure_aborts_before_publish() {
    let (mock, sequencer) = harness();
    mock.enqueue_response(200, bodies::error_body(true));
    // No publish response enqueued; fail-fast must never reach it

    let result = sequencer.create_and_publish(&weather_api(), false).await;

    match result {
        Err(LifecycleError::Operation { step, status, .. }) => {
            assert_eq!(step, "API Creation");
            assert_eq!(status, 200);
        }
        other => panic!("expected Operation error, got {other:?}"),
    }
    assert_eq!(mock.recorded_requests().len(), 1);
}

#[tokio::test]
async fn test_non_ok_publish_reports_publishing_step() {
    let (mock, sequencer) = harness();
    mock.enqueue_response(200, bodies::error_body(false));
    // Failed lifecycle calls carry a fault body without any history
    mock.enqueue_response(500, bodies::error_body(true));

    let result = sequencer.create_and_publish(&weather_api(), false).await;

    match result {
        Err(LifecycleError::Operation { step, status, identity, .. }) => {
            assert_eq!(step, "API Publishing");
            assert_eq!(status, 500);
            assert_eq!(identity, weather_api().identity());
        }
        other => panic!("expected Operation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_ok_deprecate_reports_deprecation_step() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(503, "<am:fault>service unavailable</am:fault>".to_string());

    let result = sequencer.deprecate(&identity).await;

    match result {
        Err(LifecycleError::Operation { step, status, .. }) => {
            assert_eq!(step, "API Deprecation");
            assert_eq!(status, 503);
        }
        other => panic!("expected Operation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_publish_without_verified_transition_fails() {
    let (mock, sequencer) = harness();
    mock.enqueue_response(200, bodies::error_body(false));
    mock.enqueue_response(200, bodies::empty_lcs_body());

    let result = sequencer.create_and_publish(&weather_api(), false).await;

    match result {
        Err(LifecycleError::Operation { step, .. }) => assert_eq!(step, "API Publishing"),
        other => panic!("expected Operation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_publish_string_encoded_error_flag_accepted_on_create() {
    let (mock, sequencer) = harness();
    mock.enqueue_response(200, bodies::error_body_string_encoded(false));
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Created, LifecycleState::Published, 100)]),
    );

    let result = sequencer.create_and_publish(&weather_api(), false).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_malformed_create_response_is_malformed_error() {
    let (mock, sequencer) = harness();
    mock.enqueue_response(200, "<am:fault>gateway said no</am:fault>".to_string());

    let result = sequencer.create_and_publish(&weather_api(), false).await;

    assert!(matches!(
        result,
        Err(LifecycleError::MalformedResponse { .. })
    ));
}

#[tokio::test]
async fn test_copy_yields_distinct_independent_identity() {
    let (mock, sequencer) = harness();
    let source = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(200, bodies::error_body(false));

    let copied = sequencer.copy(&source, "2.0.0").await.unwrap();

    assert_eq!(copied, ApiIdentity::new("bob", "Foo", "2.0.0"));
    assert_ne!(copied, source);

    // Publishing the copy verifies against the copy's own history,
    // independent of anything the source ever did
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Created, LifecycleState::Published, 500)]),
    );
    let publish_response = sequencer.publish(&copied, false).await.unwrap();
    let history = lifecycle_harness_core::parser::parse_history(&publish_response.body).unwrap();
    assert!(lifecycle_harness_core::verifier::verify_transition(
        &history,
        LifecycleState::Created,
        LifecycleState::Published
    ));

    let requests = mock.recorded_requests();
    assert_eq!(requests[1].param("name"), Some("Foo"));
    assert_eq!(requests[1].param("version"), Some("2.0.0"));
}

#[tokio::test]
async fn test_copy_and_publish_skips_history_verification() {
    let (mock, sequencer) = harness();
    let source = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(200, bodies::error_body(false));
    // Publish response with no usable history: copy_and_publish does not
    // verify it, so this still succeeds
    mock.enqueue_response(200, bodies::error_body(false));

    let copied = sequencer.copy_and_publish(&source, "2.0.0", false).await.unwrap();

    assert_eq!(copied.version, "2.0.0");
    assert_eq!(mock.recorded_requests().len(), 2);
}

#[tokio::test]
async fn test_deprecate_published_api() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[
            (LifecycleState::Created, LifecycleState::Published, 100),
            (LifecycleState::Published, LifecycleState::Deprecated, 200),
        ]),
    );

    let result = sequencer.deprecate(&identity).await;

    assert!(result.is_ok());
    let requests = mock.recorded_requests();
    assert_eq!(requests[0].param("status"), Some("DEPRECATED"));
}

#[tokio::test]
async fn test_deprecate_never_published_api_fails() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    // History of an artifact that was never published
    mock.enqueue_response(200, bodies::empty_lcs_body());

    let result = sequencer.deprecate(&identity).await;

    match result {
        Err(LifecycleError::Operation { step, identity: id, .. }) => {
            assert_eq!(step, "API Deprecation");
            assert_eq!(id, identity);
        }
        other => panic!("expected Operation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_block_and_retire_transitions() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Published, LifecycleState::Blocked, 300)]),
    );
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Deprecated, LifecycleState::Retired, 400)]),
    );

    assert!(sequencer.block(&identity).await.is_ok());
    assert!(sequencer.retire(&identity).await.is_ok());
}

#[tokio::test]
async fn test_subscribe_failure_is_subscription_error() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(200, bodies::error_body(true));

    let result = sequencer.subscribe(&identity, "MyApp").await;

    assert!(matches!(
        result,
        Err(LifecycleError::Subscription { status: 200, .. })
    ));
}

#[tokio::test]
async fn test_create_publish_and_subscribe_flow() {
    let (mock, sequencer) = harness();
    mock.enqueue_response(200, bodies::error_body(false));
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Created, LifecycleState::Published, 100)]),
    );
    mock.enqueue_response(200, bodies::error_body(false));

    let result = sequencer
        .create_publish_and_subscribe(&weather_api(), "MyApp")
        .await;

    assert!(result.is_ok());
    let requests = mock.recorded_requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[2].param("action"), Some("addAPISubscription"));
    assert_eq!(requests[2].param("applicationName"), Some("MyApp"));
}

#[tokio::test]
async fn test_delete_failure_is_deletion_error() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(404, bodies::error_body(true));

    let result = sequencer.delete(&identity).await;

    assert!(matches!(
        result,
        Err(LifecycleError::Deletion { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_delete_best_effort_swallows_failure() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(500, bodies::error_body(true));

    // Must not propagate; teardown failures only get logged
    sequencer.delete_best_effort(&identity).await;

    assert_eq!(mock.recorded_requests().len(), 1);
}

#[tokio::test]
async fn test_subscribe_uses_configured_default_tier() {
    let (mock, sequencer) = harness();
    let identity = ApiIdentity::new("bob", "Foo", "1.0.0");
    mock.enqueue_response(200, bodies::error_body(false));

    sequencer.subscribe(&identity, "MyApp").await.unwrap();

    let requests = mock.recorded_requests();
    assert_eq!(requests[0].param("tier"), Some("Unlimited"));
}

#[tokio::test]
async fn test_application_setup_and_teardown_around_subscription() {
    // Scenario layout of the original test cases: register the application,
    // create-publish-subscribe, then remove the application in cleanup
    lifecycle_harness_testing::init_test_tracing();
    let mock = Arc::new(MockHttpClient::new());
    let store = StoreClient::new(mock.clone());
    let config = HarnessConfig::default();
    let sequencer = LifecycleSequencer::new(
        PublisherClient::new(mock.clone()),
        StoreClient::new(mock.clone()),
        config.clone(),
    );

    mock.enqueue_response(200, bodies::error_body(false));
    let add_response = store
        .add_application("LifecycleScenarioApp", &config.tier_unlimited)
        .await
        .unwrap();
    assert_eq!(add_response.status, 200);

    mock.enqueue_response(200, bodies::error_body(false));
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Created, LifecycleState::Published, 100)]),
    );
    mock.enqueue_response(200, bodies::error_body(false));
    sequencer
        .create_publish_and_subscribe(&weather_api(), "LifecycleScenarioApp")
        .await
        .unwrap();

    mock.enqueue_response(200, bodies::error_body(false));
    let remove_response = store.remove_application("LifecycleScenarioApp").await.unwrap();
    assert_eq!(remove_response.status, 200);

    let requests = mock.recorded_requests();
    assert_eq!(requests.len(), 5);
    assert_eq!(requests[0].param("action"), Some("addApplication"));
    assert_eq!(requests[0].param("application"), Some("LifecycleScenarioApp"));
    assert_eq!(requests[0].param("tier"), Some("Unlimited"));
    assert_eq!(requests[4].param("action"), Some("removeApplication"));
    assert_eq!(requests[4].param("application"), Some("LifecycleScenarioApp"));
}

#[tokio::test]
async fn test_creation_request_offers_configured_tiers() {
    let (mock, sequencer) = harness();
    let config = sequencer.config().clone();
    let request = weather_api()
        .with_tiers(vec![config.tier_gold.clone(), config.tier_silver.clone()]);
    mock.enqueue_response(200, bodies::error_body(false));
    mock.enqueue_response(
        200,
        bodies::lcs_body(&[(LifecycleState::Created, LifecycleState::Published, 100)]),
    );

    sequencer.create_and_publish(&request, false).await.unwrap();

    let requests = mock.recorded_requests();
    assert_eq!(requests[0].param("tiersCollection"), Some("Gold,Silver"));
}

#[tokio::test]
async fn test_transport_failure_aborts_composite() {
    let (mock, sequencer) = harness();
    mock.enqueue_transport_failure("connection reset by peer");

    let result = sequencer.create_and_publish(&weather_api(), false).await;

    assert!(matches!(result, Err(LifecycleError::Transport { .. })));
    assert_eq!(mock.recorded_requests().len(), 1);
}
