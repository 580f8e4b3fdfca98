mod common;

use common::{harness, ScriptedTransport};
use megaverse::{ApiError, Color, Direction, GoalCell, HttpResponse, MegaverseApi, StatusKind, TransportError};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_rate_limited_post_backs_off_then_succeeds() {
    let mut script: Vec<_> = [429, 429, 429].iter().map(|c| Ok(HttpResponse::new(*c, ""))).collect();
    script.push(Ok(HttpResponse::new(200, r#"{"created": true}"#)));
    let h = harness(ScriptedTransport::new(script));

    let body = h.client.post("/polyanets", &json!({"row": 1})).await.unwrap();

    assert_eq!(body, json!({"created": true}));
    assert_eq!(h.transport.sent().len(), 4);
    assert_eq!(
        h.sleeper.waits(),
        vec![Duration::from_secs(1), Duration::from_secs(2), Duration::from_secs(4)]
    );
    let msgs = h.log.messages();
    assert_eq!(msgs.iter().filter(|m| m.starts_with("WARN:Too Many Requests")).count(), 3);
    assert!(msgs.iter().any(|m| m.contains("Waiting 4 seconds")));
    assert!(!msgs.iter().any(|m| m.starts_with("ERR:")));
}

#[tokio::test]
async fn test_retry_exhaustion_stops_after_five_attempts() {
    let h = harness(ScriptedTransport::statuses(&[429, 429, 429, 429, 429, 200]));

    let err = h.client.create_polyanet(3, 4).await.unwrap_err();

    assert_eq!(err, ApiError::MaxRetriesExceeded { attempts: 5 });
    assert_eq!(h.transport.sent().len(), 5);
    assert_eq!(
        h.sleeper.waits(),
        vec![
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_secs(4),
            Duration::from_secs(8),
        ]
    );
    assert!(h.log.messages().iter().any(|m| m.contains("Maximum retry attempts reached")));
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let h = harness(ScriptedTransport::statuses(&[404, 200]));

    let err = h.client.create_soloon(0, 0, Color::Red).await.unwrap_err();

    assert_eq!(err, ApiError::HttpStatus { code: 404, kind: StatusKind::NotFound });
    assert_eq!(h.transport.sent().len(), 1);
    assert!(h.sleeper.waits().is_empty());
    let msgs = h.log.messages();
    assert_eq!(msgs.len(), 1);
    assert!(msgs[0].starts_with("ERR:API request failed: 404 Not found"));
}

#[tokio::test]
async fn test_server_error_after_rate_limit_stops_retrying() {
    let h = harness(ScriptedTransport::statuses(&[429, 500, 200]));

    let err = h.client.create_polyanet(0, 0).await.unwrap_err();

    assert_eq!(err, ApiError::from_status(500));
    assert_eq!(h.transport.sent().len(), 2);
    assert_eq!(h.sleeper.waits(), vec![Duration::from_secs(1)]);
    assert!(h.log.messages().iter().any(|m| m.contains("CANDIDATE_ID")));
}

#[tokio::test]
async fn test_transport_failures_abort_immediately() {
    let cases = vec![
        (TransportError::Timeout, ApiError::Timeout),
        (TransportError::NoResponse, ApiError::NoResponse),
        (TransportError::Connect("refused".into()), ApiError::Connection("refused".into())),
        (TransportError::InvalidUrl("bad".into()), ApiError::InvalidUrl("bad".into())),
        (TransportError::Other("weird".into()), ApiError::Unexpected("weird".into())),
    ];

    for (failure, expected) in cases {
        let h = harness(ScriptedTransport::new(vec![Err(failure)]));
        let err = h.client.create_cometh(0, 0, Direction::Up).await.unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(h.transport.sent().len(), 1);
        assert!(h.sleeper.waits().is_empty());
        assert!(h.log.messages()[0].starts_with("ERR:API request failed"));
    }
}

#[tokio::test]
async fn test_creation_bodies_and_endpoints() {
    let h = harness(ScriptedTransport::statuses(&[200, 200, 200]));

    h.client.create_polyanet(1, 2).await.unwrap();
    h.client.create_soloon(3, 4, Color::Purple).await.unwrap();
    h.client.create_cometh(5, 6, Direction::Left).await.unwrap();

    let sent = h.transport.sent();
    assert_eq!(sent[0].url, "https://api.test/api/polyanets");
    assert_eq!(sent[0].body, Some(json!({"candidateId": "cand-42", "row": 1, "column": 2})));
    assert_eq!(sent[1].url, "https://api.test/api/soloons");
    assert_eq!(
        sent[1].body,
        Some(json!({"candidateId": "cand-42", "row": 3, "column": 4, "color": "purple"}))
    );
    assert_eq!(sent[2].url, "https://api.test/api/comeths");
    assert_eq!(
        sent[2].body,
        Some(json!({"candidateId": "cand-42", "row": 5, "column": 6, "direction": "left"}))
    );
    assert!(sent.iter().all(|s| s.method == "POST"));
    assert!(h.log.messages().is_empty());
}

#[tokio::test]
async fn test_goal_map_is_fetched_once() {
    let body = r#"{"goal": [["POLYANET", "SPACE"], ["BLUE_SOLOON", "RIGHT_COMETH"]]}"#;
    let h = harness(ScriptedTransport::new(vec![Ok(HttpResponse::new(200, body))]));

    let grid = h.client.get_goal_map().await.unwrap();

    let sent = h.transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, "GET");
    assert_eq!(sent[0].url, "https://api.test/api/map/cand-42/goal");
    assert_eq!(grid.get(0, 0), Some(GoalCell::Polyanet));
    assert_eq!(grid.get(1, 1), Some(GoalCell::Cometh { direction: Direction::Right }));
}

#[tokio::test]
async fn test_goal_map_failures_are_classified_without_retry() {
    let h = harness(ScriptedTransport::statuses(&[429, 200]));
    let err = h.client.get_goal_map().await.unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(h.transport.sent().len(), 1);

    let h = harness(ScriptedTransport::new(vec![Ok(HttpResponse::new(200, r#"{"nope": 1}"#))]));
    let err = h.client.get_goal_map().await.unwrap_err();
    assert!(matches!(err, ApiError::Unexpected(_)));
    assert!(h.log.messages()[0].contains("malformed goal map"));
}
