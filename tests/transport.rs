//! Transport behaviour against a local mock server.

use std::collections::HashMap;

use hfhub_client::{ConfigOption, HubApiError, HubClient, Transport};
use httpmock::prelude::*;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Point {
    x: i64,
}

fn client_for(server: &MockServer) -> HubClient {
    HubClient::new("test-token", [ConfigOption::base_url(server.base_url())]).unwrap()
}

fn transport(client: &HubClient) -> &Transport {
    client.transport()
}

#[test]
fn test_get_decodes_ok_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/point")
            .header("Authorization", "Bearer test-token")
            .header("Content-Type", "application/json");
        then.status(200).json_body(json!({"x": 1}));
    });

    let client = client_for(&server);
    let point: Point = transport(&client).get("/point").unwrap();

    assert_eq!(point, Point { x: 1 });
    mock.assert();
}

#[test]
fn test_non_ok_status_carries_status_and_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/point");
        then.status(404).body("Repository not found");
    });

    let client = client_for(&server);
    let err = transport(&client).get::<Point>("/point").unwrap_err();

    match &err {
        HubApiError::Status { status, body } => {
            assert_eq!(*status, StatusCode::NOT_FOUND);
            assert_eq!(body, b"Repository not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("Repository not found"), "{message}");
    mock.assert();
}

#[test]
fn test_status_body_keeps_raw_bytes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/binary");
        then.status(500).body(vec![0xff, b'o', b'k', 0xfe]);
    });

    let client = client_for(&server);
    let err = transport(&client).get_discard("/binary").unwrap_err();

    match &err {
        HubApiError::Status { status, body } => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, &[0xff, b'o', b'k', 0xfe]);
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.body_text().as_deref(), Some("\u{fffd}ok\u{fffd}"));
    assert!(err.to_string().contains("\u{fffd}ok\u{fffd}"), "{err}");
}

#[test]
fn test_other_success_codes_are_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/created");
        then.status(201).json_body(json!({"x": 1}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/gone");
        then.status(204);
    });

    let client = client_for(&server);
    let t = transport(&client);

    let err = t.post::<_, Point>("/created", &json!({})).unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::CREATED));

    let err = t.delete_discard("/gone", &json!({})).unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NO_CONTENT));
}

#[test]
fn test_mismatched_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/point");
        then.status(200).json_body(json!({"x": "one"}));
    });

    let client = client_for(&server);
    let err = transport(&client).get::<Point>("/point").unwrap_err();
    assert!(matches!(err, HubApiError::Decode(_)), "{err:?}");
}

#[test]
fn test_discard_skips_decoding() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/create")
            .json_body(json!({"name": "demo"}));
        then.status(200).body("definitely not json");
    });

    let client = client_for(&server);
    transport(&client)
        .post_discard("/repos/create", &json!({"name": "demo"}))
        .unwrap();
    mock.assert();
}

#[test]
fn test_get_discard_skips_decoding() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ping")
            .header("Authorization", "Bearer test-token");
        then.status(200).body("pong, not json");
    });

    let client = client_for(&server);
    transport(&client).get_discard("/ping").unwrap();
    mock.assert();

    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404);
    });
    let err = transport(&client).get_discard("/missing").unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[test]
fn test_put_and_delete_send_json_bodies() {
    let server = MockServer::start();
    let put = server.mock(|when, then| {
        when.method(PUT)
            .path("/settings")
            .header("Authorization", "Bearer test-token")
            .json_body(json!({"private": true}));
        then.status(200).json_body(json!({"x": 7}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/repos/delete")
            .json_body(json!({"type": "model", "name": "demo"}));
        then.status(200).json_body(json!({"x": 0}));
    });

    let client = client_for(&server);
    let t = transport(&client);

    let updated: Point = t.put("/settings", &json!({"private": true})).unwrap();
    assert_eq!(updated.x, 7);

    let mut payload = HashMap::new();
    payload.insert("type", "model");
    payload.insert("name", "demo");
    let deleted: Point = t.delete("/repos/delete", &payload).unwrap();
    assert_eq!(deleted.x, 0);

    put.assert();
    delete.assert();
}

#[test]
fn test_connection_failure_is_request_failed() {
    // Nothing listens on port 1
    let client =
        HubClient::new("test-token", [ConfigOption::base_url("http://127.0.0.1:1/api")]).unwrap();
    let err = transport(&client).get::<Point>("/point").unwrap_err();
    assert!(matches!(err, HubApiError::RequestFailed(_)), "{err:?}");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_concurrent_calls_do_not_mix() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/first")
            .header("Authorization", "Bearer token-a")
            .header("Content-Type", "application/json");
        then.status(200).json_body(json!({"x": 1}));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/second")
            .header("Authorization", "Bearer token-b")
            .header("Content-Type", "application/json");
        then.status(200).json_body(json!({"x": 2}));
    });

    let client_a = HubClient::new("token-a", [ConfigOption::base_url(server.base_url())]).unwrap();
    let client_b = HubClient::new("token-b", [ConfigOption::base_url(server.base_url())]).unwrap();
    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| {
            (0..5)
                .map(|_| client_a.transport().get::<Point>("/first"))
                .collect::<Vec<_>>()
        });
        let b = s.spawn(|| {
            (0..5)
                .map(|_| client_b.transport().get::<Point>("/second"))
                .collect::<Vec<_>>()
        });
        (a.join().unwrap(), b.join().unwrap())
    });

    // A request carrying the other client's token would match no mock and fail.
    for point in a {
        assert_eq!(point.unwrap(), Point { x: 1 });
    }
    for point in b {
        assert_eq!(point.unwrap(), Point { x: 2 });
    }
    first.assert_calls(5);
    second.assert_calls(5);
}
