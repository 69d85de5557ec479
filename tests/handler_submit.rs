mod common;

use axum_test::TestServer;
use form_to_sheet::prelude::SheetError;
use serde_json::json;

#[tokio::test]
async fn test_submit_creates_sheet_and_appends_row() {
    let (server, sheets, _site) = common::create_test_server();

    let response = server
        .post("/submit-form")
        .json(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "message": "hi"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["updatedRange"], "Responses!A2:E2");

    let rows = sheets.rows(common::SHEET).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], common::header());
    assert_eq!(rows[1][1..], ["Jo", "jo@x.com", "", "hi"]);
    assert!(
        chrono::NaiveDateTime::parse_from_str(&rows[1][0], common::TIMESTAMP_FORMAT).is_ok()
    );
}

#[tokio::test]
async fn test_submit_with_phone() {
    let (server, sheets, _site) = common::create_test_server();

    let response = server
        .post("/submit-form")
        .json(&json!({
            "name": "Jo",
            "email": "jo@x.com",
            "phone": "555-0100",
            "message": "call me"
        }))
        .await;

    response.assert_status_ok();

    let rows = sheets.rows(common::SHEET).await.unwrap();
    assert_eq!(rows[1][3], "555-0100");
}

#[tokio::test]
async fn test_submit_existing_sheet_keeps_rows() {
    let (server, sheets, _site) = common::create_test_server();
    let existing = vec!["1/1/2026, 9:00:00 AM", "Al", "al@x.com", "", "old"]
        .into_iter()
        .map(String::from)
        .collect();
    sheets
        .insert_tab(common::SHEET, vec![common::header(), existing])
        .await;

    let response = server
        .post("/submit-form")
        .json(&json!({ "name": "Jo", "email": "jo@x.com", "message": "hi" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["updatedRange"],
        "Responses!A3:E3"
    );

    let rows = sheets.rows(common::SHEET).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1], "Al");
    assert_eq!(rows[2][1], "Jo");
}

#[tokio::test]
async fn test_submit_same_payload_twice_appends_two_rows() {
    let (server, sheets, _site) = common::create_test_server();
    let payload = json!({ "name": "Jo", "email": "jo@x.com", "message": "hi" });

    server.post("/submit-form").json(&payload).await.assert_status_ok();
    server.post("/submit-form").json(&payload).await.assert_status_ok();

    let rows = sheets.rows(common::SHEET).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1..], rows[2][1..]);
    assert_eq!(sheets.tab_names().await, vec![common::SHEET]);
}

#[tokio::test]
async fn test_submit_empty_name_rejected() {
    let (server, sheets, _site) = common::create_test_server();

    let response = server
        .post("/submit-form")
        .json(&json!({ "name": "", "email": "jo@x.com", "message": "hi" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("name"));
    assert!(sheets.rows(common::SHEET).await.is_none());
}

#[tokio::test]
async fn test_submit_missing_fields_rejected() {
    let (server, sheets, _site) = common::create_test_server();

    for payload in [
        json!({ "email": "jo@x.com", "message": "hi" }),
        json!({ "name": "Jo", "message": "hi" }),
        json!({ "name": "Jo", "email": "jo@x.com" }),
        json!({ "name": "Jo", "email": "jo@x.com", "message": "   " }),
        json!({}),
    ] {
        let response = server.post("/submit-form").json(&payload).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<serde_json::Value>()["success"], false);
    }

    assert!(sheets.rows(common::SHEET).await.is_none());
}

#[tokio::test]
async fn test_submit_lists_all_missing_fields() {
    let (server, _sheets, _site) = common::create_test_server();

    let response = server.post("/submit-form").json(&json!({})).await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["details"]["fields"], json!(["email", "message", "name"]));
}

#[tokio::test]
async fn test_submit_malformed_json_rejected() {
    let (server, sheets, _site) = common::create_test_server();

    let response = server
        .post("/submit-form")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
    assert!(sheets.tab_names().await.is_empty());
}

#[tokio::test]
async fn test_submit_downstream_failure_surfaces_message() {
    let (server, sheets, _site) = common::create_test_server();
    sheets
        .fail_with(SheetError::Transport(
            "error sending request for url (https://sheets.googleapis.com/v4/...)".to_string(),
        ))
        .await;

    let response = server
        .post("/submit-form")
        .json(&json!({ "name": "Jo", "email": "jo@x.com", "message": "hi" }))
        .await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(
        json["error"],
        "error sending request for url (https://sheets.googleapis.com/v4/...)"
    );
}

#[tokio::test]
async fn test_submit_api_error_includes_status_details() {
    let (server, sheets, _site) = common::create_test_server();
    sheets
        .fail_with(SheetError::Api {
            status: 429,
            message: "Quota exceeded for quota metric 'Write requests'".to_string(),
        })
        .await;

    let response = server
        .post("/submit-form")
        .json(&json!({ "name": "Jo", "email": "jo@x.com", "message": "hi" }))
        .await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"],
        "Quota exceeded for quota metric 'Write requests'"
    );
    assert_eq!(json["details"]["status"], 429);
}

#[tokio::test]
async fn test_submit_recovers_after_downstream_failure() {
    let (state, sheets) = common::create_test_state();
    let app = axum::Router::new()
        .route(
            "/submit-form",
            axum::routing::post(form_to_sheet::api::handlers::submit_form_handler),
        )
        .with_state(state);
    let server = TestServer::new(app).unwrap();
    let payload = json!({ "name": "Jo", "email": "jo@x.com", "message": "hi" });

    sheets
        .fail_with(SheetError::Auth("invalid_grant".to_string()))
        .await;
    server
        .post("/submit-form")
        .json(&payload)
        .await
        .assert_status_internal_server_error();

    sheets.clear_failure().await;
    server.post("/submit-form").json(&payload).await.assert_status_ok();

    let rows = sheets.rows(common::SHEET).await.unwrap();
    assert_eq!(rows.len(), 2);
}
