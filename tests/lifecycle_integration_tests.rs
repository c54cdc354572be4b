//! End-to-end coverage of the idea/connection lifecycle through the
//! HTTP surface: status derivation, one-shot transitions, and the
//! guards around them.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{create_idea, idea_status, request_connection, send, signup, test_app};

#[tokio::test]
async fn test_new_idea_starts_pending() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    assert_eq!(idea_status(&app, idea).await, "pending");
}

#[tokio::test]
async fn test_new_request_is_pending_and_flips_idea_to_in_discussion() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor = signup(&app, "Vikram Shah", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (status, body) = request_connection(&app, investor, idea).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["businessIdeaId"], idea);

    assert_eq!(idea_status(&app, idea).await, "in discussion");
}

#[tokio::test]
async fn test_second_request_leaves_idea_in_discussion() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor_a = signup(&app, "Vikram Shah", "investor").await;
    let investor_b = signup(&app, "Meera Iyer", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (status, _) = request_connection(&app, investor_a, idea).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = request_connection(&app, investor_b, idea).await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(idea_status(&app, idea).await, "in discussion");
}

#[tokio::test]
async fn test_duplicate_request_conflicts_and_echoes_existing_status() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor = signup(&app, "Vikram Shah", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (status, _) = request_connection(&app, investor, idea).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request_connection(&app, investor, idea).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["status"], "pending");

    // Exactly one request exists for the pair
    let (_, connections) = send(&app, "GET", "/api/connections", Some(investor), None).await;
    assert_eq!(connections.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_request_against_funded_idea_fails_invalid_state() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor_a = signup(&app, "Vikram Shah", "investor").await;
    let investor_b = signup(&app, "Meera Iyer", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (_, request) = request_connection(&app, investor_a, idea).await;
    let request_id = request["id"].as_i64().unwrap();
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/connections/accept/{}", request_id),
        Some(entrepreneur),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(idea_status(&app, idea).await, "funded");

    let (status, body) = request_connection(&app, investor_b, idea).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "invalid_state");

    // No record was created for the rejected attempt
    let (_, connections) = send(&app, "GET", "/api/connections", Some(investor_b), None).await;
    assert_eq!(connections.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_self_connection_is_forbidden_as_invalid_operation() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (status, body) = request_connection(&app, entrepreneur, idea).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_operation");
    assert_eq!(idea_status(&app, idea).await, "pending");
}

#[tokio::test]
async fn test_request_against_missing_idea_fails_not_found() {
    let app = test_app().await;
    let investor = signup(&app, "Vikram Shah", "investor").await;

    let (status, body) = request_connection(&app, investor, 9999).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_request_without_idea_id_fails_validation() {
    let app = test_app().await;
    let investor = signup(&app, "Vikram Shah", "investor").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/connections/request",
        Some(investor),
        Some(json!({ "message": "no idea id" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");
}

#[tokio::test]
async fn test_accept_sets_request_accepted_and_idea_funded() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor_a = signup(&app, "Vikram Shah", "investor").await;
    let investor_b = signup(&app, "Meera Iyer", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    request_connection(&app, investor_a, idea).await;
    let (_, request_b) = request_connection(&app, investor_b, idea).await;
    let request_b_id = request_b["id"].as_i64().unwrap();

    // Other pending requests do not block the accept
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/connections/accept/{}", request_b_id),
        Some(entrepreneur),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "accepted");
    assert_eq!(idea_status(&app, idea).await, "funded");
}

#[tokio::test]
async fn test_reject_reverts_idea_only_when_no_pending_requests_remain() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor_a = signup(&app, "Vikram Shah", "investor").await;
    let investor_b = signup(&app, "Meera Iyer", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (_, request_a) = request_connection(&app, investor_a, idea).await;
    let (_, request_b) = request_connection(&app, investor_b, idea).await;
    let request_a_id = request_a["id"].as_i64().unwrap();
    let request_b_id = request_b["id"].as_i64().unwrap();

    // One pending request remains, so the idea stays in discussion
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/connections/reject/{}", request_a_id),
        Some(entrepreneur),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "rejected");
    assert_eq!(idea_status(&app, idea).await, "in discussion");

    // Last pending request rejected: idea reverts to pending
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/connections/reject/{}", request_b_id),
        Some(entrepreneur),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(idea_status(&app, idea).await, "pending");
}

#[tokio::test]
async fn test_resolved_request_cannot_transition_again() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor = signup(&app, "Vikram Shah", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (_, request) = request_connection(&app, investor, idea).await;
    let request_id = request["id"].as_i64().unwrap();

    send(
        &app,
        "POST",
        &format!("/api/connections/accept/{}", request_id),
        Some(entrepreneur),
        None,
    )
    .await;

    for action in ["accept", "reject"] {
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/connections/{}/{}", action, request_id),
            Some(entrepreneur),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Connection request already accepted");
    }

    // No state change from the failed retries
    assert_eq!(idea_status(&app, idea).await, "funded");
}

#[tokio::test]
async fn test_only_owning_entrepreneur_may_decide() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let other_entrepreneur = signup(&app, "Rohit Sen", "entrepreneur").await;
    let investor = signup(&app, "Vikram Shah", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;

    let (_, request) = request_connection(&app, investor, idea).await;
    let request_id = request["id"].as_i64().unwrap();

    for actor in [other_entrepreneur, investor] {
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/connections/accept/{}", request_id),
            Some(actor),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "forbidden");
    }

    assert_eq!(idea_status(&app, idea).await, "in discussion");
}

/// Full pipeline: request from A, request from B, reject A (idea stays
/// in discussion because B is pending), accept B (idea funded).
#[tokio::test]
async fn test_two_investor_scenario_end_to_end() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor_a = signup(&app, "Vikram Shah", "investor").await;
    let investor_b = signup(&app, "Meera Iyer", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;
    assert_eq!(idea_status(&app, idea).await, "pending");

    let (_, request_a) = request_connection(&app, investor_a, idea).await;
    assert_eq!(idea_status(&app, idea).await, "in discussion");

    let (_, request_b) = request_connection(&app, investor_b, idea).await;
    assert_eq!(idea_status(&app, idea).await, "in discussion");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/connections/reject/{}", request_a["id"].as_i64().unwrap()),
        Some(entrepreneur),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(idea_status(&app, idea).await, "in discussion");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/connections/accept/{}", request_b["id"].as_i64().unwrap()),
        Some(entrepreneur),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(idea_status(&app, idea).await, "funded");
}

#[tokio::test]
async fn test_connection_listing_is_role_dependent() {
    let app = test_app().await;
    let entrepreneur = signup(&app, "Asha Rao", "entrepreneur").await;
    let investor = signup(&app, "Vikram Shah", "investor").await;
    let idea = create_idea(&app, entrepreneur, "Solar cold storage").await;
    request_connection(&app, investor, idea).await;

    // Investor view embeds the idea and its entrepreneur
    let (status, body) = send(&app, "GET", "/api/connections", Some(investor), None).await;
    assert_eq!(status, StatusCode::OK);
    let entry = &body.as_array().unwrap()[0];
    assert_eq!(entry["businessIdea"]["title"], "Solar cold storage");
    assert_eq!(entry["businessIdea"]["entrepreneur"]["name"], "Asha Rao");
    assert!(entry["investor"].is_null());

    // Entrepreneur view embeds the investor profile
    let (status, body) = send(&app, "GET", "/api/connections", Some(entrepreneur), None).await;
    assert_eq!(status, StatusCode::OK);
    let entry = &body.as_array().unwrap()[0];
    assert_eq!(entry["investor"]["name"], "Vikram Shah");
    assert_eq!(entry["businessIdea"]["id"], idea);

    // Bankers have no connection view at all
    let banker = signup(&app, "Nita Kulkarni", "banker").await;
    let (status, _) = send(&app, "GET", "/api/connections", Some(banker), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
