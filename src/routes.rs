//! API router
//!
//! Route prefix and verb layout mirror the public contract: reads on
//! marketplace resources are open, writes resolve the acting user.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route(
            "/api/auth/profile",
            get(handlers::auth::get_profile).put(handlers::auth::update_profile),
        )
        .route("/api/auth/check", get(handlers::auth::check))
        .route(
            "/api/ideas",
            get(handlers::ideas::list_ideas).post(handlers::ideas::create_idea),
        )
        .route(
            "/api/ideas/{id}",
            get(handlers::ideas::get_idea)
                .put(handlers::ideas::update_idea)
                .delete(handlers::ideas::delete_idea),
        )
        .route(
            "/api/connections",
            get(handlers::connections::list_connections),
        )
        .route(
            "/api/connections/request",
            post(handlers::connections::request_connection),
        )
        .route(
            "/api/connections/accept/{id}",
            post(handlers::connections::accept_connection),
        )
        .route(
            "/api/connections/reject/{id}",
            post(handlers::connections::reject_connection),
        )
        .route(
            "/api/proposals",
            get(handlers::proposals::list_proposals).post(handlers::proposals::create_proposal),
        )
        .route(
            "/api/proposals/{id}",
            get(handlers::proposals::get_proposal)
                .put(handlers::proposals::update_proposal)
                .delete(handlers::proposals::delete_proposal),
        )
        .route(
            "/api/loans",
            get(handlers::loans::list_offers).post(handlers::loans::create_offer),
        )
        .route(
            "/api/loans/{id}",
            get(handlers::loans::get_offer)
                .put(handlers::loans::update_offer)
                .delete(handlers::loans::delete_offer),
        )
        .route(
            "/api/advice",
            get(handlers::advice::list_advice).post(handlers::advice::post_advice),
        )
        .route(
            "/api/advice/{id}",
            get(handlers::advice::get_advice)
                .put(handlers::advice::update_advice)
                .delete(handlers::advice::delete_advice),
        )
        .route(
            "/api/queries",
            get(handlers::queries::list_queries).post(handlers::queries::post_query),
        )
        .route("/api/queries/{id}", get(handlers::queries::get_query))
        .route(
            "/api/queries/{id}/solution",
            post(handlers::queries::post_solution),
        )
        .with_state(state)
}
