pub mod error;
pub mod routes;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/challenges", post(routes::challenge::create))
        // One segment after /challenges is a user id; two is a challenge id
        // plus an action.
        .route("/challenges/{id}", get(routes::challenge::list_for_user))
        .route(
            "/challenges/{id}/penalties",
            post(routes::challenge::record_penalty).get(routes::challenge::list_penalties),
        )
        .route(
            "/challenges/{id}/confirm-payment",
            post(routes::challenge::confirm_payment),
        )
        .route(
            "/challenges/{id}/witnesses",
            post(routes::challenge::add_witness),
        )
        .route("/profile/{user_id}", get(routes::stats::profile))
        .route("/statistics/{user_id}", get(routes::stats::weekly))
        .route("/charities", get(routes::charity::list))
        .route("/invitations", post(routes::invitation::create))
        .route(
            "/invitations/{user_id}",
            get(routes::invitation::list_for_user),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
