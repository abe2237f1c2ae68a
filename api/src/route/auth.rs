use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::auth::{get_current_user, login, register, verify_token};

pub fn build_auth_routers() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/verify-token", post(verify_token))
        .route("/me", get(get_current_user));

    Router::new().nest("/auth", auth_routers)
}
