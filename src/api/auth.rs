use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use maud::Markup;
use serde::Deserialize;

use crate::domain::{Actor, DomainError};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::{clear_session_cookie, create_jwt, session_cookie, verify_password};
use crate::views;

pub const INVALID_CREDENTIALS: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

pub async fn login_form(actor: Actor) -> Markup {
    views::auth::login_page(&actor, "", None)
}

pub async fn login(
    State(state): State<AppState>,
    actor: Actor,
    Form(payload): Form<LoginForm>,
) -> Result<Response, DomainError> {
    tracing::info!("Login attempt for user: {}", payload.username);

    let user = state.user_repo.find_by_username(&payload.username).await?;

    let user = match user {
        Some(u) if verify_password(&payload.password, &u.password_hash).unwrap_or(false) => u,
        Some(_) => {
            tracing::warn!("Password verification failed for user: {}", payload.username);
            return Ok(
                views::auth::login_page(&actor, &payload.username, Some(INVALID_CREDENTIALS))
                    .into_response(),
            );
        }
        None => {
            tracing::warn!("User not found: {}", payload.username);
            return Ok(
                views::auth::login_page(&actor, &payload.username, Some(INVALID_CREDENTIALS))
                    .into_response(),
            );
        }
    };

    let token = create_jwt(state.session_keys(), &user.username, &user.role)
        .map_err(DomainError::Internal)?;
    tracing::info!("User {} logged in", user.username);

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, "/".to_owned()),
            (header::SET_COOKIE, session_cookie(state.session_keys(), &token)),
        ],
    )
        .into_response())
}

pub async fn logout(actor: Actor) -> Response {
    if let Some(username) = actor.username() {
        tracing::info!("User {} logged out", username);
    }

    (
        StatusCode::FOUND,
        [
            (header::LOCATION, "/".to_owned()),
            (header::SET_COOKIE, clear_session_cookie()),
        ],
    )
        .into_response()
}
