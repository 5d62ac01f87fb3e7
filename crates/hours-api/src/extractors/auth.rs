//! Authentication extractors
//!
//! Verifies the bearer token issued by the identity provider and resolves
//! the request-scoped actor from the caller's profile.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use hours_core::Actor;
use hours_service::UserService;
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated account extracted from the JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Account ID from the token subject
    pub user_id: Uuid,
    /// Email asserted by the identity provider, if any
    pub email: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidToken
            })?;

        // Extract user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidToken
        })?;

        Ok(Self {
            user_id,
            email: claims.email,
        })
    }
}

/// Authenticated account with a provisioned profile
///
/// Rejects callers whose account has no profile yet.
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);

        let actor = UserService::new(app_state.service_context())
            .current_actor(auth.user_id)
            .await?;

        Ok(Self(actor))
    }
}
