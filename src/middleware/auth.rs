use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::repositories::SessionRepository;
use crate::session::get_session_token;

/// The signed-in side of a request. Handlers that take an `AuthUser` only
/// run for logged-in visitors; everyone else is sent to the sign-in page.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
}

impl AuthUser {
    async fn from_parts(parts: &Parts) -> Result<Option<Self>, AppError> {
        let Some(token) = get_session_token(&CookieJar::from_headers(&parts.headers)) else {
            return Ok(None);
        };

        let sessions = parts
            .extensions
            .get::<SessionRepository>()
            .ok_or_else(|| AppError::Internal("session store not configured".to_string()))?;

        Ok(sessions.find_valid(&token).await?.map(|user| Self {
            id: user.id,
            username: user.username,
        }))
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match AuthUser::from_parts(parts).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(Redirect::to("/auth/login").into_response()),
            Err(e) => Err(e.into_response()),
        }
    }
}

/// Like `AuthUser`, but never rejects a logged-out visitor.
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        AuthUser::from_parts(parts)
            .await
            .map(OptionalAuthUser)
            .map_err(IntoResponse::into_response)
    }
}
