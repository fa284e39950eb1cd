use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;

use crate::error::{AppError, Result};
use crate::middleware::OptionalAuthUser;
use crate::models::Credentials;
use crate::repositories::{SessionRepository, UserRepository};
use crate::session::{create_session_cookie, get_session_token, remove_session_cookie};

#[derive(Clone)]
pub struct AuthState {
    pub user_repo: UserRepository,
    pub session_repo: SessionRepository,
}

// Templates
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
    notice: Option<String>,
}

#[derive(Template)]
#[template(path = "auth/signup.html")]
struct SignupTemplate {
    error: Option<String>,
}

fn render_login(error: Option<&str>, notice: Option<&str>) -> Result<Html<String>> {
    let template = LoginTemplate {
        error: error.map(str::to_string),
        notice: notice.map(str::to_string),
    };
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}

fn render_signup(error: Option<&str>) -> Result<Html<String>> {
    let template = SignupTemplate {
        error: error.map(str::to_string),
    };
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}

// Handlers
pub async fn login_page(OptionalAuthUser(auth_user): OptionalAuthUser) -> Result<Response> {
    if auth_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(render_login(None, None)?.into_response())
}

pub async fn login_submit(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(credentials): Form<Credentials>,
) -> Result<Response> {
    let user = state
        .user_repo
        .verify_password(&credentials.username, &credentials.password)
        .await?;

    match user {
        Some(user) => {
            let token = state.session_repo.create(&user.id).await?;
            tracing::info!(username = %user.username, "User logged in");
            let jar = jar.add(create_session_cookie(&token, state.session_repo.ttl()));
            Ok((jar, Redirect::to("/")).into_response())
        }
        None => {
            tracing::warn!(username = %credentials.username, "Rejected login attempt");
            Ok(render_login(Some("Invalid username or password."), None)?.into_response())
        }
    }
}

pub async fn signup_page(OptionalAuthUser(auth_user): OptionalAuthUser) -> Result<Response> {
    if auth_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(render_signup(None)?.into_response())
}

pub async fn signup_submit(
    State(state): State<AuthState>,
    Form(form): Form<Credentials>,
) -> Result<Response> {
    let username = form.username.trim();

    if username.is_empty() {
        return Ok(render_signup(Some("Username is required"))?.into_response());
    }

    if form.password.is_empty() {
        return Ok(render_signup(Some("Password is required"))?.into_response());
    }

    match state.user_repo.create(username, &form.password).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "User signed up");
            Ok(render_login(None, Some("Signup successful! Please log in."))?.into_response())
        }
        Err(AppError::UsernameTaken) => {
            Ok(render_signup(Some("Username already exists."))?.into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn logout(State(state): State<AuthState>, jar: CookieJar) -> Result<Response> {
    if let Some(token) = get_session_token(&jar) {
        state.session_repo.delete(&token).await?;
    }

    let jar = jar.add(remove_session_cookie());
    Ok((jar, Redirect::to("/auth/login")).into_response())
}
