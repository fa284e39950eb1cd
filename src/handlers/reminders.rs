use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{CreateReminder, Reminder};
use crate::repositories::ReminderRepository;

#[derive(Clone)]
pub struct RemindersState {
    pub reminder_repo: ReminderRepository,
}

#[derive(Template)]
#[template(path = "reminders/new.html")]
struct NewReminderTemplate {
    user: AuthUser,
    success: Option<String>,
}

#[derive(Template)]
#[template(path = "reminders/list.html")]
struct RemindersListTemplate {
    user: AuthUser,
    reminders: Vec<Reminder>,
}

pub async fn new_page(auth_user: AuthUser) -> Result<Response> {
    let template = NewReminderTemplate {
        user: auth_user,
        success: None,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn create(
    State(state): State<RemindersState>,
    auth_user: AuthUser,
    Form(form): Form<CreateReminder>,
) -> Result<Response> {
    let appended = state
        .reminder_repo
        .append(&auth_user.username, &form.text, form.time)
        .await?;

    if !appended {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let template = NewReminderTemplate {
        user: auth_user,
        success: Some("Reminder set successfully!".to_string()),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn list(State(state): State<RemindersState>, auth_user: AuthUser) -> Result<Response> {
    let reminders = state
        .reminder_repo
        .find_by_username(&auth_user.username)
        .await?;

    let template = RemindersListTemplate {
        user: auth_user,
        reminders,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
