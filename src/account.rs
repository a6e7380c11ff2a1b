//! Sign-in and sign-up forms.
//!
//! Forms are checked locally before anything reaches the auth service.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::backend::{AuthSession, BackendClient, Credentials, Query, SignUpOutcome, Table};
use crate::error::{AppError, ValidationError};
use crate::models::Profile;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

#[derive(Debug, Clone, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

fn validate_email(email: &str) -> Result<&str, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        Ok(())
    }
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::FullNameRequired);
        }
        validate_email(&self.email)?;
        validate_password(&self.password)
    }
}

pub async fn sign_in(client: &BackendClient, form: &SignInForm) -> Result<AuthSession, AppError> {
    form.validate()?;
    Ok(client.sign_in(form.email.trim(), &form.password).await?)
}

pub async fn sign_up(client: &BackendClient, form: &SignUpForm) -> Result<SignUpOutcome, AppError> {
    form.validate()?;
    Ok(client
        .sign_up(form.email.trim(), &form.password, form.full_name.trim())
        .await?)
}

/// The signed-in user's profile row. `None` until the backend has created it.
pub async fn fetch_profile(client: &BackendClient, creds: &Credentials) -> Result<Option<Profile>, AppError> {
    let query = Query::table(Table::Profiles).eq("user_id", creds.user_id);
    Ok(client.select_one(&creds.access_token, &query).await?)
}
