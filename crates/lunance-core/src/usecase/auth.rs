// Auth use cases.
//
// Login and registration check their input locally first; an invalid form
// never reaches the reachability gate or the network.

use std::sync::Arc;

use async_trait::async_trait;
use lunance_api::requests::{LoginRequest, RegisterRequest};
use secrecy::ExposeSecret;

use super::{UseCase, use_case};
use crate::entity::{AuthSession, UserProfile};
use crate::error::ValidationError;
use crate::outcome::Outcome;
use crate::repository::AuthRepository;

// ── Validation ──

fn check_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationError> {
    check_credentials(&request.email, request.password.expose_secret())
}

pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    check_credentials(&request.email, request.password.expose_secret())
}

// ── Login / register ──

pub struct LoginUseCase {
    repository: Arc<AuthRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<AuthRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for LoginUseCase {
    type Params = LoginRequest;
    type Output = Result<Outcome<AuthSession>, ValidationError>;

    async fn call(&self, request: LoginRequest) -> Self::Output {
        validate_login(&request)?;
        Ok(self.repository.login(&request).await)
    }
}

pub struct RegisterUseCase {
    repository: Arc<AuthRepository>,
}

impl RegisterUseCase {
    pub fn new(repository: Arc<AuthRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for RegisterUseCase {
    type Params = RegisterRequest;
    type Output = Result<Outcome<AuthSession>, ValidationError>;

    async fn call(&self, request: RegisterRequest) -> Self::Output {
        validate_registration(&request)?;
        Ok(self.repository.register(&request).await)
    }
}

// ── Session ──

use_case! {
    /// Log out; the local token is dropped even if the server call fails.
    LogoutUseCase(AuthRepository) {
        params: (),
        output: Outcome<()>,
        |repo, _| repo.logout().await
    }
}

use_case! {
    GetCurrentUserUseCase(AuthRepository) {
        params: (),
        output: Outcome<UserProfile>,
        |repo, _| repo.current_user().await
    }
}
