//! Authentication service
//!
//! Handles user registration, login and bearer token validation.

use skillswap_common::AppError;
use skillswap_core::entities::NewUser;
use skillswap_core::{DomainError, UserId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{LoginRequest, RegisterRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<TokenResponse> {
        request.validate()?;
        self.ctx.password_service().check_new_password(&request.password)?;

        // Cheap early exit; the unique index still decides concurrent registrations
        if self.ctx.user_repo().find_by_email(&request.email).await?.is_some() {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::new(request.name, request.email), &password_hash)
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_token(user.id)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password fail with the same error.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: invalid password"))?;

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_token(user.id)
    }

    /// Validate a bearer token and return the user ID it was issued to
    #[instrument(skip(self, token))]
    pub fn authenticate(&self, token: &str) -> ServiceResult<UserId> {
        Ok(self.ctx.jwt_service().authenticate(token)?)
    }

    fn issue_token(&self, user_id: UserId) -> ServiceResult<TokenResponse> {
        let issued = self.ctx.jwt_service().issue(user_id)?;

        Ok(TokenResponse {
            token: issued.token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
        })
    }
}
