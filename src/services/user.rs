//! User service implementation
//! 
//! This service handles registration, login, token resolution and profile
//! management.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use tracing::{debug, info};
use crate::database::SharedRepository;
use crate::models::user::{LoginResponse, ParticipantDetail, RegisterUserRequest, UpdateUserRequest, User};
use crate::services::auth::{AuthContext, AuthService};
use crate::utils::errors::{SportsHubError, Result};
use crate::utils::helpers::{generate_uuid, id_suffix};
use crate::utils::logging::{log_auth_event, log_user_action};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("phone pattern is valid"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 6;

/// User service for managing user operations
#[derive(Clone)]
pub struct UserService {
    users: SharedRepository<User>,
    auth: AuthService,
    bcrypt_cost: u32,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(users: SharedRepository<User>, auth: AuthService, bcrypt_cost: u32) -> Self {
        Self {
            users,
            auth,
            bcrypt_cost,
        }
    }

    /// Register a new account
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User> {
        debug!(username = %request.username, "Attempting to register user");

        if request.username.is_empty() || request.password.is_empty() {
            return Err(SportsHubError::InvalidInput("Username and password are required".to_string()));
        }
        validate_username(&request.username)?;
        if request.password.chars().count() < PASSWORD_MIN {
            return Err(SportsHubError::InvalidInput(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN
            )));
        }
        let phone = non_empty(request.phone);
        let email = non_empty(request.email);
        if let Some(phone) = &phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &email {
            validate_email(email)?;
        }

        let password_hash = self.hash_password(request.password).await?;

        let mut users = self.users.write().await;
        let existing = users.list()?;
        if existing.iter().any(|u| u.username == request.username) {
            return Err(SportsHubError::DuplicateUsername);
        }
        if phone.is_some() && existing.iter().any(|u| u.phone == phone) {
            return Err(SportsHubError::DuplicatePhone);
        }
        if email.is_some() && existing.iter().any(|u| u.email == email) {
            return Err(SportsHubError::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: generate_uuid(),
            username: request.username,
            email,
            phone,
            bio: None,
            birthdate: None,
            gender: None,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.save(user.clone())?;
        drop(users);

        log_user_action(&user.id, "register", Some(&user.username));
        Ok(user)
    }

    /// Check credentials and issue a token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let user = {
            let users = self.users.read().await;
            users.list()?.into_iter().find(|u| u.username == username)
        };
        let Some(user) = user else {
            log_auth_event(username, "login", false);
            return Err(SportsHubError::UserNotFound { identifier: username.to_string() });
        };

        if !self.verify_password(password.to_string(), user.password_hash.clone()).await? {
            log_auth_event(username, "login", false);
            return Err(SportsHubError::BadPassword);
        }

        let token = self.auth.issue_token(&user)?;
        log_auth_event(username, "login", true);
        Ok(LoginResponse { user, token })
    }

    /// Resolve the account a token was issued to
    pub async fn get_by_token(&self, token: &str) -> Result<User> {
        let claims = self.auth.verify_token(token).map_err(|_| SportsHubError::InvalidToken)?;
        self.get_by_id(&claims.user_id)
            .await?
            .ok_or(SportsHubError::UserNotFound { identifier: claims.user_id })
    }

    /// Resolve a token straight into a request context
    pub async fn authenticate(&self, token: &str) -> Result<AuthContext> {
        let user = self.get_by_token(token).await?;
        Ok(AuthContext::from_user(&user))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.users.read().await.get(user_id)
    }

    /// Display projection for a list of participant ids, in the same order.
    /// Unknown ids get a `user<suffix>` placeholder name.
    pub async fn participant_details(&self, user_ids: &[String]) -> Result<Vec<ParticipantDetail>> {
        let users = self.users.read().await;
        user_ids
            .iter()
            .map(|id| {
                let username = match users.get(id)? {
                    Some(user) => user.username,
                    None => format!("user{}", id_suffix(id, 4)),
                };
                Ok(ParticipantDetail { id: id.clone(), username })
            })
            .collect()
    }

    /// Update the caller's own profile
    pub async fn update_profile(&self, auth: &AuthContext, request: UpdateUserRequest) -> Result<User> {
        debug!(user_id = %auth.user_id, "Updating user profile");

        if let Some(username) = &request.username {
            validate_username(username)?;
        }
        let phone = non_empty(request.phone);
        let email = non_empty(request.email);
        if let Some(phone) = &phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &email {
            validate_email(email)?;
        }

        let mut users = self.users.write().await;
        let mut user = users
            .get(&auth.user_id)?
            .ok_or_else(|| SportsHubError::UserNotFound { identifier: auth.user_id.clone() })?;
        let others: Vec<User> = users.list()?.into_iter().filter(|u| u.id != user.id).collect();

        if let Some(username) = &request.username {
            if others.iter().any(|u| &u.username == username) {
                return Err(SportsHubError::DuplicateUsername);
            }
        }
        if phone.is_some() && others.iter().any(|u| u.phone == phone) {
            return Err(SportsHubError::DuplicatePhone);
        }
        if email.is_some() && others.iter().any(|u| u.email == email) {
            return Err(SportsHubError::DuplicateEmail);
        }

        if let Some(username) = request.username {
            user.username = username;
        }
        if phone.is_some() {
            user.phone = phone;
        }
        if email.is_some() {
            user.email = email;
        }
        if request.bio.is_some() {
            user.bio = request.bio;
        }
        if request.birthdate.is_some() {
            user.birthdate = request.birthdate;
        }
        if request.gender.is_some() {
            user.gender = request.gender;
        }
        user.updated_at = Utc::now();
        users.save(user.clone())?;
        drop(users);

        info!(user_id = %user.id, "User profile updated successfully");
        Ok(user)
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| SportsHubError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(SportsHubError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| SportsHubError::Internal(format!("Password check task failed: {}", e)))?
            .map_err(SportsHubError::from)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn validate_username(username: &str) -> Result<()> {
    let len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(SportsHubError::InvalidInput(format!(
            "Username must be between {} and {} characters",
            USERNAME_MIN, USERNAME_MAX
        )));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<()> {
    if !PHONE_RE.is_match(phone) {
        return Err(SportsHubError::InvalidInput("Invalid phone number format".to_string()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(SportsHubError::InvalidInput("Invalid email format".to_string()));
    }
    Ok(())
}
