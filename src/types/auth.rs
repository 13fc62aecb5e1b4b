//! Wire types for the authentication endpoints.

use serde::{Deserialize, Serialize};

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// The authenticated user, as returned by `/auth/register` and `/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
}
