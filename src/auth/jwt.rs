use crate::core::errors::RideHailError;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Rider,
    Driver,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Rider => "Rider",
            Role::Driver => "Driver",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}

impl Claims {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }
}

/// Validates HS256 bearer tokens issued elsewhere. Issuer, audience and
/// expiry are all enforced.
pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &str, issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        JwtService {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, RideHailError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| RideHailError::Unauthorized(format!("Invalid token: {}", e)))?;
        Ok(token_data.claims)
    }

    /// Validates the `Authorization: Bearer …` header value and checks that
    /// the caller holds `role`.
    pub fn authorize(&self, authorization: Option<&str>, role: Role) -> Result<Claims, RideHailError> {
        let header =
            authorization.ok_or_else(|| RideHailError::Unauthorized("Missing Authorization header".to_string()))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| RideHailError::Unauthorized("Invalid Authorization header".to_string()))?;
        let claims = self.validate_token(token.trim())?;
        if !claims.has_role(role) {
            return Err(RideHailError::Forbidden(format!("{} role required", role)));
        }
        Ok(claims)
    }
}
