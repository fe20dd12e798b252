use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::db::repository::OperatorRepository;
use crate::models::{
    auth::Claims,
    operator::{LoginResponse, Operator, OperatorProfile},
};

pub struct AuthService;

impl AuthService {
    /// Verify credentials and mint a session token. Returns `Ok(None)` for
    /// unknown email or wrong password so callers can branch without an error.
    pub async fn login(
        operators: &dyn OperatorRepository,
        email: &str,
        password: &str,
        jwt_secret: &str,
        expiry_seconds: u64,
    ) -> anyhow::Result<Option<LoginResponse>> {
        let Some(operator) = operators.find_by_email(email).await? else {
            return Ok(None);
        };

        if !bcrypt::verify(password, &operator.password_hash)? {
            return Ok(None);
        }

        let token = Self::issue_access_token(&operator, jwt_secret, expiry_seconds)?;
        Ok(Some(LoginResponse {
            token,
            operator: OperatorProfile::from(&operator),
        }))
    }

    pub fn issue_access_token(
        operator: &Operator,
        jwt_secret: &str,
        expiry_seconds: u64,
    ) -> anyhow::Result<String> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: operator.id.to_string(),
            email: operator.email.clone(),
            iat: now,
            exp: now + expiry_seconds as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(jwt_secret.as_bytes()),
        )?;
        Ok(token)
    }
}
