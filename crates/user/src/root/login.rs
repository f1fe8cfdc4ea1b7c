use recipebox_shared::{Error, NON_FIELD_ERRORS};
use validator::Validate;

use crate::{User, jwt, normalize_email, password, repository};

#[derive(Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub email: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "Unable to authenticate with provided credentials.";

impl super::Command {
    /// Verifies the credentials and issues a bearer token for the account.
    pub async fn login(&self, input: LoginInput) -> recipebox_shared::Result<String> {
        input.validate()?;

        let email = normalize_email(&input.email);
        let Some(user_row) =
            repository::find(&self.read_db, repository::FindType::Email(email)).await?
        else {
            tracing::warn!("token requested for unknown email");
            return Err(Error::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS));
        };

        if !password::verify_password(&input.password, &user_row.password)? {
            tracing::warn!(user_id = %user_row.id, "token requested with wrong password");
            return Err(Error::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS));
        }

        if user_row.state.0 != crate::State::Active {
            tracing::warn!(user_id = %user_row.id, "token requested for suspended account");
            return Err(Error::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS));
        }

        Ok(jwt::generate_token(&self.token, user_row.id)?)
    }

    /// Resolves a bearer token to an active account.
    pub async fn authenticate(&self, token: &str) -> recipebox_shared::Result<User> {
        let claims = jwt::validate_token(&self.token, token).map_err(|e| {
            tracing::debug!("rejected token: {e}");
            Error::Unauthorized
        })?;

        let Some(user) = self.find(claims.sub).await? else {
            return Err(Error::Unauthorized);
        };

        if !user.is_active() {
            return Err(Error::Unauthorized);
        }

        Ok(user)
    }
}
