use ulid::Ulid;
use validator::Validate;

use crate::{User, normalize_email, password, repository};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Ensure this field has at least 6 and at most 128 characters."
    ))]
    pub password: String,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub name: String,
}

const EMAIL_TAKEN: &str = "user with this email already exists.";

impl super::Command {
    pub async fn register(&self, input: RegisterInput) -> recipebox_shared::Result<User> {
        let input = RegisterInput {
            email: normalize_email(&input.email),
            name: input.name.trim().to_owned(),
            ..input
        };

        input.validate()?;

        if repository::find(
            &self.read_db,
            repository::FindType::Email(input.email.to_owned()),
        )
        .await?
        .is_some()
        {
            return Err(recipebox_shared::Error::field("email", EMAIL_TAKEN));
        }

        let password_hash = password::hash_password(&input.password)?;
        let id = Ulid::new().to_string();

        let created = repository::create(
            &self.write_db,
            repository::CreateInput {
                id: id.to_owned(),
                email: input.email.to_owned(),
                password: password_hash,
                name: input.name.to_owned(),
            },
        )
        .await;

        match created {
            Ok(()) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(recipebox_shared::Error::field("email", EMAIL_TAKEN));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %id, "user registered");

        Ok(User {
            id,
            email: input.email,
            name: input.name,
            state: crate::State::Active,
        })
    }
}
