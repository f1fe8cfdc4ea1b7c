use validator::Validate;

use crate::{User, password, repository};

#[derive(Validate, Default)]
pub struct UpdateProfileInput {
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub name: Option<String>,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Ensure this field has at least 6 and at most 128 characters."
    ))]
    pub password: Option<String>,
}

impl super::Command {
    pub async fn update_profile(
        &self,
        id: impl Into<String>,
        input: UpdateProfileInput,
    ) -> recipebox_shared::Result<User> {
        let id = id.into();
        let input = UpdateProfileInput {
            name: input.name.map(|name| name.trim().to_owned()),
            ..input
        };

        input.validate()?;

        let password = match input.password {
            Some(password) => Some(password::hash_password(&password)?),
            None => None,
        };

        repository::update(
            &self.write_db,
            repository::UpdateInput {
                id: id.to_owned(),
                name: input.name,
                password,
                state: None,
            },
        )
        .await?;

        let Some(user) = repository::find(&self.write_db, repository::FindType::Id(id)).await?
        else {
            recipebox_shared::not_found!("user");
        };

        Ok(user.into())
    }
}
