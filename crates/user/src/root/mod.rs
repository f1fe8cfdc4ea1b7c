use std::ops::Deref;

use crate::{
    TokenConfig, User, normalize_email,
    repository::{self, FindType},
};

mod login;
mod profile;
mod register;
mod suspend;

pub use login::LoginInput;
pub use profile::UpdateProfileInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    state: recipebox_shared::State,
    token: TokenConfig,
}

impl Deref for Command {
    type Target = recipebox_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: recipebox_shared::State, token: TokenConfig) -> Self {
        Self { state, token }
    }

    pub async fn find(&self, id: impl Into<String>) -> recipebox_shared::Result<Option<User>> {
        let row = repository::find(&self.read_db, FindType::Id(id.into())).await?;

        Ok(row.map(Into::into))
    }

    pub async fn find_by_email(
        &self,
        email: impl AsRef<str>,
    ) -> recipebox_shared::Result<Option<User>> {
        let email = normalize_email(email.as_ref());
        let row = repository::find(&self.read_db, FindType::Email(email)).await?;

        Ok(row.map(Into::into))
    }
}
