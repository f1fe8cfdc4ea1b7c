use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum State {
    #[default]
    Active,
    Suspended,
}

/// Public representation of an account. Never carries the password hash.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    #[serde(skip)]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip)]
    pub state: State,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }
}

/// Lowercases the domain part of an email address, leaving the local part
/// untouched.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_owned(),
    }
}
