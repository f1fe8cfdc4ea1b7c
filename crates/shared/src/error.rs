use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Field name used for errors that are not tied to a single input field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] ValidationErrors),

    #[error("authentication credentials were not provided or are invalid")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a validation error carrying a single message for `field`.
    pub fn field(field: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        let mut error = ValidationError::new("invalid");
        error.message = Some(message.into());

        let mut errors = ValidationErrors::new();
        errors.add(field, error);

        Self::Validate(errors)
    }

    /// Flattens validation errors into `field -> messages`, sorted by field.
    pub fn field_messages(errors: &ValidationErrors) -> Vec<(String, Vec<String>)> {
        let mut fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("invalid value ({})", e.code))
                    })
                    .collect();

                (field.to_string(), messages)
            })
            .collect::<Vec<_>>();

        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!("password hash: {value}"))
    }
}

impl From<std::time::SystemTimeError> for Error {
    fn from(value: std::time::SystemTimeError) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! field {
    ($field:expr, $msg:literal $(,)?) => {
        return Err($crate::Error::field($field, $msg))
    };
    ($field:expr, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::field($field, format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}
