use argon2::{
    Argon2, Params,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password using Argon2id with OWASP-recommended parameters
/// - Memory: 65536 KB (64 MB)
/// - Iterations: 3
/// - Parallelism: 4
pub fn hash_password(password: &str) -> recipebox_shared::Result<String> {
    let params = Params::new(65536, 3, 4, None)
        .map_err(|e| anyhow::anyhow!("invalid argon2 params: {e}"))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Verify a password against an Argon2 hash. Parameters are read from the
/// hash itself.
pub fn verify_password(password: &str, hash: &str) -> recipebox_shared::Result<bool> {
    let parsed_hash = PasswordHash::new(hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("testpass").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("testpass", &hash).unwrap());
        assert!(!verify_password("testpass2", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("testpass").unwrap();
        let b = hash_password("testpass").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("testpass", "not-a-hash").is_err());
    }
}
