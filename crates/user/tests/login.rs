use recipebox_shared::{Error, NON_FIELD_ERRORS};
use recipebox_user::{LoginInput, jwt};
use temp_dir::TempDir;

mod helpers;

fn login(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

fn assert_invalid_credentials(resp: recipebox_shared::Result<String>) {
    let Err(Error::Validate(errors)) = resp else {
        panic!("expected a validation error");
    };

    let fields = Error::field_messages(&errors);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].0, NON_FIELD_ERRORS);
}

#[tokio::test]
async fn test_login_failure() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    assert_invalid_credentials(
        cmd.login(login("john.doe@recipebox.localhost", "my_password"))
            .await,
    );

    helpers::create_user(&cmd, "john.doe").await?;

    assert_invalid_credentials(
        cmd.login(login("john.doe@recipebox.localhost", "my_password3"))
            .await,
    );
    assert_invalid_credentials(
        cmd.login(login("john.doe@recipebox.localhos", "my_password"))
            .await,
    );

    Ok(())
}

#[tokio::test]
async fn test_login_blank_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let Err(Error::Validate(errors)) = cmd.login(login("qq", "")).await else {
        panic!("expected a validation error");
    };

    let fields = Error::field_messages(&errors);
    assert_eq!(fields[0].0, "password");

    Ok(())
}

#[tokio::test]
async fn test_login_issues_token_bound_to_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_user(&cmd, "john.doe").await?;

    let token = cmd
        .login(login("john.doe@recipebox.localhost", "my_password"))
        .await?;

    let claims = jwt::validate_token(&helpers::token_config(), &token)?;
    assert_eq!(claims.sub, id);

    let user = cmd.authenticate(&token).await?;
    assert_eq!(user.id, id);
    assert_eq!(user.email, "john.doe@recipebox.localhost");

    Ok(())
}

#[tokio::test]
async fn test_authenticate_rejects_garbage() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let cmd = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    assert!(matches!(
        cmd.authenticate("garbage").await,
        Err(Error::Unauthorized)
    ));

    Ok(())
}
