use crate::{State, repository};

impl super::Command {
    pub async fn suspend(&self, id: impl Into<String>) -> recipebox_shared::Result<()> {
        self.set_state(id.into(), State::Suspended).await
    }

    pub async fn activate(&self, id: impl Into<String>) -> recipebox_shared::Result<()> {
        self.set_state(id.into(), State::Active).await
    }

    async fn set_state(&self, id: String, state: State) -> recipebox_shared::Result<()> {
        if repository::find(&self.read_db, repository::FindType::Id(id.to_owned()))
            .await?
            .is_none()
        {
            recipebox_shared::not_found!("user {id}");
        }

        repository::update(
            &self.write_db,
            repository::UpdateInput {
                id: id.to_owned(),
                name: None,
                password: None,
                state: Some(state),
            },
        )
        .await?;

        tracing::info!(user_id = %id, state = %state, "user state changed");

        Ok(())
    }
}
