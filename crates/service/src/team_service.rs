use std::sync::Arc;

use tracing::{info, instrument};

use models::Team;
use store::{query, Query, RecordStore};

use crate::errors::ServiceError;

/// Team catalogue with a name-uniqueness rule. Strict lookup discipline:
/// every read that matches nothing fails with `ObjectNotFound`.
pub struct TeamService<S: RecordStore<Team>> {
    store: Arc<S>,
}

impl<S: RecordStore<Team>> TeamService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Rejects a name already carried by a different team.
    async fn validate_name_unique(&self, team: &Team) -> Result<(), ServiceError> {
        let name = team.name.clone();
        let duplicates = self
            .store
            .find(Query::new().filter(move |t: &Team| t.name == name))
            .await;
        if duplicates.iter().any(|t| t.id != team.id) {
            return Err(ServiceError::integrity(format!(
                "Nome já existente: {}",
                team.name
            )));
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Team, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found(format!("Equipe {id} não encontrada")))
    }

    pub async fn list_all(&self) -> Result<Vec<Team>, ServiceError> {
        let teams = self.store.list().await;
        if teams.is_empty() {
            return Err(ServiceError::not_found("Não existe equipes cadastradas"));
        }
        Ok(teams)
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, name: &str) -> Result<Team, ServiceError> {
        let team = Team::new(0, name);
        self.validate_name_unique(&team).await?;
        let team = self.store.save(team).await;
        info!(team_id = team.id, "team_created");
        Ok(team)
    }

    pub async fn update(&self, team: Team) -> Result<Team, ServiceError> {
        self.find_by_id(team.id).await?;
        self.validate_name_unique(&team).await?;
        Ok(self.store.save(team).await)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        self.store.delete(id).await;
        Ok(())
    }

    pub async fn find_by_name_ignore_case(&self, name: &str) -> Result<Vec<Team>, ServiceError> {
        let wanted = name.to_string();
        let teams = self
            .store
            .find(Query::new().filter(move |t: &Team| query::eq_ignore_case(&t.name, &wanted)))
            .await;
        if teams.is_empty() {
            return Err(ServiceError::not_found(format!("Equipe {name} não encontrada")));
        }
        Ok(teams)
    }

    pub async fn find_by_name_contains(&self, part: &str) -> Result<Vec<Team>, ServiceError> {
        let wanted = part.to_string();
        let teams = self
            .store
            .find(Query::new().filter(move |t: &Team| t.name.contains(&wanted)))
            .await;
        if teams.is_empty() {
            return Err(ServiceError::not_found(format!(
                "Nome {part} não encontrado em nenhuma equipe"
            )));
        }
        Ok(teams)
    }
}
