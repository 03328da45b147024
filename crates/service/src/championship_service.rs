use std::sync::Arc;

use tracing::info;

use models::Championship;
use store::{query, Query, RecordStore};

use crate::errors::ServiceError;

/// Earliest season the registry accepts.
const MIN_YEAR: i32 = 1900;

/// Championship registry.
///
/// Tolerant lookup discipline: reads return `None` or an empty `Vec` instead
/// of failing, and `delete` of an absent id is a silent no-op. `update` still
/// requires the target to exist.
pub struct ChampionshipService<S: RecordStore<Championship>> {
    store: Arc<S>,
}

impl<S: RecordStore<Championship>> ChampionshipService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn validate_year(year: i32) -> Result<(), ServiceError> {
        if year < MIN_YEAR {
            return Err(ServiceError::integrity(format!("Ano inválido: {year}")));
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Championship> {
        self.store.get(id).await
    }

    pub async fn list_all(&self) -> Vec<Championship> {
        self.store.list().await
    }

    pub async fn insert(
        &self,
        description: &str,
        year: Option<i32>,
    ) -> Result<Championship, ServiceError> {
        let year = year.ok_or_else(|| ServiceError::integrity("Ano não pode ser nulo"))?;
        Self::validate_year(year)?;
        let championship = self.store.save(Championship::new(0, description, year)).await;
        info!(championship_id = championship.id, "championship_created");
        Ok(championship)
    }

    pub async fn update(&self, championship: Championship) -> Result<Championship, ServiceError> {
        if self.find_by_id(championship.id).await.is_none() {
            return Err(ServiceError::not_found(format!(
                "Campeonato {} não existe",
                championship.id
            )));
        }
        Self::validate_year(championship.year)?;
        Ok(self.store.save(championship).await)
    }

    pub async fn delete(&self, id: i32) {
        self.store.delete(id).await;
    }

    /// Championships whose year falls in the inclusive range.
    pub async fn find_by_year_between(&self, start: i32, end: i32) -> Vec<Championship> {
        self.store
            .find(Query::new().filter(move |c: &Championship| query::between(c.year, start, end)))
            .await
    }

    pub async fn find_by_year(&self, year: i32) -> Vec<Championship> {
        self.store
            .find(Query::new().filter(move |c: &Championship| c.year == year))
            .await
    }

    pub async fn find_by_description_contains_ignore_case(&self, part: &str) -> Vec<Championship> {
        let wanted = part.to_string();
        self.store
            .find(Query::new().filter(move |c: &Championship| {
                query::contains_ignore_case(&c.description, &wanted)
            }))
            .await
    }

    pub async fn find_by_description_contains_ignore_case_and_year(
        &self,
        part: &str,
        year: i32,
    ) -> Vec<Championship> {
        let wanted = part.to_string();
        self.store
            .find(
                Query::new()
                    .filter(move |c: &Championship| {
                        query::contains_ignore_case(&c.description, &wanted)
                    })
                    .filter(move |c: &Championship| c.year == year),
            )
            .await
    }
}
