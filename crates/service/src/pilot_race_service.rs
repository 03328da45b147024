use std::sync::Arc;

use tracing::info;

use models::{Pilot, PilotRace, Race};
use store::{query, Query, RecordStore};

use crate::errors::ServiceError;

/// Pilot-race results. Strict lookup discipline throughout; the finishing
/// placement must be present and non-zero.
pub struct PilotRaceService<S: RecordStore<PilotRace>> {
    store: Arc<S>,
}

impl<S: RecordStore<PilotRace>> PilotRaceService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn validate_placement(placement: Option<i32>) -> Result<i32, ServiceError> {
        let placement = placement.ok_or_else(|| ServiceError::integrity("Colocacao null!"))?;
        if placement == 0 {
            return Err(ServiceError::integrity("Colocacao zero!"));
        }
        Ok(placement)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<PilotRace, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found(format!("ID {id} inválido!")))
    }

    pub async fn list_all(&self) -> Result<Vec<PilotRace>, ServiceError> {
        let results = self.store.list().await;
        if results.is_empty() {
            return Err(ServiceError::not_found("Nenhum PilotoCorrida cadastrado!"));
        }
        Ok(results)
    }

    pub async fn insert(
        &self,
        placement: Option<i32>,
        pilot_id: i32,
        race_id: i32,
    ) -> Result<PilotRace, ServiceError> {
        let placement = Self::validate_placement(placement)?;
        let result = self
            .store
            .save(PilotRace::new(0, placement, pilot_id, race_id))
            .await;
        info!(pilot_race_id = result.id, "pilot_race_created");
        Ok(result)
    }

    pub async fn update(&self, pilot_race: PilotRace) -> Result<PilotRace, ServiceError> {
        self.find_by_id(pilot_race.id).await?;
        Self::validate_placement(Some(pilot_race.placement))?;
        Ok(self.store.save(pilot_race).await)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        self.store.delete(id).await;
        Ok(())
    }

    pub async fn find_by_placement(&self, placement: i32) -> Result<Vec<PilotRace>, ServiceError> {
        let results = self
            .store
            .find(Query::new().filter(move |pr: &PilotRace| pr.placement == placement))
            .await;
        if results.is_empty() {
            return Err(ServiceError::not_found("Nenhum PilotoCorrida nesta posição!"));
        }
        Ok(results)
    }

    pub async fn find_by_pilot(&self, pilot: &Pilot) -> Result<Vec<PilotRace>, ServiceError> {
        let pilot_id = pilot.id;
        let results = self
            .store
            .find(Query::new().filter(move |pr: &PilotRace| pr.pilot_id == pilot_id))
            .await;
        if results.is_empty() {
            return Err(ServiceError::not_found(
                "Nenhum PilotoCorrida com esse piloto!",
            ));
        }
        Ok(results)
    }

    /// Results of one race, best placement first.
    pub async fn find_by_race_order_by_placement(
        &self,
        race: &Race,
    ) -> Result<Vec<PilotRace>, ServiceError> {
        let race_id = race.id;
        let results = self
            .store
            .find(
                Query::new()
                    .filter(move |pr: &PilotRace| pr.race_id == race_id)
                    .order_by(|pr: &PilotRace| pr.placement),
            )
            .await;
        if results.is_empty() {
            return Err(ServiceError::not_found("Nenhum PilotoCorrida nesta corrida!"));
        }
        Ok(results)
    }

    pub async fn find_by_placement_between_and_race(
        &self,
        start: i32,
        end: i32,
        race: &Race,
    ) -> Result<Vec<PilotRace>, ServiceError> {
        let race_id = race.id;
        let results = self
            .store
            .find(
                Query::new()
                    .filter(move |pr: &PilotRace| query::between(pr.placement, start, end))
                    .filter(move |pr: &PilotRace| pr.race_id == race_id),
            )
            .await;
        if results.is_empty() {
            return Err(ServiceError::not_found(
                "Nenhum PilotoCorrida com esses parâmetros de busca!",
            ));
        }
        Ok(results)
    }

    /// The single result a pilot achieved in a race. Should duplicate
    /// (pilot, race) rows exist, the first match in id order is returned.
    pub async fn find_by_pilot_and_race(
        &self,
        pilot: &Pilot,
        race: &Race,
    ) -> Result<PilotRace, ServiceError> {
        let pilot_id = pilot.id;
        let race_id = race.id;
        let results = self
            .store
            .find(
                Query::new()
                    .filter(move |pr: &PilotRace| pr.pilot_id == pilot_id)
                    .filter(move |pr: &PilotRace| pr.race_id == race_id),
            )
            .await;
        results.into_iter().next().ok_or_else(|| {
            ServiceError::not_found("Nenhum PilotoCorrida com esses parâmetros de busca!")
        })
    }
}
