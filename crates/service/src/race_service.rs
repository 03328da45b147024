use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset};
use tracing::{info, instrument};

use models::{Championship, Race, Speedway};
use store::{Query, RecordStore};

use crate::errors::ServiceError;

/// Race registry. Strict lookup discipline throughout.
///
/// Holds a read-only handle on the championship store: the race date's year
/// must equal the referenced championship's year, and the reference is a
/// foreign id resolved at validation time.
pub struct RaceService<R, C>
where
    R: RecordStore<Race>,
    C: RecordStore<Championship>,
{
    races: Arc<R>,
    championships: Arc<C>,
}

impl<R, C> RaceService<R, C>
where
    R: RecordStore<Race>,
    C: RecordStore<Championship>,
{
    pub fn new(races: Arc<R>, championships: Arc<C>) -> Self {
        Self { races, championships }
    }

    async fn validate(
        &self,
        date: Option<DateTime<FixedOffset>>,
        championship_id: Option<i32>,
    ) -> Result<(DateTime<FixedOffset>, i32), ServiceError> {
        let championship_id = championship_id
            .ok_or_else(|| ServiceError::integrity("Campeonato não pode ser nulo"))?;
        let date = date.ok_or_else(|| ServiceError::integrity("Data inválida"))?;
        let championship = self.championships.get(championship_id).await.ok_or_else(|| {
            ServiceError::not_found(format!("Campeonato {championship_id} não existe"))
        })?;
        if date.year() != championship.year {
            return Err(ServiceError::integrity(
                "Ano da corrida diferente do ano do campeonato",
            ));
        }
        Ok((date, championship_id))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Race, ServiceError> {
        self.races
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found(format!("Corrida {id} não existe")))
    }

    pub async fn list_all(&self) -> Result<Vec<Race>, ServiceError> {
        let races = self.races.list().await;
        if races.is_empty() {
            return Err(ServiceError::not_found("Não existem corridas cadastradas"));
        }
        Ok(races)
    }

    #[instrument(skip(self, date))]
    pub async fn insert(
        &self,
        date: Option<DateTime<FixedOffset>>,
        speedway_id: i32,
        championship_id: Option<i32>,
    ) -> Result<Race, ServiceError> {
        let (date, championship_id) = self.validate(date, championship_id).await?;
        let race = self
            .races
            .save(Race::new(0, date, speedway_id, championship_id))
            .await;
        info!(race_id = race.id, "race_created");
        Ok(race)
    }

    pub async fn update(&self, race: Race) -> Result<Race, ServiceError> {
        self.find_by_id(race.id).await?;
        self.validate(Some(race.date), Some(race.championship_id)).await?;
        Ok(self.races.save(race).await)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        self.races.delete(id).await;
        Ok(())
    }

    /// Races held at the exact timestamp.
    pub async fn find_by_date(
        &self,
        date: DateTime<FixedOffset>,
    ) -> Result<Vec<Race>, ServiceError> {
        let races = self
            .races
            .find(Query::new().filter(move |r: &Race| r.date == date))
            .await;
        if races.is_empty() {
            return Err(ServiceError::not_found(
                "Não existe corrida para a data especificada",
            ));
        }
        Ok(races)
    }

    pub async fn find_by_speedway(&self, speedway: &Speedway) -> Result<Vec<Race>, ServiceError> {
        let speedway_id = speedway.id;
        let races = self
            .races
            .find(Query::new().filter(move |r: &Race| r.speedway_id == speedway_id))
            .await;
        if races.is_empty() {
            return Err(ServiceError::not_found(
                "Não existe corrida na pista especificada",
            ));
        }
        Ok(races)
    }

    pub async fn find_by_championship(
        &self,
        championship: &Championship,
    ) -> Result<Vec<Race>, ServiceError> {
        let championship_id = championship.id;
        let races = self
            .races
            .find(Query::new().filter(move |r: &Race| r.championship_id == championship_id))
            .await;
        if races.is_empty() {
            return Err(ServiceError::not_found(
                "Não existe corrida para o campeonato especificado",
            ));
        }
        Ok(races)
    }
}
