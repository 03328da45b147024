use std::sync::Arc;

use tracing::info;

use models::{Country, Pilot, Team};
use store::{query, Query, RecordStore};

use crate::errors::ServiceError;

/// Pilot registry. Strict lookup discipline throughout.
pub struct PilotService<S: RecordStore<Pilot>> {
    store: Arc<S>,
}

impl<S: RecordStore<Pilot>> PilotService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Pilot, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found(format!("Piloto {id} não existe")))
    }

    pub async fn list_all(&self) -> Result<Vec<Pilot>, ServiceError> {
        let pilots = self.store.list().await;
        if pilots.is_empty() {
            return Err(ServiceError::not_found("Nenhum piloto cadastrado"));
        }
        Ok(pilots)
    }

    pub async fn insert(
        &self,
        name: &str,
        country_id: i32,
        team_id: i32,
    ) -> Result<Pilot, ServiceError> {
        let pilot = self.store.save(Pilot::new(0, name, country_id, team_id)).await;
        info!(pilot_id = pilot.id, "pilot_created");
        Ok(pilot)
    }

    pub async fn update(&self, pilot: Pilot) -> Result<Pilot, ServiceError> {
        self.find_by_id(pilot.id).await?;
        Ok(self.store.save(pilot).await)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        self.store.delete(id).await;
        Ok(())
    }

    pub async fn find_by_name_starts_with_ignore_case(
        &self,
        prefix: &str,
    ) -> Result<Vec<Pilot>, ServiceError> {
        let wanted = prefix.to_string();
        let pilots = self
            .store
            .find(Query::new().filter(move |p: &Pilot| {
                query::starts_with_ignore_case(&p.name, &wanted)
            }))
            .await;
        if pilots.is_empty() {
            return Err(ServiceError::not_found("Nenhum piloto com esse nome"));
        }
        Ok(pilots)
    }

    pub async fn find_by_country(&self, country: &Country) -> Result<Vec<Pilot>, ServiceError> {
        let country_id = country.id;
        let pilots = self
            .store
            .find(Query::new().filter(move |p: &Pilot| p.country_id == country_id))
            .await;
        if pilots.is_empty() {
            return Err(ServiceError::not_found("Nenhum piloto nesse país"));
        }
        Ok(pilots)
    }

    pub async fn find_by_team(&self, team: &Team) -> Result<Vec<Pilot>, ServiceError> {
        let team_id = team.id;
        let pilots = self
            .store
            .find(Query::new().filter(move |p: &Pilot| p.team_id == team_id))
            .await;
        if pilots.is_empty() {
            return Err(ServiceError::not_found("Nenhum piloto nesse time"));
        }
        Ok(pilots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use store::MemoryStore;

    async fn service() -> PilotService<MemoryStore<Pilot>> {
        test_support::init();
        PilotService::new(Arc::new(MemoryStore::new()))
    }

    async fn seeded_service() -> PilotService<MemoryStore<Pilot>> {
        test_support::init();
        let store = Arc::new(MemoryStore::new());
        test_support::seed_pilots(&store).await;
        PilotService::new(store)
    }

    #[tokio::test]
    async fn find_by_id_returns_record() {
        let service = seeded_service().await;
        let pilot = service.find_by_id(3).await.unwrap();
        assert_eq!(pilot.id, 3);
        assert_eq!(pilot.name, "Leonardo");
    }

    #[tokio::test]
    async fn find_by_id_missing_fails() {
        let service = seeded_service().await;
        let err = service.find_by_id(10).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Piloto 10 não existe"));
    }

    #[tokio::test]
    async fn insert_assigns_first_id() {
        let service = service().await;
        service.insert("Ayrton Senna", 3, 3).await.unwrap();
        let pilot = service.find_by_id(1).await.unwrap();
        assert_eq!(pilot.id, 1);
        assert_eq!(pilot.name, "Ayrton Senna");
    }

    #[tokio::test]
    async fn list_all_returns_seeded_pilots() {
        let service = seeded_service().await;
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_all_empty_fails() {
        let service = service().await;
        let err = service.list_all().await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Nenhum piloto cadastrado"));
    }

    #[tokio::test]
    async fn update_overwrites_team_reference() {
        let service = seeded_service().await;
        let before = service.find_by_id(3).await.unwrap();

        let updated = service.update(Pilot::new(3, "Leonardo", 3, 4)).await.unwrap();
        assert_eq!(updated.team_id, 4);
        assert_ne!(before.team_id, updated.team_id);
    }

    #[tokio::test]
    async fn update_missing_id_fails() {
        let service = service().await;
        let err = service
            .update(Pilot::new(1, "Ayrton Senna", 3, 4))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Piloto 1 não existe"));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let service = seeded_service().await;
        service.delete(3).await.unwrap();

        let err = service.find_by_id(3).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Piloto 3 não existe"));
    }

    #[tokio::test]
    async fn find_by_name_prefix_ignores_case() {
        let service = seeded_service().await;
        assert_eq!(
            service.find_by_name_starts_with_ignore_case("Leo").await.unwrap().len(),
            1
        );
        assert_eq!(
            service.find_by_name_starts_with_ignore_case("LEO").await.unwrap().len(),
            1
        );
        assert_eq!(
            service.find_by_name_starts_with_ignore_case("cLAV").await.unwrap().len(),
            1
        );

        let err = service
            .find_by_name_starts_with_ignore_case("Ayrton")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Nenhum piloto com esse nome"));
    }

    #[tokio::test]
    async fn find_by_country_filters_by_reference() {
        let service = seeded_service().await;
        assert_eq!(
            service.find_by_country(&Country::new(3, "Brasil")).await.unwrap().len(),
            1
        );
        assert_eq!(
            service.find_by_country(&Country::new(4, "Japão")).await.unwrap().len(),
            1
        );

        let err = service
            .find_by_country(&Country::new(1, "Chile"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Nenhum piloto nesse país"));
    }

    #[tokio::test]
    async fn find_by_team_filters_by_reference() {
        let service = seeded_service().await;
        assert_eq!(
            service.find_by_team(&Team::new(3, "Ferrari")).await.unwrap().len(),
            1
        );
        assert_eq!(
            service.find_by_team(&Team::new(4, "Red Bull")).await.unwrap().len(),
            1
        );

        let err = service.find_by_team(&Team::new(1, "Mclaren")).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Nenhum piloto nesse time"));
    }
}
