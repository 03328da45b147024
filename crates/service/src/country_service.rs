use std::sync::Arc;

use tracing::info;

use models::Country;
use store::{query, Query, RecordStore};

use crate::errors::ServiceError;

/// Country catalogue.
///
/// Mixed lookup discipline: id-based reads and deletes are strict, while
/// `list_all` and the name lookup tolerate an empty result.
pub struct CountryService<S: RecordStore<Country>> {
    store: Arc<S>,
}

impl<S: RecordStore<Country>> CountryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn validate(country: &Country) -> Result<(), ServiceError> {
        if country.name.trim().is_empty() {
            return Err(ServiceError::integrity("Nome não pode ser vazio"));
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Country, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found("País não existe"))
    }

    pub async fn list_all(&self) -> Vec<Country> {
        self.store.list().await
    }

    pub async fn insert(&self, name: &str) -> Result<Country, ServiceError> {
        let country = Country::new(0, name);
        Self::validate(&country)?;
        let country = self.store.save(country).await;
        info!(country_id = country.id, "country_created");
        Ok(country)
    }

    pub async fn update(&self, country: Country) -> Result<Country, ServiceError> {
        self.find_by_id(country.id).await?;
        Self::validate(&country)?;
        Ok(self.store.save(country).await)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        self.store.delete(id).await;
        Ok(())
    }

    pub async fn find_by_name_ignore_case(&self, name: &str) -> Vec<Country> {
        let name = name.to_string();
        self.store
            .find(Query::new().filter(move |c: &Country| query::eq_ignore_case(&c.name, &name)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use store::MemoryStore;

    async fn service() -> CountryService<MemoryStore<Country>> {
        test_support::init();
        CountryService::new(Arc::new(MemoryStore::new()))
    }

    async fn seeded_service() -> CountryService<MemoryStore<Country>> {
        test_support::init();
        let store = Arc::new(MemoryStore::new());
        test_support::seed_countries(&store).await;
        CountryService::new(store)
    }

    #[tokio::test]
    async fn insert_assigns_first_id() {
        let service = service().await;
        service.insert("Alemanha").await.unwrap();
        let country = service.find_by_id(1).await.unwrap();
        assert_eq!(country.id, 1);
        assert_eq!(country.name, "Alemanha");
    }

    #[tokio::test]
    async fn insert_rejects_blank_name() {
        let service = service().await;
        let err = service.insert("  ").await.unwrap_err();
        assert_eq!(err, ServiceError::integrity("Nome não pode ser vazio"));
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let service = seeded_service().await;
        let before = service.find_by_id(3).await.unwrap();

        let updated = service.update(Country::new(3, "Itália")).await.unwrap();
        assert_eq!(updated.name, "Itália");
        assert_ne!(before.name, updated.name);
    }

    #[tokio::test]
    async fn update_rejects_blank_name() {
        let service = seeded_service().await;
        let err = service.update(Country::new(3, "  ")).await.unwrap_err();
        assert_eq!(err, ServiceError::integrity("Nome não pode ser vazio"));

        let untouched = service.find_by_id(3).await.unwrap();
        assert_eq!(untouched.name, "Brasil");
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let service = seeded_service().await;
        service.delete(3).await.unwrap();

        let err = service.find_by_id(3).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("País não existe"));
    }

    #[tokio::test]
    async fn delete_missing_id_fails() {
        let service = service().await;
        let err = service.delete(1).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("País não existe"));
    }

    #[tokio::test]
    async fn list_all_returns_seeded_countries() {
        let service = seeded_service().await;
        assert_eq!(service.list_all().await.len(), 2);
    }

    #[tokio::test]
    async fn list_all_tolerates_empty_store() {
        let service = service().await;
        assert!(service.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_returns_record() {
        let service = seeded_service().await;
        let country = service.find_by_id(3).await.unwrap();
        assert_eq!(country.id, 3);
        assert_eq!(country.name, "Brasil");
    }

    #[tokio::test]
    async fn find_by_id_missing_fails() {
        let service = seeded_service().await;
        let err = service.find_by_id(10).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("País não existe"));
    }

    #[tokio::test]
    async fn find_by_name_ignores_case() {
        let service = seeded_service().await;
        assert_eq!(service.find_by_name_ignore_case("Brasil").await.len(), 1);
        assert_eq!(service.find_by_name_ignore_case("BRASIL").await.len(), 1);
        assert_eq!(service.find_by_name_ignore_case("BrAsIl").await.len(), 1);
        assert!(service.find_by_name_ignore_case("Chile").await.is_empty());
    }
}
