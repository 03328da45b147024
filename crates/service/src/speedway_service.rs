use std::sync::Arc;

use tracing::info;

use models::{Country, Speedway};
use store::{query, Query, RecordStore};

use crate::errors::ServiceError;

/// Speedway registry. Strict lookup discipline throughout; the track length
/// must be positive.
pub struct SpeedwayService<S: RecordStore<Speedway>> {
    store: Arc<S>,
}

impl<S: RecordStore<Speedway>> SpeedwayService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn validate(speedway: &Speedway) -> Result<(), ServiceError> {
        if speedway.size <= 0 {
            return Err(ServiceError::integrity("Tamanho da pista inválido"));
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Speedway, ServiceError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ServiceError::not_found(format!("Pista {id} não existe")))
    }

    pub async fn list_all(&self) -> Result<Vec<Speedway>, ServiceError> {
        let speedways = self.store.list().await;
        if speedways.is_empty() {
            return Err(ServiceError::not_found("Nenhuma pista cadastrada"));
        }
        Ok(speedways)
    }

    pub async fn insert(
        &self,
        name: &str,
        size: i32,
        country_id: i32,
    ) -> Result<Speedway, ServiceError> {
        let speedway = Speedway::new(0, name, size, country_id);
        Self::validate(&speedway)?;
        let speedway = self.store.save(speedway).await;
        info!(speedway_id = speedway.id, "speedway_created");
        Ok(speedway)
    }

    pub async fn update(&self, speedway: Speedway) -> Result<Speedway, ServiceError> {
        self.find_by_id(speedway.id).await?;
        Self::validate(&speedway)?;
        Ok(self.store.save(speedway).await)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        self.store.delete(id).await;
        Ok(())
    }

    pub async fn find_by_name_starts_with_ignore_case(
        &self,
        prefix: &str,
    ) -> Result<Vec<Speedway>, ServiceError> {
        let wanted = prefix.to_string();
        let speedways = self
            .store
            .find(Query::new().filter(move |s: &Speedway| {
                query::starts_with_ignore_case(&s.name, &wanted)
            }))
            .await;
        if speedways.is_empty() {
            return Err(ServiceError::not_found("Nenhuma pista cadastrada com esse nome"));
        }
        Ok(speedways)
    }

    /// Tracks whose length falls in the inclusive range.
    pub async fn find_by_size_between(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<Speedway>, ServiceError> {
        let speedways = self
            .store
            .find(Query::new().filter(move |s: &Speedway| query::between(s.size, start, end)))
            .await;
        if speedways.is_empty() {
            return Err(ServiceError::not_found(
                "Nenhuma pista cadastrada com essas medidas",
            ));
        }
        Ok(speedways)
    }

    pub async fn find_by_country_order_by_size_desc(
        &self,
        country: &Country,
    ) -> Result<Vec<Speedway>, ServiceError> {
        let country_id = country.id;
        let speedways = self
            .store
            .find(
                Query::new()
                    .filter(move |s: &Speedway| s.country_id == country_id)
                    .order_by_desc(|s: &Speedway| s.size),
            )
            .await;
        if speedways.is_empty() {
            return Err(ServiceError::not_found(format!(
                "Nenhuma pista cadastrada no país: {}",
                country.name
            )));
        }
        Ok(speedways)
    }
}
