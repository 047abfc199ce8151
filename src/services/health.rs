//! Readiness checks

use crate::repository::{Repository, StoreError};

#[derive(Clone)]
pub struct HealthService {
    repository: Repository,
}

impl HealthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}
