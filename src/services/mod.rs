//! Business logic services

pub mod health;
pub mod lenders;
pub mod reports;

use chrono::{DateTime, FixedOffset, Local};

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub reports: reports::ReportsService,
    pub lenders: lenders::LendersService,
    pub health: health::HealthService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            reports: reports::ReportsService::new(repository.clone()),
            lenders: lenders::LendersService::new(repository.clone()),
            health: health::HealthService::new(repository),
        }
    }
}

/// Wall-clock "now" in the server's local offset
pub(crate) fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
