//! Business logic services

pub mod auth;
pub mod stats;
pub mod uploads;

use crate::{
    config::{AuthConfig, UploadsConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub auth: auth::AuthService,
    pub uploads: uploads::UploadService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        uploads_config: UploadsConfig,
    ) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            uploads: uploads::UploadService::new(&uploads_config.dir),
            stats: stats::StatsService::new(repository.clone()),
            repository,
        }
    }
}
