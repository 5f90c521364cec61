//! Statistics service

use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, repository::Repository};

/// Per-entity record counts for the admin dashboard
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub destinations: i64,
    pub vehicles: i64,
    pub accommodations: i64,
    pub blogs: i64,
    pub itineraries: i64,
    pub investments: i64,
    pub riders: i64,
    pub guides: i64,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Count every content type; the queries run concurrently
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let (destinations, vehicles, accommodations, blogs, itineraries, investments, riders, guides) =
            tokio::try_join!(
                self.repository.destinations.count(),
                self.repository.vehicles.count(),
                self.repository.accommodations.count(),
                self.repository.blogs.count(),
                self.repository.itineraries.count(),
                self.repository.investments.count(),
                self.repository.riders.count(),
                self.repository.guides.count(),
            )?;

        Ok(StatsResponse {
            destinations,
            vehicles,
            accommodations,
            blogs,
            itineraries,
            investments,
            riders,
            guides,
        })
    }
}
