//! Repository layer for database operations

pub mod accommodations;
pub mod blogs;
pub mod destinations;
pub mod guides;
pub mod investments;
pub mod itineraries;
pub mod riders;
pub mod users;
pub mod vehicles;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub blogs: blogs::BlogsRepository,
    pub destinations: destinations::DestinationsRepository,
    pub accommodations: accommodations::AccommodationsRepository,
    pub vehicles: vehicles::VehiclesRepository,
    pub itineraries: itineraries::ItinerariesRepository,
    pub investments: investments::InvestmentsRepository,
    pub riders: riders::RidersRepository,
    pub guides: guides::GuidesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            blogs: blogs::BlogsRepository::new(pool.clone()),
            destinations: destinations::DestinationsRepository::new(pool.clone()),
            accommodations: accommodations::AccommodationsRepository::new(pool.clone()),
            vehicles: vehicles::VehiclesRepository::new(pool.clone()),
            itineraries: itineraries::ItinerariesRepository::new(pool.clone()),
            investments: investments::InvestmentsRepository::new(pool.clone()),
            riders: riders::RidersRepository::new(pool.clone()),
            guides: guides::GuidesRepository::new(pool.clone()),
            pool,
        }
    }
}
