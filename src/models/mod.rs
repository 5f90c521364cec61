//! Data models for Serendib

pub mod accommodation;
pub mod blog;
pub mod destination;
pub mod guide;
pub mod investment;
pub mod itinerary;
pub mod rider;
pub mod user;
pub mod vehicle;

// Re-export commonly used types
pub use accommodation::Accommodation;
pub use blog::Blog;
pub use destination::Destination;
pub use guide::Guide;
pub use investment::{Investment, InvestmentStatus};
pub use itinerary::{Itinerary, ItineraryDay};
pub use rider::{Rider, RiderType};
pub use user::{Role, User, UserClaims};
pub use vehicle::Vehicle;
