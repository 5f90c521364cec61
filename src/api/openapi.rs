//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    accommodations, auth, blogs, destinations, guides, health, investments, itineraries, riders,
    stats, uploads, vehicles,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Serendib Travel API",
        version = "1.0.0",
        description = "Travel content marketing site REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Serendib Travel", email = "dev@serendibtravel.lk")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Blogs
        blogs::list_blogs,
        blogs::get_blog,
        blogs::create_blog,
        blogs::update_blog,
        blogs::delete_blog,
        // Destinations
        destinations::list_destinations,
        destinations::get_destination,
        destinations::create_destination,
        destinations::update_destination,
        destinations::delete_destination,
        // Accommodations
        accommodations::list_accommodations,
        accommodations::get_accommodation,
        accommodations::create_accommodation,
        accommodations::update_accommodation,
        accommodations::delete_accommodation,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Itineraries
        itineraries::list_itineraries,
        itineraries::get_itinerary,
        itineraries::create_itinerary,
        itineraries::update_itinerary,
        itineraries::delete_itinerary,
        // Investments
        investments::list_investments,
        investments::get_investment,
        investments::create_investment,
        investments::update_investment,
        investments::delete_investment,
        // Riders
        riders::list_riders,
        riders::get_rider,
        riders::create_rider,
        riders::update_rider,
        riders::delete_rider,
        // Guides
        guides::list_guides,
        guides::get_guide,
        guides::create_guide,
        guides::update_guide,
        guides::delete_guide,
        // Uploads
        uploads::upload_image,
        uploads::download_document,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::User,
            crate::models::user::Role,
            crate::models::user::RegisterUser,
            crate::models::user::LoginUser,
            auth::UserInfo,
            auth::AuthResponse,
            // Blogs
            crate::models::blog::Blog,
            crate::models::blog::CreateBlog,
            // Destinations
            crate::models::destination::Destination,
            crate::models::destination::CreateDestination,
            crate::models::destination::UpdateDestination,
            // Accommodations
            crate::models::accommodation::Accommodation,
            crate::models::accommodation::CreateAccommodation,
            crate::models::accommodation::UpdateAccommodation,
            // Vehicles
            crate::models::vehicle::Vehicle,
            crate::models::vehicle::CreateVehicle,
            crate::models::vehicle::UpdateVehicle,
            // Itineraries
            crate::models::itinerary::Itinerary,
            crate::models::itinerary::ItineraryDay,
            crate::models::itinerary::CreateItinerary,
            crate::models::itinerary::UpdateItinerary,
            // Investments
            crate::models::investment::Investment,
            crate::models::investment::InvestmentStatus,
            crate::models::investment::CreateInvestment,
            crate::models::investment::UpdateInvestment,
            // Riders
            crate::models::rider::Rider,
            crate::models::rider::RiderType,
            crate::models::rider::CreateRider,
            crate::models::rider::UpdateRider,
            // Guides
            crate::models::guide::Guide,
            crate::models::guide::CreateGuide,
            crate::models::guide::UpdateGuide,
            // Uploads
            uploads::UploadImageResponse,
            // Stats
            crate::services::stats::StatsResponse,
            // Health
            health::HealthResponse,
            // Shared
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "blogs", description = "Blog management"),
        (name = "destinations", description = "Destination management"),
        (name = "accommodations", description = "Accommodation management"),
        (name = "vehicles", description = "Vehicle management"),
        (name = "itineraries", description = "Itinerary management"),
        (name = "investments", description = "Investment management"),
        (name = "riders", description = "Rider management"),
        (name = "guides", description = "Guide management"),
        (name = "uploads", description = "File uploads and retrieval"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
