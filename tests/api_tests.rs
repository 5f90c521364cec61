//! API integration tests.
//!
//! These run against a live server with a seeded admin account. Configure
//! the target with SERENDIB_TEST_URL, ADMIN_EMAIL and ADMIN_PASSWORD.

use reqwest::Client;
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("SERENDIB_TEST_URL").unwrap_or_else(|_| "http://localhost:5000/api".to_string())
}

/// Helper to get an authenticated admin token
async fn get_admin_token(client: &Client) -> String {
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@serendibtravel.lk".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let response = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Unique email per test run, to keep registration tests re-runnable
fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}@example.com", prefix, nanos)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let email = unique_email("register");

    let response = client
        .post(format!("{}/auth/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["role"], "user");

    // Registering the same email twice fails
    let response = client
        .post(format!("{}/auth/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Login with the new account
    let response = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong-password"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .get(format!("{}/auth/me", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "admin");
    assert!(body["password"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_write_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/destinations", base_url()))
        .json(&json!({
            "name": "Ella",
            "location": "Badulla",
            "region": "Hill Country"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_non_admin_write_is_forbidden() {
    let client = Client::new();
    let email = unique_email("plain");

    let response = client
        .post(format!("{}/auth/register", base_url()))
        .json(&json!({
            "name": "Plain User",
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("No token").to_string();

    let response = client
        .post(format!("{}/destinations", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Ella",
            "location": "Badulla",
            "region": "Hill Country"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_destination_lifecycle() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    // Create
    let response = client
        .post(format!("{}/destinations", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Ella",
            "location": "Badulla",
            "region": "Hill Country"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["name"], "Ella");
    assert_eq!(created["location"], "Badulla");
    assert_eq!(created["region"], "Hill Country");
    assert_eq!(created["popularityRating"], 3);
    assert!(created["id"].is_number());
    assert!(created["createdAt"].is_string());

    let id = created["id"].as_i64().expect("No destination ID");

    // Fetch returns the identical record
    let response = client
        .get(format!("{}/destinations/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);

    // Delete
    let response = client
        .delete(format!("{}/destinations/{}", base_url(), id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    // Gone
    let response = client
        .get(format!("{}/destinations/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Destination not found");
}

#[tokio::test]
#[ignore]
async fn test_partial_update_leaves_other_fields_unchanged() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .post(format!("{}/accommodations", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Tea Trails Bungalow",
            "location": "Hatton",
            "pricePerNight": 220.0,
            "amenities": ["wifi", "pool"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No accommodation ID");

    // Update only the price
    let response = client
        .put(format!("{}/accommodations/{}", base_url(), id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "pricePerNight": 250.0 }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["pricePerNight"], 250.0);
    assert_eq!(updated["name"], "Tea Trails Bungalow");
    assert_eq!(updated["location"], "Hatton");
    assert_eq!(updated["amenities"], json!(["wifi", "pool"]));

    // Cleanup
    let _ = client
        .delete(format!("{}/accommodations/{}", base_url(), id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_invalid_rider_type_is_rejected() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .post(format!("{}/riders", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Sunil",
            "type": "Bicycle Rider"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_field_is_rejected() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let response = client
        .post(format!("{}/guides", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Hill Country by Rail",
            "description": "Scenic train rides",
            "details": "Kandy to Ella",
            "rating": 5
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    for key in [
        "destinations",
        "vehicles",
        "accommodations",
        "blogs",
        "itineraries",
        "investments",
        "riders",
        "guides",
    ] {
        assert!(body[key].is_number(), "missing count for {}", key);
    }
}

#[tokio::test]
#[ignore]
async fn test_blog_multipart_lifecycle() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    // Tiny valid PNG header is enough; content is not sniffed
    let image_part = reqwest::multipart::Part::bytes(vec![0x89, b'P', b'N', b'G', 0, 0, 0, 0])
        .file_name("cover.png")
        .mime_str("image/png")
        .unwrap();

    let form = reqwest::multipart::Form::new()
        .text("title", "Misty mornings in Nuwara Eliya")
        .text("content", "Pack a raincoat.")
        .text("author", "Amaya")
        .text("categories", "travel")
        .text("categories", "hill-country")
        .text("published", "true")
        .part("image", image_part);

    let response = client
        .post(format!("{}/blogs", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No blog ID");
    assert_eq!(created["categories"], json!(["travel", "hill-country"]));
    assert_eq!(created["published"], true);

    let image_path = created["image"].as_str().expect("No image path").to_string();
    assert!(image_path.starts_with("/uploads/images/"));

    // The stored image is retrievable at its public path
    let server_root = base_url().trim_end_matches("/api").to_string();
    let response = client
        .get(format!("{}{}", server_root, image_path))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Delete removes the record
    let response = client
        .delete(format!("{}/blogs/{}", base_url(), id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/blogs/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_blog_rejects_non_pdf_document() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let bogus = reqwest::multipart::Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name("not-a-pdf.png")
        .mime_str("image/png")
        .unwrap();

    let form = reqwest::multipart::Form::new()
        .text("title", "Doomed post")
        .text("content", "Should never persist")
        .text("author", "Amaya")
        .part("document", bogus);

    let response = client
        .post(format!("{}/blogs", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_upload_image_rejects_pdf() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let pdf = reqwest::multipart::Part::bytes(b"%PDF-1.4".to_vec())
        .file_name("brochure.pdf")
        .mime_str("application/pdf")
        .unwrap();

    let form = reqwest::multipart::Form::new().part("image", pdf);

    let response = client
        .post(format!("{}/upload/image", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_upload_image_succeeds() {
    let client = Client::new();
    let token = get_admin_token(&client).await;

    let image = reqwest::multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .file_name("photo.jpg")
        .mime_str("image/jpeg")
        .unwrap();

    let form = reqwest::multipart::Form::new().part("image", image);

    let response = client
        .post(format!("{}/upload/image", base_url()))
        .header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let url = body["imageUrl"].as_str().expect("No imageUrl");
    assert!(url.starts_with("/uploads/images/"));
}
