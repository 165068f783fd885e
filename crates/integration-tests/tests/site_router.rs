//! Router-level scenarios.
//!
//! Drives the site's real router (handlers, session layer, auth extractor)
//! against in-memory collaborators, one request at a time. Sessions are
//! carried between requests by replaying the cookie the login response set.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use secrecy::SecretString;
use tower::ServiceExt;
use url::Url;

use classic_cuts_core::{AppointmentFilter, AppointmentStatus, Email, NewAppointment};
use classic_cuts_site::config::{IdentityConfig, SiteConfig, StoreConfig};
use classic_cuts_site::identity::{IdentityService, MemoryIdentity};
use classic_cuts_site::middleware::create_session_layer;
use classic_cuts_site::repos::{AppointmentRepository, admins};
use classic_cuts_site::routes;
use classic_cuts_site::services::auth::NOT_ADMIN_MESSAGE;
use classic_cuts_site::state::AppState;
use classic_cuts_site::store::{MemoryStore, RecordStore};

fn test_config() -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        base_url: "http://localhost:3000".to_string(),
        store: StoreConfig {
            api_url: Url::parse("http://localhost:8080").unwrap(),
            api_key: SecretString::from("test_store_key"),
        },
        identity: IdentityConfig {
            api_url: Url::parse("http://localhost:8081").unwrap(),
            api_key: SecretString::from("test_identity_key"),
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// The full site router over in-memory collaborators, plus direct handles
/// to them for setup and assertions.
struct Site {
    app: Router,
    store: RecordStore,
    identity: MemoryIdentity,
}

impl Site {
    fn new() -> Self {
        let store = RecordStore::Memory(MemoryStore::new());
        let identity = MemoryIdentity::new();

        let config = test_config();
        let session_layer = create_session_layer(&config);
        let state = AppState::with_collaborators(
            config,
            store.clone(),
            IdentityService::Memory(identity.clone()),
        );

        let app = Router::new()
            .merge(routes::routes())
            .layer(session_layer)
            .with_state(state);

        Self {
            app,
            store,
            identity,
        }
    }

    async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Create an identity account and return its UID.
    async fn account(&self, email: &str, password: &str) -> String {
        let email = Email::parse(email).unwrap();
        let identity = self.identity.create_account(&email, password).await.unwrap();
        identity.uid.as_str().to_owned()
    }

    async fn register_admin(&self, uid: &str) {
        self.store
            .set(admins::COLLECTION, uid, &serde_json::json!({}))
            .await
            .unwrap();
    }

    /// Log in through the router and return the session cookie to replay.
    async fn login(&self, email: &str, password: &str) -> String {
        let body = format!("admin-email={email}&admin-password={password}");
        let response = self.request(form_post("/admin/login", &body)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/admin");

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login must establish a session")
            .to_str()
            .unwrap();
        cookie.split(';').next().unwrap().to_owned()
    }

    fn repo(&self) -> AppointmentRepository<'_> {
        AppointmentRepository::new(&self.store)
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn form_post_with_cookie(uri: &str, body: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}

// =============================================================================
// Booking
// =============================================================================

#[tokio::test]
async fn test_blank_booking_rerenders_message_without_a_write() {
    let site = Site::new();

    let response = site
        .request(form_post(
            "/book",
            "appoint-date=&appoint-time=&customer-name=&customer-phone=",
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("सभी फ़ील्ड भरें।"));

    let listed = site.repo().list(&AppointmentFilter::all()).await.unwrap();
    assert!(listed.is_empty(), "rejected submissions must not be stored");
}

#[tokio::test]
async fn test_booking_post_creates_a_booked_record() {
    let site = Site::new();

    let response = site
        .request(form_post(
            "/book",
            "appoint-date=2026-09-01&appoint-time=10%3A00&customer-name=Ravi&customer-phone=9990001111",
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Appointment booked successfully!"));

    let listed = site.repo().list(&AppointmentFilter::all()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Ravi");
    assert_eq!(listed[0].time, "10:00");
    assert_eq!(listed[0].status, AppointmentStatus::Booked);
}

// =============================================================================
// Panel access
// =============================================================================

#[tokio::test]
async fn test_anonymous_panel_request_redirects_to_login() {
    let site = Site::new();

    let response = site.request(get("/admin")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_anonymous_row_action_is_unauthorized() {
    let site = Site::new();

    let response = site
        .request(form_post("/admin/appointments/abc123/status", "status=Arrived"))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = site
        .request(form_post("/admin/appointments/abc123/delete", ""))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_login_grants_panel_session() {
    let site = Site::new();
    let uid = site.account("owner@shop.example", "hunter2!").await;
    site.register_admin(&uid).await;

    let cookie = site.login("owner@shop.example", "hunter2!").await;

    let response = site.request(get_with_cookie("/admin", &cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("owner@shop.example"));
    assert!(body.contains("appointments-table-body"));
}

#[tokio::test]
async fn test_non_admin_login_renders_registry_message_and_signs_out() {
    let site = Site::new();
    let uid = site.account("barber@shop.example", "hunter2!").await;

    let response = site
        .request(form_post(
            "/admin/login",
            "admin-email=barber@shop.example&admin-password=hunter2!",
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(NOT_ADMIN_MESSAGE));

    let uid = classic_cuts_core::AdminUid::new(uid);
    assert!(site.identity.was_signed_out(&uid).await);
}

#[tokio::test]
async fn test_logout_drops_the_panel_session() {
    let site = Site::new();
    let uid = site.account("owner@shop.example", "hunter2!").await;
    site.register_admin(&uid).await;
    let cookie = site.login("owner@shop.example", "hunter2!").await;

    let response = site
        .request(form_post_with_cookie("/admin/logout", "", &cookie))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    let response = site.request(get_with_cookie("/admin", &cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

// =============================================================================
// Row actions
// =============================================================================

#[tokio::test]
async fn test_row_actions_update_and_delete_through_the_panel() {
    let site = Site::new();
    let uid = site.account("owner@shop.example", "hunter2!").await;
    site.register_admin(&uid).await;
    let cookie = site.login("owner@shop.example", "hunter2!").await;

    let booking = NewAppointment::new("2026-09-01", "10:00", "Ravi", "9990001111").unwrap();
    let id = site.repo().create(&booking).await.unwrap();

    let response = site
        .request(form_post_with_cookie(
            &format!("/admin/appointments/{}/status", id.as_str()),
            "status=Arrived",
            &cookie,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = site.repo().list(&AppointmentFilter::all()).await.unwrap();
    assert_eq!(listed[0].status, AppointmentStatus::Arrived);

    let response = site
        .request(form_post_with_cookie(
            &format!("/admin/appointments/{}/delete", id.as_str()),
            "",
            &cookie,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = site.repo().list(&AppointmentFilter::all()).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_table_fragment_filters_and_updates_the_count() {
    let site = Site::new();
    let uid = site.account("owner@shop.example", "hunter2!").await;
    site.register_admin(&uid).await;
    let cookie = site.login("owner@shop.example", "hunter2!").await;

    let repo = site.repo();
    let first = NewAppointment::new("2026-09-01", "10:00", "Ravi", "9990001111").unwrap();
    let second = NewAppointment::new("2026-09-01", "11:00", "Meera", "9990002222").unwrap();
    let id = repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();
    repo.set_status(&id, AppointmentStatus::Arrived).await.unwrap();

    let response = site
        .request(get_with_cookie(
            "/admin/appointments?filter-status=Arrived",
            &cookie,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Ravi"));
    assert!(!body.contains("Meera"));
    assert!(body.contains(r#"id="count-display""#));
    assert!(body.contains(">1<"));
}
