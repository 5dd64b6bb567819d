//! AdminClient against an in-process mock backend.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gsadmin_client::{AdminClient, ClientConfig, ClientError, ReportQuery};
use gsadmin_types::{ReportId, ReportStatus, StaffId};
use gsadmin_verification::{InFlightRegistry, ResolutionVerifier, ReviewSession};

const TOKEN: &str = "tok-admin";

#[derive(Clone, Default)]
struct Backend {
    /// `METHOD path` of every admin request, plus bodies where interesting.
    hits: Arc<Mutex<Vec<String>>>,
    fail_stats: bool,
    fail_trends: bool,
    fail_resolve: bool,
}

type Reply = (StatusCode, Json<Value>);

fn ok(v: Value) -> Reply {
    (StatusCode::OK, Json(v))
}

fn authorized(headers: &HeaderMap) -> Result<(), Reply> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get("authorization").and_then(|h| h.to_str().ok()) {
        Some(h) if h == expected => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Not authorized"})),
        )),
    }
}

fn report_json(id: &str, resolved_lng: f64) -> Value {
    json!({
        "_id": id,
        "title": "Overflowing bin",
        "details": "Not collected",
        "status": "resolved",
        "location": {"type": "Point", "coordinates": [-74.0060, 40.7128]},
        "resolvedLocation": {"type": "Point", "coordinates": [resolved_lng, 40.7128]}
    })
}

async fn login(Json(body): Json<Value>) -> Reply {
    assert_eq!(body["client"], "web");
    let role = match body["email"].as_str() {
        Some("admin@example.org") => "admin",
        Some("sup@example.org") => "supervisor",
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Invalid credentials"})),
            )
        }
    };
    ok(json!({
        "success": true,
        "token": TOKEN,
        "user": {"_id": "a1", "username": "root", "email": body["email"], "role": role}
    }))
}

async fn logout() -> Reply {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({"message": "down"})),
    )
}

async fn reports(
    State(b): State<Backend>,
    headers: HeaderMap,
    Query(q): Query<HashMap<String, String>>,
) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    let mut keys: Vec<_> = q.iter().map(|(k, v)| format!("{k}={v}")).collect();
    keys.sort();
    b.hits.lock().unwrap().push(format!("GET /reports?{}", keys.join("&")));
    ok(json!({
        "reports": [report_json("r1", -74.0060)],
        "currentPage": q.get("page").and_then(|p| p.parse::<u32>().ok()).unwrap_or(1),
        "totalPages": 4,
        "totalReports": 31
    }))
}

async fn report(headers: HeaderMap, Path(id): Path<String>) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    match id.as_str() {
        "near" => ok(json!({"report": report_json("near", -74.0060)})),
        "far" => ok(json!({"report": report_json("far", -74.0160)})),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Report not found"})),
        ),
    }
}

async fn permanent_resolve(
    State(b): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    b.hits.lock().unwrap().push(format!("PATCH /reports/{id}/permanent-resolved"));
    if b.fail_resolve {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "database unavailable"})),
        );
    }
    ok(json!({"success": true, "distance": 0.0}))
}

async fn reject(
    State(b): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    let reason = body["reason"].as_str().unwrap_or_default();
    b.hits.lock().unwrap().push(format!("POST /reports/{id}/reject {reason}"));
    ok(json!({"success": true, "message": "Report rejected"}))
}

async fn assign(State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    b.hits.lock().unwrap().push(format!(
        "POST /reports/assign-to-supervisor {} {} {}",
        body["supervisorId"], body["reportIds"], body["assignmentMessage"]
    ));
    ok(json!({"message": "2 reports assigned"}))
}

async fn counts(headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    ok(json!({"counts": {"total": 6, "pending": 1, "inProgress": 2, "resolved": 3}}))
}

async fn stats(State(b): State<Backend>, headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    if b.fail_stats {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    }
    ok(json!({"stats": {"totalReports": 6, "totalUsers": 10, "resolutionRate": 50.0}}))
}

async fn chart(headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    ok(json!({"data": [{"date": "2024-03-01", "count": 2}]}))
}

async fn distribution(headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    ok(json!({"distribution": [{"status": "pending", "count": 1}, {"status": "resolved", "count": 3}]}))
}

async fn performance(headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    ok(json!({"performanceData": [{"name": "sara", "resolved": 4}]}))
}

async fn attendance_trends(headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    ok(json!({"attendanceTrends": []}))
}

async fn report_trends(State(b): State<Backend>, headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    if b.fail_trends {
        return (StatusCode::BAD_GATEWAY, Json(json!({"message": "upstream"})));
    }
    ok(json!({"reportTrends": [{"date": "2024-03-01", "resolved": 1}]}))
}

async fn workers(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    assert_eq!(q.get("search").map(String::as_str), Some("north"));
    ok(json!({"workers": [
        {"_id": "w1", "name": "Ali", "phone": "03001234567", "area": "North",
         "supervisor": {"_id": "s1", "username": "sara"}}
    ], "totalPages": 1}))
}

async fn create_worker(State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    b.hits.lock().unwrap().push(format!("POST /workers {}", body["supervisorId"]));
    let mut worker = body.clone();
    worker["_id"] = json!("w9");
    (StatusCode::CREATED, Json(json!({"worker": worker})))
}

async fn create_supervisor(State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    b.hits.lock().unwrap().push(format!("POST /supervisors {}", body["username"]));
    (StatusCode::CREATED, Json(Value::Null))
}

async fn update_worker(
    State(b): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> axum::response::Response {
    use axum::response::IntoResponse;
    if let Err(e) = authorized(&headers) {
        return e.into_response();
    }
    b.hits.lock().unwrap().push(format!("PUT /workers/{id}"));
    StatusCode::NO_CONTENT.into_response()
}

async fn supervisors(headers: HeaderMap) -> Reply {
    if let Err(e) = authorized(&headers) {
        return e;
    }
    ok(json!({"supervisors": [
        {"_id": "s1", "username": "sara", "email": "sara@example.org",
         "workersCount": 3, "permanentResolvedReports": 7, "performance": "Excellent"}
    ]}))
}

async fn spawn(backend: Backend) -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/admin/logout", post(logout))
        .route("/api/admin/reports", get(reports))
        .route("/api/admin/reports/assign-to-supervisor", post(assign))
        .route("/api/admin/reports/:id", get(report))
        .route("/api/admin/reports/:id/permanent-resolved", patch(permanent_resolve))
        .route("/api/admin/reports/:id/reject", post(reject))
        .route("/api/admin/report-status-counts", get(counts))
        .route("/api/admin/stats", get(stats))
        .route("/api/admin/reports-overview", get(chart))
        .route("/api/admin/user-activity", get(chart))
        .route("/api/admin/analytics/report-distribution", get(distribution))
        .route("/api/admin/analytics/supervisor-performance", get(performance))
        .route("/api/admin/analytics/worker-attendance", get(attendance_trends))
        .route("/api/admin/analytics/report-trends", get(report_trends))
        .route("/api/admin/workers", get(workers).post(create_worker))
        .route("/api/admin/workers/:id", axum::routing::put(update_worker))
        .route("/api/admin/supervisors", get(supervisors).post(create_supervisor))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(api_base: String) -> AdminClient {
    AdminClient::new(&ClientConfig {
        api_base,
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap()
}

async fn signed_in(backend: Backend) -> AdminClient {
    let mut c = client(spawn(backend).await);
    c.login("admin@example.org", "secret").await.unwrap();
    c
}

#[tokio::test]
async fn admin_login_creates_session() {
    let mut c = client(spawn(Backend::default()).await);
    let session = c.login("admin@example.org", "secret").await.unwrap();
    assert_eq!(session.token, TOKEN);
    assert!(session.user.is_admin());
    assert_eq!(c.session().unwrap().user.username, "root");
}

#[tokio::test]
async fn non_admin_login_is_refused() {
    let mut c = client(spawn(Backend::default()).await);
    let err = c.login("sup@example.org", "secret").await.unwrap_err();
    assert!(matches!(err, ClientError::NotAdmin(_)));
    assert!(c.session().is_none());
}

#[tokio::test]
async fn bad_credentials_surface_backend_message() {
    let mut c = client(spawn(Backend::default()).await);
    match c.login("who@example.org", "nope").await.unwrap_err() {
        ClientError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn requests_without_session_never_leave_the_client() {
    let c = client("http://127.0.0.1:9".into());
    assert!(matches!(
        c.supervisors().await,
        Err(ClientError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn logout_clears_session_even_if_backend_fails() {
    let mut c = signed_in(Backend::default()).await;
    c.logout().await;
    assert!(c.session().is_none());
}

#[tokio::test]
async fn report_listing_sends_filters() {
    let backend = Backend::default();
    let c = signed_in(backend.clone()).await;
    let page = c
        .reports(&ReportQuery {
            status: Some(ReportStatus::Resolved),
            page: 2,
            limit: 10,
            search: Some("bin".into()),
        })
        .await
        .unwrap();
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.reports[0].status, ReportStatus::Resolved);
    assert_eq!(
        backend.hits.lock().unwrap().as_slice(),
        ["GET /reports?limit=10&page=2&search=bin&status=resolved"]
    );
}

#[tokio::test]
async fn unknown_report_is_not_found() {
    let c = signed_in(Backend::default()).await;
    let err = c.report(&ReportId::new("missing").unwrap()).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn review_near_report_is_permanently_resolved() {
    let backend = Backend::default();
    let c = signed_in(backend.clone()).await;
    let report = c.report(&ReportId::new("near").unwrap()).await.unwrap();

    let mut review =
        ReviewSession::open(&report, ResolutionVerifier::default(), InFlightRegistry::new()).unwrap();
    assert!(review.verify().unwrap().within_threshold);
    review.approve(&c).await.unwrap();

    assert_eq!(review.status(), ReportStatus::PermanentResolved);
    assert_eq!(
        backend.hits.lock().unwrap().as_slice(),
        ["PATCH /reports/near/permanent-resolved"]
    );
}

#[tokio::test]
async fn review_far_report_is_rejected_with_reason() {
    let backend = Backend::default();
    let c = signed_in(backend.clone()).await;
    let report = c.report(&ReportId::new("far").unwrap()).await.unwrap();

    let mut review =
        ReviewSession::open(&report, ResolutionVerifier::default(), InFlightRegistry::new()).unwrap();
    let result = review.verify().unwrap();
    assert!(result.distance_meters > 800.0);
    assert!(review.approve(&c).await.is_err());
    assert!(review.reject(&c, "   ").await.is_err());
    review.reject(&c, " Photo from another street ").await.unwrap();

    assert_eq!(review.status(), ReportStatus::Rejected);
    assert_eq!(
        backend.hits.lock().unwrap().as_slice(),
        ["POST /reports/far/reject Photo from another street"]
    );
}

#[tokio::test]
async fn server_error_on_resolve_is_retryable() {
    let backend = Backend {
        fail_resolve: true,
        ..Default::default()
    };
    let c = signed_in(backend).await;
    let report = c.report(&ReportId::new("near").unwrap()).await.unwrap();
    let mut review =
        ReviewSession::open(&report, ResolutionVerifier::default(), InFlightRegistry::new()).unwrap();
    review.verify().unwrap();

    let err = review.approve(&c).await.unwrap_err();
    assert!(err.is_retryable());
    assert!(err.to_string().contains("database unavailable"));
    assert_eq!(review.status(), ReportStatus::Resolved);
}

#[tokio::test]
async fn assignment_requires_reports() {
    let backend = Backend::default();
    let c = signed_in(backend.clone()).await;
    let sup = StaffId::new("s1").unwrap();

    assert!(matches!(
        c.assign_reports(&sup, &[], "go").await,
        Err(ClientError::Validation(_))
    ));
    let ids = [ReportId::new("r1").unwrap(), ReportId::new("r2").unwrap()];
    let ack = c.assign_reports(&sup, &ids, "Please handle").await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("2 reports assigned"));
    assert_eq!(
        backend.hits.lock().unwrap().as_slice(),
        [r#"POST /reports/assign-to-supervisor "s1" ["r1","r2"] "Please handle""#]
    );
}

#[tokio::test]
async fn dashboard_falls_back_when_stats_fail() {
    let backend = Backend {
        fail_stats: true,
        ..Default::default()
    };
    let c = signed_in(backend).await;
    let dash = c.dashboard().await.unwrap();
    assert_eq!(dash.stats.total_reports, 0);
    assert_eq!(dash.counts.total, 6);
    assert_eq!(dash.counts.out_of_scope, 0);
    assert_eq!(dash.reports_overview.len(), 1);
    assert_eq!(dash.user_activity.len(), 1);
}

#[tokio::test]
async fn analytics_bundle_is_all_or_nothing() {
    let c = signed_in(Backend::default()).await;
    let bundle = c.analytics().await.unwrap();
    assert_eq!(bundle.report_distribution.len(), 2);
    assert_eq!(bundle.supervisor_performance.len(), 1);
    assert!(bundle.attendance_trends.is_empty());
    assert_eq!(bundle.report_trends.len(), 1);

    let c = signed_in(Backend {
        fail_trends: true,
        ..Default::default()
    })
    .await;
    let err = c.analytics().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 502, .. }));
}

#[tokio::test]
async fn workers_and_supervisors() {
    let backend = Backend::default();
    let c = signed_in(backend.clone()).await;

    let page = c.workers(1, 20, Some(" north ")).await.unwrap();
    assert_eq!(page.workers.len(), 1);
    assert_eq!(page.workers[0].supervisor.as_ref().unwrap().username, "sara");

    let sups = c.supervisors().await.unwrap();
    assert_eq!(sups[0].permanent_resolved_reports, 7);

    let draft = gsadmin_types::WorkerDraft {
        name: "Ali".into(),
        phone: "03001234567".into(),
        area: "North".into(),
        supervisor_id: Some(StaffId::new("s1").unwrap()),
    };
    let created = c.create_worker(&draft).await.unwrap().unwrap();
    assert_eq!(created.id.as_str(), "w9");

    let invalid = gsadmin_types::WorkerDraft {
        phone: "123".into(),
        ..draft
    };
    assert!(matches!(
        c.create_worker(&invalid).await,
        Err(ClientError::Types(_))
    ));
    assert_eq!(
        backend.hits.lock().unwrap().as_slice(),
        [r#"POST /workers "s1""#]
    );
}

#[tokio::test]
async fn empty_success_bodies_are_not_errors() {
    let backend = Backend::default();
    let c = signed_in(backend.clone()).await;

    let draft = gsadmin_types::SupervisorDraft {
        username: "omar".into(),
        email: "omar@example.org".into(),
        password: "secret".into(),
    };
    assert!(c.create_supervisor(&draft).await.unwrap().is_none());

    let worker = gsadmin_types::WorkerDraft {
        name: "Ali".into(),
        phone: "03001234567".into(),
        area: "North".into(),
        supervisor_id: None,
    };
    let id = StaffId::new("w1").unwrap();
    assert!(c.update_worker(&id, &worker).await.unwrap().is_none());

    assert_eq!(
        backend.hits.lock().unwrap().as_slice(),
        [r#"POST /supervisors "omar""#, "PUT /workers/w1"]
    );
}

#[tokio::test]
async fn refused_connection_is_retryable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut c = client(format!("http://{addr}"));
    let err = c.login("admin@example.org", "secret").await.unwrap_err();
    assert!(matches!(err, ClientError::Connect(_)), "{err:?}");
    assert!(err.is_retryable());
}
