use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use productivity_dashboard::data::sample_dataset;
use productivity_dashboard::models::{
    ErrorBody, HealthResponse, IndexResponse, MemberReportResponse, OverviewResponse,
    RouteNotFoundBody,
};
use productivity_dashboard::{router, AppState};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    send(Method::GET, uri).await
}

async fn send(method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let app = router(AppState::new(sample_dataset()));
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json<T: DeserializeOwned>(uri: &str, expected: StatusCode) -> T {
    let (status, bytes) = get(uri).await;
    assert_eq!(status, expected, "unexpected status for {uri}");
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn index_lists_endpoints_and_members() {
    let index: IndexResponse = get_json("/", StatusCode::OK).await;
    assert_eq!(index.message, "B2B SaaS Productivity Dashboard API");
    assert_eq!(index.endpoints.len(), 4);
    assert!(index.endpoints.contains_key("GET /report/member/:memberId"));

    let members: Vec<_> = index
        .available_members
        .iter()
        .map(|m| (m.id.as_str(), m.name.as_str(), m.team.as_str()))
        .collect();
    assert_eq!(
        members,
        [
            ("mem_1", "Alice", "Engineering"),
            ("mem_2", "Bob", "Engineering"),
            ("mem_3", "Carol", "Design"),
            ("mem_4", "Dan", "Marketing"),
            ("mem_5", "Eve", "Marketing"),
        ]
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let health: HealthResponse = get_json("/health", StatusCode::OK).await;
    assert_eq!(health.status, "OK");
    assert!(health.timestamp.ends_with('Z'));
    assert!(health.uptime >= 0.0);
}

#[tokio::test]
async fn overview_totals() {
    let overview: OverviewResponse = get_json("/report/overview", StatusCode::OK).await;
    assert_eq!(overview.total_companies, 2);
    assert_eq!(overview.total_teams, 3);
    assert_eq!(overview.total_members, 5);
    assert_eq!(overview.total_activities, 11);
    assert_eq!(overview.total_hours, 34.0);

    let by_type: f64 = overview.top_activity_types.iter().map(|t| t.total_hours).sum();
    assert_eq!(by_type, overview.total_hours);
}

#[tokio::test]
async fn overview_json_shape() {
    let (status, bytes) = get("/report/overview?startDate=2024-03-01&endDate=2024-03-01").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["totalActivities"], 4);
    assert_eq!(value["totalHours"].as_f64(), Some(18.0));
    assert_eq!(value["topActivityTypes"][0]["type"], "coding");
    assert_eq!(value["topActivityTypes"][0]["members"], 2);
    assert_eq!(value["dateFilter"]["startDate"], "2024-03-01");
    assert_eq!(value["dateFilter"]["endDate"], "2024-03-01");
}

#[tokio::test]
async fn overview_omits_filter_when_unbounded() {
    let (_, bytes) = get("/report/overview").await;
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value.get("dateFilter").is_none());

    let (_, bytes) = get("/report/overview?endDate=2024-03-02").await;
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value["dateFilter"].get("startDate").is_none());
    assert_eq!(value["dateFilter"]["endDate"], "2024-03-02");
}

#[tokio::test]
async fn overview_rejects_invalid_dates() {
    let body: ErrorBody =
        get_json("/report/overview?startDate=bad-date", StatusCode::BAD_REQUEST).await;
    assert_eq!(body.error, "Invalid date format");
    assert_eq!(body.message, "startDate must be in YYYY-MM-DD format");

    let body: ErrorBody = get_json(
        "/report/overview?startDate=2024-03-01&endDate=2024-03-01T10:00:00Z",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body.message, "endDate must be in YYYY-MM-DD format");
}

#[tokio::test]
async fn member_report_for_alice() {
    let report: MemberReportResponse = get_json("/report/member/mem_1", StatusCode::OK).await;
    assert_eq!(report.member_id, "mem_1");
    assert_eq!(report.name, "Alice");
    assert_eq!(report.total_hours, 8.0);

    let dates: Vec<_> = report.daily_breakdown.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, ["2024-03-01", "2024-03-02", "2024-03-03"]);
    let day_sum: f64 = report.daily_breakdown.iter().map(|d| d.hours).sum();
    assert_eq!(day_sum, report.total_hours);
    assert!(report.message.is_none());
}

#[tokio::test]
async fn member_report_with_empty_range() {
    let (status, bytes) = get("/report/member/mem_3?startDate=2024-04-01").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["totalHours"].as_f64(), Some(0.0));
    assert_eq!(value["dailyBreakdown"], serde_json::json!([]));
    assert_eq!(
        value["message"],
        "No activities found for this member in the specified date range"
    );
    assert_eq!(value["dateFilter"], serde_json::json!({ "startDate": "2024-04-01" }));
}

#[tokio::test]
async fn member_report_unknown_member() {
    let body: ErrorBody = get_json("/report/member/does_not_exist", StatusCode::NOT_FOUND).await;
    assert_eq!(body.error, "Member not found");
    assert_eq!(body.message, "Member with ID does_not_exist does not exist");
}

#[tokio::test]
async fn member_report_validates_dates() {
    let body: ErrorBody =
        get_json("/report/member/mem_1?endDate=2024-3-3", StatusCode::BAD_REQUEST).await;
    assert_eq!(body.message, "endDate must be in YYYY-MM-DD format");
}

#[tokio::test]
async fn unknown_route_lists_endpoints() {
    let body: RouteNotFoundBody = get_json("/reports?x=1", StatusCode::NOT_FOUND).await;
    assert_eq!(body.error, "Not Found");
    assert_eq!(body.message, "Route GET /reports?x=1 not found");
    assert_eq!(
        body.available_endpoints,
        ["GET /", "GET /health", "GET /report/overview", "GET /report/member/:memberId"]
    );
}

#[tokio::test]
async fn non_get_method_on_known_path_is_not_found() {
    for uri in ["/report/overview", "/health", "/report/member/mem_1", "/"] {
        let (status, bytes) = send(Method::POST, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "unexpected status for POST {uri}");
        let body: RouteNotFoundBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, format!("Route POST {uri} not found"));
        assert_eq!(body.available_endpoints.len(), 4);
    }
}

#[tokio::test]
async fn repeated_date_param_is_a_json_validation_error() {
    let body: ErrorBody = get_json(
        "/report/overview?startDate=2024-03-01&startDate=2024-03-02",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body.error, "Invalid date format");
    assert_eq!(body.message, "startDate must be in YYYY-MM-DD format");

    let body: ErrorBody = get_json(
        "/report/member/mem_1?endDate=2024-03-01&endDate=2024-03-03",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body.message, "endDate must be in YYYY-MM-DD format");
}

#[tokio::test]
async fn unrelated_query_params_are_ignored() {
    let overview: OverviewResponse =
        get_json("/report/overview?page=2&page=3", StatusCode::OK).await;
    assert_eq!(overview.total_activities, 11);
}

#[tokio::test]
async fn whole_hour_totals_are_json_integers() {
    let (_, bytes) = get("/report/overview").await;
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value["totalHours"].is_i64());
    assert_eq!(value["totalHours"], 34);
    assert_eq!(value["topActivityTypes"][0]["totalHours"], 11);

    let (_, bytes) = get("/report/member/mem_1").await;
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains(r#""totalHours":8,"#), "body was {text}");
    assert!(text.contains(r#""hours":5}"#), "body was {text}");
}
