use crate::dates::DateQuery;
use crate::errors::AppError;
use crate::flatten::flatten_members;
use crate::models::{
    HealthResponse, IndexResponse, MemberReportResponse, MemberSummary, OverviewResponse,
    RouteNotFoundBody,
};
use crate::reports::{build_member_report, build_overview, ReportError};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{Method, StatusCode, Uri},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

pub const ENDPOINTS: [(&str, &str); 4] = [
    ("GET /", "This help message"),
    ("GET /health", "Health check"),
    (
        "GET /report/overview",
        "Summary report across all companies (supports ?startDate&endDate)",
    ),
    (
        "GET /report/member/:memberId",
        "Daily activity log for a member (supports ?startDate&endDate)",
    ),
];

pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    let available_members = flatten_members(&state.data)
        .into_iter()
        .map(|record| MemberSummary {
            id: record.member_id().to_string(),
            name: record.name().to_string(),
            team: record.team_name().to_string(),
        })
        .collect();

    Json(IndexResponse {
        message: "B2B SaaS Productivity Dashboard API".to_string(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(route, description)| (route.to_string(), description.to_string()))
            .collect(),
        available_members,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

/// Raw query pairs, so a repeated key reaches date validation instead of
/// failing deserialization.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

pub async fn overview_report(
    State(state): State<AppState>,
    pairs: QueryPairs,
) -> Result<Json<OverviewResponse>, AppError> {
    let query = date_query(pairs)?;
    let overview = build_overview(&state.data, &query).inspect_err(log_report_error)?;
    Ok(Json(overview))
}

pub async fn member_report(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    pairs: QueryPairs,
) -> Result<Json<MemberReportResponse>, AppError> {
    let query = date_query(pairs)?;
    let report =
        build_member_report(&state.data, &member_id, &query).inspect_err(log_report_error)?;
    Ok(Json(report))
}

pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<RouteNotFoundBody>) {
    let body = RouteNotFoundBody {
        error: "Not Found".to_string(),
        message: format!("Route {method} {uri} not found"),
        available_endpoints: ENDPOINTS.iter().map(|(route, _)| route.to_string()).collect(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

fn date_query(pairs: QueryPairs) -> Result<DateQuery, AppError> {
    match pairs {
        Ok(Query(pairs)) => Ok(DateQuery::from_pairs(pairs)),
        Err(rejection) => {
            warn!("rejected query string: {rejection}");
            Err(AppError::bad_request("Invalid query string", rejection.body_text()))
        }
    }
}

fn log_report_error(err: &ReportError) {
    match err {
        ReportError::InvalidDate(_) => warn!("rejected report request: {err}"),
        ReportError::MemberNotFound(_) => info!("{err}"),
    }
}
