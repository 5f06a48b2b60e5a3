use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::dates::DateFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hours: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_id: String,
    pub name: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_id: String,
    pub name: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// The whole company → team → member → activity hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Dataset {
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeTotal {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(serialize_with = "serialize_hours")]
    pub total_hours: f64,
    pub members: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: String,
    pub activities: Vec<String>,
    #[serde(serialize_with = "serialize_hours")]
    pub hours: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub total_companies: usize,
    pub total_teams: usize,
    pub total_members: usize,
    pub total_activities: usize,
    #[serde(serialize_with = "serialize_hours")]
    pub total_hours: f64,
    pub top_activity_types: Vec<ActivityTypeTotal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<DateFilter>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberReportResponse {
    pub member_id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_hours")]
    pub total_hours: f64,
    pub daily_breakdown: Vec<DailyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<DateFilter>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: String,
    pub name: String,
    pub team: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
    pub available_members: Vec<MemberSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFoundBody {
    pub error: String,
    pub message: String,
    pub available_endpoints: Vec<String>,
}

/// Whole-hour values are written as JSON integers (`34`, not `34.0`).
fn serialize_hours<S: Serializer>(hours: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;
    if hours.fract() == 0.0 && hours.abs() < EXACT_LIMIT {
        serializer.serialize_i64(*hours as i64)
    } else {
        serializer.serialize_f64(*hours)
    }
}
