use crate::aggregate::{activity_type_totals, daily_breakdown, total_hours};
use crate::dates::{DateQuery, InvalidDate};
use crate::flatten::{find_member, flatten_activities, flatten_members};
use crate::models::{Dataset, MemberReportResponse, OverviewResponse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
    #[error("Member with ID {0} does not exist")]
    MemberNotFound(String),
}

pub fn build_overview(data: &Dataset, query: &DateQuery) -> Result<OverviewResponse, ReportError> {
    let (range, date_filter) = query.resolve()?;

    let records = flatten_activities(data, &range);
    let total_teams = data.companies.iter().map(|company| company.teams.len()).sum();

    Ok(OverviewResponse {
        total_companies: data.companies.len(),
        total_teams,
        total_members: flatten_members(data).len(),
        total_activities: records.len(),
        total_hours: total_hours(records.iter().map(|record| record.activity)),
        top_activity_types: activity_type_totals(&records),
        date_filter,
    })
}

pub fn build_member_report(
    data: &Dataset,
    member_id: &str,
    query: &DateQuery,
) -> Result<MemberReportResponse, ReportError> {
    let (range, date_filter) = query.resolve()?;

    let owner = find_member(data, member_id)
        .ok_or_else(|| ReportError::MemberNotFound(member_id.to_string()))?;

    let activities: Vec<_> = owner
        .member
        .activities
        .iter()
        .filter(|activity| range.contains(&activity.date))
        .collect();

    let message = activities.is_empty().then(|| {
        if range.is_bounded() {
            "No activities found for this member in the specified date range".to_string()
        } else {
            "No activities found for this member".to_string()
        }
    });

    Ok(MemberReportResponse {
        member_id: owner.member_id().to_string(),
        name: owner.name().to_string(),
        total_hours: total_hours(activities.iter().copied()),
        daily_breakdown: daily_breakdown(activities),
        message,
        date_filter,
    })
}
