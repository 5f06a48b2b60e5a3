use crate::flatten::ActivityRecord;
use crate::models::{Activity, ActivityTypeTotal, DailyEntry};
use std::collections::{BTreeMap, HashMap, HashSet};

struct TypeGroup<'a> {
    kind: &'a str,
    total_hours: f64,
    member_ids: HashSet<&'a str>,
}

/// Hours and distinct contributing members per activity type, busiest first.
/// Types with equal hours keep the order they were first seen in.
pub fn activity_type_totals(records: &[ActivityRecord<'_>]) -> Vec<ActivityTypeTotal> {
    let mut groups: Vec<TypeGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.kind()).or_insert_with(|| {
            groups.push(TypeGroup {
                kind: record.kind(),
                total_hours: 0.0,
                member_ids: HashSet::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.total_hours += record.hours();
        group.member_ids.insert(record.member_id());
    }

    let mut totals: Vec<ActivityTypeTotal> = groups
        .into_iter()
        .map(|group| ActivityTypeTotal {
            kind: group.kind.to_string(),
            total_hours: group.total_hours,
            members: group.member_ids.len(),
        })
        .collect();
    totals.sort_by(|a, b| b.total_hours.total_cmp(&a.total_hours));
    totals
}

/// Per-day activity types and hours, in ascending date order.
pub fn daily_breakdown<'a, I>(activities: I) -> Vec<DailyEntry>
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut days: BTreeMap<&'a str, DailyEntry> = BTreeMap::new();
    for activity in activities {
        let entry = days
            .entry(activity.date.as_str())
            .or_insert_with(|| DailyEntry {
                date: activity.date.clone(),
                activities: Vec::new(),
                hours: 0.0,
            });
        entry.activities.push(activity.kind.clone());
        entry.hours += activity.hours;
    }
    days.into_values().collect()
}

pub fn total_hours<'a, I>(activities: I) -> f64
where
    I: IntoIterator<Item = &'a Activity>,
{
    activities.into_iter().map(|activity| activity.hours).sum()
}
