use crate::dates::DateRange;
use crate::models::{Activity, Company, Dataset, Member, Team};

/// An activity together with the member, team and company that own it.
#[derive(Debug, Clone, Copy)]
pub struct ActivityRecord<'a> {
    pub activity: &'a Activity,
    pub member: &'a Member,
    pub team: &'a Team,
    pub company: &'a Company,
}

impl<'a> ActivityRecord<'a> {
    pub fn date(&self) -> &'a str {
        &self.activity.date
    }

    pub fn kind(&self) -> &'a str {
        &self.activity.kind
    }

    pub fn hours(&self) -> f64 {
        self.activity.hours
    }

    pub fn member_id(&self) -> &'a str {
        &self.member.member_id
    }
}

/// A member together with the team and company that own it.
#[derive(Debug, Clone, Copy)]
pub struct MemberRecord<'a> {
    pub member: &'a Member,
    pub team: &'a Team,
    pub company: &'a Company,
}

impl<'a> MemberRecord<'a> {
    pub fn member_id(&self) -> &'a str {
        &self.member.member_id
    }

    pub fn name(&self) -> &'a str {
        &self.member.name
    }

    pub fn team_id(&self) -> &'a str {
        &self.team.team_id
    }

    pub fn team_name(&self) -> &'a str {
        &self.team.name
    }

    pub fn company_id(&self) -> &'a str {
        &self.company.company_id
    }

    pub fn company_name(&self) -> &'a str {
        &self.company.name
    }
}

/// All members in company → team → member order.
pub fn flatten_members(data: &Dataset) -> Vec<MemberRecord<'_>> {
    data.companies
        .iter()
        .flat_map(|company| {
            company.teams.iter().flat_map(move |team| {
                team.members.iter().map(move |member| MemberRecord {
                    member,
                    team,
                    company,
                })
            })
        })
        .collect()
}

/// Activities inside `range`, in company → team → member → activity order.
pub fn flatten_activities<'a>(data: &'a Dataset, range: &DateRange) -> Vec<ActivityRecord<'a>> {
    flatten_members(data)
        .into_iter()
        .flat_map(move |owner| {
            owner
                .member
                .activities
                .iter()
                .filter(move |activity| range.contains(&activity.date))
                .map(move |activity| ActivityRecord {
                    activity,
                    member: owner.member,
                    team: owner.team,
                    company: owner.company,
                })
        })
        .collect()
}

pub fn find_member<'a>(data: &'a Dataset, member_id: &str) -> Option<MemberRecord<'a>> {
    flatten_members(data)
        .into_iter()
        .find(|record| record.member_id() == member_id)
}
