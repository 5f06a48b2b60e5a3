use crate::models::{Activity, Company, Dataset, Member, Team};

/// Built-in dataset served when no data file is configured.
pub fn sample_dataset() -> Dataset {
    Dataset {
        companies: vec![
            company(
                "comp_1",
                "Alpha Inc",
                vec![
                    team(
                        "team_1",
                        "Engineering",
                        vec![
                            member(
                                "mem_1",
                                "Alice",
                                vec![
                                    activity("2024-03-01", "coding", 5.0, &["feature", "frontend"]),
                                    activity("2024-03-02", "meeting", 2.0, &["planning"]),
                                    activity("2024-03-03", "review", 1.0, &["code"]),
                                ],
                            ),
                            member(
                                "mem_2",
                                "Bob",
                                vec![
                                    activity("2024-03-01", "coding", 6.0, &["bugfix"]),
                                    activity("2024-03-03", "meeting", 3.0, &["sync"]),
                                ],
                            ),
                        ],
                    ),
                    team(
                        "team_2",
                        "Design",
                        vec![member(
                            "mem_3",
                            "Carol",
                            vec![
                                activity("2024-03-02", "design", 4.0, &["ui", "figma"]),
                                activity("2024-03-03", "meeting", 2.0, &["handoff"]),
                            ],
                        )],
                    ),
                ],
            ),
            company(
                "comp_2",
                "Beta LLC",
                vec![team(
                    "team_3",
                    "Marketing",
                    vec![
                        member(
                            "mem_4",
                            "Dan",
                            vec![
                                activity("2024-03-01", "content", 3.0, &["blog"]),
                                activity("2024-03-02", "seo", 2.0, &["keyword"]),
                            ],
                        ),
                        member(
                            "mem_5",
                            "Eve",
                            vec![
                                activity("2024-03-01", "content", 4.0, &["social"]),
                                activity("2024-03-03", "meeting", 2.0, &["sync"]),
                            ],
                        ),
                    ],
                )],
            ),
        ],
    }
}

fn company(id: &str, name: &str, teams: Vec<Team>) -> Company {
    Company {
        company_id: id.to_string(),
        name: name.to_string(),
        teams,
    }
}

fn team(id: &str, name: &str, members: Vec<Member>) -> Team {
    Team {
        team_id: id.to_string(),
        name: name.to_string(),
        members,
    }
}

fn member(id: &str, name: &str, activities: Vec<Activity>) -> Member {
    Member {
        member_id: id.to_string(),
        name: name.to_string(),
        activities,
    }
}

fn activity(date: &str, kind: &str, hours: f64, tags: &[&str]) -> Activity {
    Activity {
        date: date.to_string(),
        kind: kind.to_string(),
        hours,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}
