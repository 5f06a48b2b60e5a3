use crate::data::sample_dataset;
use crate::models::Dataset;
use std::collections::HashSet;
use std::{env, path::Path, path::PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read data file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {scope} id {id}")]
    DuplicateId { scope: &'static str, id: String },
    #[error("activity hours for member {member_id} must be a non-negative number, got {hours}")]
    InvalidHours { member_id: String, hours: f64 },
}

pub fn resolve_data_path() -> Option<PathBuf> {
    env::var("APP_DATA_PATH")
        .ok()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Loads the dataset once at startup. Falls back to the built-in sample when
/// no path is given or the file is unusable.
pub async fn load_dataset(path: Option<&Path>) -> Dataset {
    let Some(path) = path else {
        info!("no data file configured, serving built-in sample dataset");
        return sample_dataset();
    };

    match read_dataset(path).await {
        Ok(data) => {
            info!("loaded dataset from {}", path.display());
            data
        }
        Err(err) => {
            error!("{err}; serving built-in sample dataset");
            sample_dataset()
        }
    }
}

pub async fn read_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let bytes = fs::read(path).await?;
    let data: Dataset = serde_json::from_slice(&bytes)?;
    validate_dataset(&data)?;
    Ok(data)
}

pub fn validate_dataset(data: &Dataset) -> Result<(), DatasetError> {
    let mut company_ids = HashSet::new();
    for company in &data.companies {
        unique(&mut company_ids, "company", &company.company_id)?;

        let mut team_ids = HashSet::new();
        for team in &company.teams {
            unique(&mut team_ids, "team", &team.team_id)?;

            let mut member_ids = HashSet::new();
            for member in &team.members {
                unique(&mut member_ids, "member", &member.member_id)?;

                if let Some(bad) = member
                    .activities
                    .iter()
                    .find(|activity| !activity.hours.is_finite() || activity.hours < 0.0)
                {
                    return Err(DatasetError::InvalidHours {
                        member_id: member.member_id.clone(),
                        hours: bad.hours,
                    });
                }
            }
        }
    }
    Ok(())
}

fn unique<'a>(
    seen: &mut HashSet<&'a str>,
    scope: &'static str,
    id: &'a str,
) -> Result<(), DatasetError> {
    if seen.insert(id) {
        Ok(())
    } else {
        Err(DatasetError::DuplicateId {
            scope,
            id: id.to_string(),
        })
    }
}
