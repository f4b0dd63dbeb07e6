use super::groups_from_value;
use super::record::RawGroup;
use crate::teams::{Team, TeamDirectory};
use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Fetches the raw request groups from the given bridge endpoint, optionally
/// against the production base. A non-array payload yields an empty result
/// rather than an error; only transport failures and non-200 statuses bubble
/// up.
pub fn get_raw_groups(endpoint: &str, prod: bool) -> Result<Vec<RawGroup>> {
    let mut req = ureq::get(&format!("http://{endpoint}/api/mantenimiento/requests"))
        .config()
        .http_status_as_error(false)
        .build();
    if prod {
        req = req.query("base", "prod");
    }
    let mut res = req.call()?;
    if res.status() != 200 {
        bail!(
            "failed to fetch requests from {endpoint}, received status {}",
            res.status()
        );
    }

    let payload: Value = res
        .body_mut()
        .read_json()
        .with_context(|| "failed to decode requests payload from the bridge")?;
    Ok(groups_from_value(payload))
}

/// Fetches the upstream team list, with the canonical-name overrides already
/// applied.
pub fn get_teams(endpoint: &str, prod: bool, teams: &TeamDirectory) -> Result<Vec<Team>> {
    let mut req = ureq::get(&format!("http://{endpoint}/api/mantenimiento/teams"))
        .config()
        .http_status_as_error(false)
        .build();
    if prod {
        req = req.query("base", "prod");
    }
    let mut res = req.call()?;
    if res.status() != 200 {
        bail!(
            "failed to fetch teams from {endpoint}, received status {}",
            res.status()
        );
    }

    let list: Vec<Team> = res
        .body_mut()
        .read_json()
        .with_context(|| "failed to decode teams payload from the bridge")?;
    Ok(list
        .into_iter()
        .map(|team| Team {
            name: teams.resolve_name(team.id, Some(team.name)),
            id: team.id,
        })
        .collect())
}
