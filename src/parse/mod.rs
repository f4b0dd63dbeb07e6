mod date;
mod due;
mod fetch;
mod progress;
mod record;
mod recurrence;
mod request;

use crate::teams::TeamDirectory;
use serde_json::Value;
use tracing::{debug, warn};

pub use date::to_epoch;
pub use due::DueStatus;
pub use fetch::{get_raw_groups, get_teams};
pub use record::{GroupTeam, RawGroup, RawRequest};
pub use request::RequestItem;

/// Decodes the upstream payload into raw groups. Anything that isn't an
/// array yields no groups at all, and elements that don't decode are
/// dropped; malformed input is never an error here.
pub fn groups_from_value(payload: Value) -> Vec<RawGroup> {
    match payload {
        Value::Array(groups) => groups
            .into_iter()
            .filter_map(|group| match serde_json::from_value(group) {
                Ok(group) => Some(group),
                Err(err) => {
                    warn!(%err, "skipping undecodable group");
                    None
                }
            })
            .collect(),
        _ => {
            warn!("upstream payload is not an array, treating as empty");
            Vec::new()
        }
    }
}

/// Normalizes the raw upstream groups into a flat list of request items.
///
/// Groups without a ticket array contribute nothing, tickets that don't
/// decode or lack an identifier are skipped, and every derived value
/// degrades to a defined default rather than failing. `now` is the single
/// epoch sample for the whole pass, so progress and due status are
/// comparable across items.
pub fn normalize_requests(
    groups: Vec<RawGroup>,
    teams: &TeamDirectory,
    now: i64,
) -> Vec<RequestItem> {
    let mut items = Vec::new();
    for group in groups {
        let requests = match group.requests {
            Some(Value::Array(requests)) => requests,
            Some(_) | None => {
                debug!(
                    team = ?group.team.as_ref().and_then(|t| t.id),
                    "group without a ticket array"
                );
                continue;
            }
        };
        for value in requests {
            let raw: RawRequest = match serde_json::from_value(value) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(%err, "skipping undecodable ticket");
                    continue;
                }
            };
            match RequestItem::from_raw(raw, group.team.as_ref(), teams, now) {
                Some(item) => items.push(item),
                None => warn!("skipping ticket without an identifier"),
            }
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!([
            {
                "team": { "id": 14, "name": "Mantenimiento Refugio" },
                "requests": [
                    {
                        "id": 1,
                        "name": "Bomba de agua - ARA",
                        "stage_id": [1, "New Request"],
                        "priority": "3",
                        "request_date": "2024-01-01 00:00:00",
                        "preventive_date": "2024-01-11 00:00:00",
                        "recurrence_value": 2,
                        "recurrence_type": "weeks",
                        "archive": false
                    },
                    { "name": "sin id" },
                    "not even an object"
                ]
            },
            { "team": { "id": 15, "name": "Posada" }, "requests": false },
            { "requests": [ { "id": 2, "name": "Linterna", "schedule_date": false } ] }
        ])
    }

    #[test]
    fn non_array_payloads_are_empty() {
        assert!(groups_from_value(json!({ "error": "nope" })).is_empty());
        assert!(groups_from_value(json!(false)).is_empty());
        assert!(groups_from_value(json!(null)).is_empty());
    }

    #[test]
    fn normalization_skips_what_it_cannot_use() {
        let groups = groups_from_value(payload());
        let now = date::to_epoch("2024-01-06 00:00:00").unwrap();
        let items = normalize_requests(groups, &TeamDirectory::default(), now);

        // The id-less and non-object tickets and the ticket-less group are
        // gone; everything else survives
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].team_name, "REFUGIO");
        assert_eq!(items[0].progress, 50);
        assert_eq!(items[0].frequency.as_deref(), Some("2 semanas"));
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].team_id, 0);
        assert_eq!(items[1].schedule_date, None);
        assert!(!items[1].archive);
    }

    #[test]
    fn normalization_is_idempotent_for_a_fixed_now() {
        let now = date::to_epoch("2024-01-06 00:00:00").unwrap();
        let teams = TeamDirectory::default();
        let first = normalize_requests(groups_from_value(payload()), &teams, now);
        let second = normalize_requests(groups_from_value(payload()), &teams, now);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
