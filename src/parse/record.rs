//! Wire types lifted from the Odoo maintenance bridge. The upstream encodes
//! absent values as JSON `false` rather than omitting them, so every optional
//! field decodes through [`falseable`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One group in the upstream payload: an optional team descriptor plus the
/// raw tickets reported under it.
///
/// `requests` stays loosely typed because the upstream occasionally reports a
/// bare `false` or an object here; anything that isn't an array is treated as
/// an empty group.
#[derive(Deserialize, Debug, Clone)]
pub struct RawGroup {
    #[serde(default)]
    pub team: Option<GroupTeam>,
    #[serde(default)]
    pub requests: Option<Value>,
}

/// The team descriptor attached to a group.
#[derive(Deserialize, Debug, Clone)]
pub struct GroupTeam {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single raw maintenance ticket as reported by the upstream.
///
/// At most one recurrence pair is authoritative per ticket: the
/// `recurrence_value`/`recurrence_type` pair wins whenever its value is
/// present and non-zero, with `repeat_interval`/`repeat_unit` as the legacy
/// fallback.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RawRequest {
    pub id: Option<u64>,
    #[serde(deserialize_with = "falseable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub maintenance_team_id: Option<(u64, String)>,
    #[serde(deserialize_with = "falseable")]
    pub stage_id: Option<(u64, String)>,
    /// A small integer in string form; anything unparseable counts as unset.
    #[serde(deserialize_with = "falseable")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub schedule_date: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub corrective_date: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub request_date: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub preventive_date: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub repeat_interval: Option<u32>,
    #[serde(deserialize_with = "falseable")]
    pub repeat_unit: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub recurrence_type: Option<String>,
    #[serde(deserialize_with = "falseable")]
    pub recurrence_value: Option<u32>,
    /// The usage counter for hour-based equipment (e.g. a generator's hour
    /// meter).
    #[serde(deserialize_with = "falseable")]
    pub used_value: Option<f64>,
    #[serde(deserialize_with = "falseable")]
    pub equipment_id: Option<(u64, String)>,
    pub archive: bool,
}

/// Decodes a field the upstream reports as `false` (or `null`) when unset.
/// Empty strings also count as unset.
fn falseable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Bool(false) | Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        other => T::deserialize(other).map(Some).map_err(serde::de::Error::custom),
    }
}
