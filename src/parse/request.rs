use super::date::to_epoch;
use super::due::DueStatus;
use super::progress;
use super::record::{GroupTeam, RawRequest};
use super::recurrence::Recurrence;
use crate::teams::TeamDirectory;
use serde::Serialize;

/// A fully normalized maintenance request. Items are produced fresh on every
/// pass, immutable once built, and replaced wholesale on the next refresh.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RequestItem {
    pub id: u64,
    pub name: String,
    pub team_id: u64,
    pub team_name: String,
    pub stage_id: u64,
    pub stage_name: String,
    /// Escalation level, 0 when unset.
    pub priority: u8,
    // The date fields are carried verbatim for display; their parsed epochs
    // are only ever used internally
    pub schedule_date: Option<String>,
    pub corrective_date: Option<String>,
    pub request_date: Option<String>,
    pub preventive_date: Option<String>,
    pub equipment_id: Option<u64>,
    pub equipment_name: Option<String>,
    /// How far this request has progressed toward needing attention, 0-100.
    pub progress: u8,
    /// The localized recurrence label, e.g. `"3 semanas"`.
    pub frequency: Option<String>,
    /// The raw unit code behind `frequency`.
    pub frequency_unit: Option<String>,
    /// The recurrence magnitude the derivations used.
    pub recurrence_value: Option<u32>,
    pub used_value: Option<f64>,
    /// Overdue/on-track status against the resolved deadline.
    pub due: Option<DueStatus>,
    pub archive: bool,
}

impl RequestItem {
    /// Normalizes one raw ticket against the team tables and the pass-wide
    /// `now` sample. Returns `None` if the ticket has no identifier, which is
    /// the only condition that drops a record here.
    pub fn from_raw(
        raw: RawRequest,
        group_team: Option<&GroupTeam>,
        teams: &TeamDirectory,
        now: i64,
    ) -> Option<Self> {
        let id = raw.id?;

        let recurrence = Recurrence::resolve(&raw);
        let progress = progress::compute(&raw, &recurrence, now);

        // The group's team descriptor wins over the ticket's own reference
        // pair, for the id and the name separately
        let team_id = group_team
            .and_then(|t| t.id)
            .or(raw.maintenance_team_id.as_ref().map(|(id, _)| *id))
            .unwrap_or(0);
        let source_name = group_team
            .and_then(|t| t.name.clone())
            .or(raw.maintenance_team_id.map(|(_, name)| name));

        let (stage_id, stage_name) = raw.stage_id.unwrap_or((0, String::new()));

        let mut item = Self {
            id,
            name: raw.name.unwrap_or_default(),
            team_id,
            team_name: teams.resolve_name(team_id, source_name),
            stage_id,
            stage_name,
            priority: raw
                .priority
                .as_deref()
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(0),
            schedule_date: raw.schedule_date,
            corrective_date: raw.corrective_date,
            request_date: raw.request_date,
            preventive_date: raw.preventive_date,
            equipment_id: raw.equipment_id.as_ref().map(|(id, _)| *id),
            equipment_name: raw.equipment_id.map(|(_, name)| name),
            progress,
            frequency: recurrence.label(),
            frequency_unit: recurrence.unit().map(str::to_string),
            recurrence_value: recurrence.value(),
            used_value: raw.used_value,
            due: None,
            archive: raw.archive,
        };
        item.due = item
            .deadline_epoch()
            .map(|deadline| DueStatus::new(deadline, now));
        Some(item)
    }

    /// The deadline this request is ranked by: the preventive date, else the
    /// legacy schedule date, else the corrective date. Unparseable strings
    /// count as no deadline.
    pub fn deadline_epoch(&self) -> Option<i64> {
        self.preventive_date
            .as_deref()
            .or(self.schedule_date.as_deref())
            .or(self.corrective_date.as_deref())
            .and_then(to_epoch)
    }
}
