use super::date::to_epoch;
use super::record::RawRequest;
use super::recurrence::Recurrence;

/// How a ticket's urgency percentage is measured. Hour-based equipment is
/// tracked against a usage meter; everything else against a time window.
/// Chosen once per record from the resolved recurrence unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressMode {
    UsageThreshold,
    TimeWindow,
}

impl ProgressMode {
    /// Selects the mode for the given recurrence unit code. Hour units are
    /// recognised in both source and localized spellings; absent units fall
    /// back to the time window.
    pub fn for_unit(unit: Option<&str>) -> Self {
        match unit.map(|u| u.to_lowercase()).as_deref() {
            Some("hour" | "hours" | "hora" | "horas") => Self::UsageThreshold,
            _ => Self::TimeWindow,
        }
    }
}

/// Computes the 0-100 urgency percentage for one ticket, rounded half-up.
///
/// `now` is sampled once per normalization pass, so every item in a pass is
/// measured against the same instant.
pub fn compute(raw: &RawRequest, recurrence: &Recurrence, now: i64) -> u8 {
    match ProgressMode::for_unit(recurrence.unit()) {
        ProgressMode::UsageThreshold => usage_progress(raw.used_value, recurrence.value()),
        ProgressMode::TimeWindow => window_progress(raw, now),
    }
}

/// Usage against the recurrence threshold, e.g. an hour meter on equipment
/// serviced every N running hours. Missing either side reads as not started.
fn usage_progress(used: Option<f64>, threshold: Option<u32>) -> u8 {
    match (used, threshold) {
        (Some(used), Some(threshold)) if threshold > 0 => {
            (100.0 * used / f64::from(threshold)).round().clamp(0.0, 100.0) as u8
        }
        _ => 0,
    }
}

/// Elapsed share of the window from the start date (request date, falling
/// back to the corrective date) to the target date (preventive date, falling
/// back to the legacy schedule date, then the corrective date).
fn window_progress(raw: &RawRequest, now: i64) -> u8 {
    let start = raw
        .request_date
        .as_deref()
        .or(raw.corrective_date.as_deref())
        .and_then(to_epoch);
    let target = raw
        .preventive_date
        .as_deref()
        .or(raw.schedule_date.as_deref())
        .or(raw.corrective_date.as_deref())
        .and_then(to_epoch);

    match (start, target) {
        (Some(start), Some(target)) if target > start => {
            let elapsed = (now - start).clamp(0, target - start);
            (100.0 * elapsed as f64 / (target - start) as f64).round() as u8
        }
        // A window that never opened is fully due once `now` reaches the
        // target, and not started before that
        (Some(_), Some(target)) if now >= target => 100,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windowed(
        request_date: Option<&str>,
        corrective_date: Option<&str>,
        preventive_date: Option<&str>,
        schedule_date: Option<&str>,
    ) -> RawRequest {
        RawRequest {
            request_date: request_date.map(str::to_string),
            corrective_date: corrective_date.map(str::to_string),
            preventive_date: preventive_date.map(str::to_string),
            schedule_date: schedule_date.map(str::to_string),
            ..RawRequest::default()
        }
    }

    fn hourly(used: Option<f64>, threshold: u32) -> (RawRequest, Recurrence) {
        let raw = RawRequest {
            used_value: used,
            ..RawRequest::default()
        };
        let rec = Recurrence::Explicit {
            value: threshold,
            unit: Some("hours".to_string()),
        };
        (raw, rec)
    }

    #[test]
    fn hour_units_select_usage_mode_in_any_spelling() {
        for unit in ["hour", "hours", "Horas", "HORA"] {
            assert_eq!(ProgressMode::for_unit(Some(unit)), ProgressMode::UsageThreshold);
        }
        assert_eq!(ProgressMode::for_unit(Some("days")), ProgressMode::TimeWindow);
        assert_eq!(ProgressMode::for_unit(None), ProgressMode::TimeWindow);
    }

    #[test]
    fn usage_mode_is_share_of_threshold() {
        let (raw, rec) = hourly(Some(40.0), 200);
        assert_eq!(compute(&raw, &rec, 0), 20);
    }

    #[test]
    fn usage_at_or_past_threshold_caps_at_100() {
        let (raw, rec) = hourly(Some(200.0), 200);
        assert_eq!(compute(&raw, &rec, 0), 100);
        let (raw, rec) = hourly(Some(999.0), 200);
        assert_eq!(compute(&raw, &rec, 0), 100);
    }

    #[test]
    fn usage_mode_without_a_meter_reads_zero() {
        let (raw, rec) = hourly(None, 200);
        assert_eq!(compute(&raw, &rec, 0), 0);
    }

    #[test]
    fn window_progress_is_elapsed_share() {
        let raw = windowed(
            Some("2024-01-01 00:00:00"),
            None,
            Some("2024-01-11 00:00:00"),
            None,
        );
        let now = to_epoch("2024-01-06 00:00:00").unwrap();
        assert_eq!(compute(&raw, &Recurrence::None, now), 50);
    }

    #[test]
    fn window_rounds_half_up() {
        // Two thirds of the way through a three-day window
        let raw = windowed(Some("2024-01-01"), None, Some("2024-01-04"), None);
        let now = to_epoch("2024-01-03").unwrap();
        assert_eq!(compute(&raw, &Recurrence::None, now), 67);
    }

    #[test]
    fn window_clamps_outside_the_endpoints() {
        let raw = windowed(Some("2024-01-01"), None, Some("2024-01-11"), None);
        let before = to_epoch("2023-12-01").unwrap();
        assert_eq!(compute(&raw, &Recurrence::None, before), 0);
        let after = to_epoch("2024-02-01").unwrap();
        assert_eq!(compute(&raw, &Recurrence::None, after), 100);
    }

    #[test]
    fn start_prefers_request_date_and_target_prefers_preventive() {
        // The corrective date would place the window at 100%; the request and
        // preventive dates take precedence and place it at 50%
        let raw = windowed(
            Some("2024-01-01 00:00:00"),
            Some("2023-01-01 00:00:00"),
            Some("2024-01-11 00:00:00"),
            Some("2023-06-01 00:00:00"),
        );
        let now = to_epoch("2024-01-06 00:00:00").unwrap();
        assert_eq!(compute(&raw, &Recurrence::None, now), 50);
    }

    #[test]
    fn collapsed_window_is_all_or_nothing() {
        let raw = windowed(Some("2024-01-11"), None, Some("2024-01-01"), None);
        let before = to_epoch("2023-12-01").unwrap();
        assert_eq!(compute(&raw, &Recurrence::None, before), 0);
        let after = to_epoch("2024-06-01").unwrap();
        assert_eq!(compute(&raw, &Recurrence::None, after), 100);
    }

    #[test]
    fn unparseable_endpoints_read_zero() {
        let raw = windowed(Some("not a date"), None, Some("2024-01-11"), None);
        assert_eq!(compute(&raw, &Recurrence::None, 0), 0);
        let raw = windowed(None, None, Some("2024-01-11"), None);
        assert_eq!(compute(&raw, &Recurrence::None, 0), 0);
    }
}
