use serde::Serialize;

/// Overdue/on-track status for a ticket with a resolvable deadline, carrying
/// a human-readable distance label.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DueStatus {
    /// Whether the deadline fell strictly before the sampled `now`.
    pub overdue: bool,
    pub label: String,
}

impl DueStatus {
    /// Builds the status for a deadline epoch relative to the sampled `now`.
    pub fn new(deadline: i64, now: i64) -> Self {
        let overdue = deadline < now;
        let distance = format_distance(deadline.abs_diff(now));
        let label = if overdue {
            format!("Retraso de {distance}")
        } else {
            format!("Vence en {distance}")
        };
        Self { overdue, label }
    }
}

/// Renders a span of seconds as days/hours/minutes, floored at "under a
/// minute".
fn format_distance(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days > 0 && hours > 0 {
        format!(
            "{days} {} y {hours} {}",
            plural(days, "día", "días"),
            plural(hours, "hora", "horas")
        )
    } else if days > 0 {
        format!("{days} {}", plural(days, "día", "días"))
    } else if hours > 0 && minutes > 0 {
        format!(
            "{hours} {} y {minutes} {}",
            plural(hours, "hora", "horas"),
            plural(minutes, "minuto", "minutos")
        )
    } else if hours > 0 {
        format!("{hours} {}", plural(hours, "hora", "horas"))
    } else if minutes > 0 {
        format!("{minutes} {}", plural(minutes, "minuto", "minutos"))
    } else {
        "menos de 1 minuto".to_string()
    }
}

fn plural(n: u64, singular: &'static str, plural: &'static str) -> &'static str {
    if n == 1 {
        singular
    } else {
        plural
    }
}
