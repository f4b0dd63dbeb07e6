use super::record::RawRequest;
use serde::Serialize;

/// The recurrence pair a ticket is governed by, resolved once per record so
/// downstream derivations never re-check field presence.
///
/// The explicit pair wins whenever its value is present and non-zero; the
/// legacy pair is only consulted otherwise.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    Explicit { value: u32, unit: Option<String> },
    Legacy { value: u32, unit: Option<String> },
    None,
}

impl Recurrence {
    /// Resolves the authoritative recurrence pair on the given raw ticket.
    pub fn resolve(raw: &RawRequest) -> Self {
        match raw.recurrence_value {
            Some(value) if value != 0 => Self::Explicit {
                value,
                unit: raw.recurrence_type.clone(),
            },
            _ => match raw.repeat_interval {
                Some(value) => Self::Legacy {
                    value,
                    unit: raw.repeat_unit.clone(),
                },
                Option::None => Self::None,
            },
        }
    }

    /// The magnitude of the resolved pair, if any.
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Explicit { value, .. } | Self::Legacy { value, .. } => Some(*value),
            Self::None => Option::None,
        }
    }

    /// The raw unit code of the resolved pair, if any.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Explicit { unit, .. } | Self::Legacy { unit, .. } => unit.as_deref(),
            Self::None => Option::None,
        }
    }

    /// Produces the localized `"<magnitude> <unit-word>"` label for this
    /// recurrence, pluralized when the magnitude exceeds one. Unknown unit
    /// codes pass through verbatim. A zero magnitude or an absent unit yields
    /// no label at all.
    pub fn label(&self) -> Option<String> {
        let value = self.value().filter(|v| *v != 0)?;
        let unit = self.unit()?;
        let word = match unit_words(&unit.to_lowercase()) {
            Some((singular, plural)) => {
                if value > 1 {
                    plural
                } else {
                    singular
                }
            }
            Option::None => unit,
        };
        Some(format!("{value} {word}"))
    }
}

/// The localized singular/plural word pair for a recognised unit code. Source
/// spellings arrive in both singular and plural forms.
fn unit_words(code: &str) -> Option<(&'static str, &'static str)> {
    match code {
        "day" | "days" => Some(("día", "dias")),
        "week" | "weeks" => Some(("semana", "semanas")),
        "month" | "months" => Some(("mes", "meses")),
        "year" | "years" => Some(("año", "años")),
        "hour" | "hours" => Some(("hora", "horas")),
        _ => None,
    }
}
