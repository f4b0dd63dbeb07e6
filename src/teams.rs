//! Team attribution and the location-filtering rule.
//!
//! Three teams are "locations". Their own tickets must carry the location's
//! keyword as the final ` - ` segment of the request name, and cross-cutting
//! teams tag their tickets the same way instead of through the team field, so
//! selecting a location also narrows every other team by that implicit tag.
//! Both the canonical-name override table and the keyword binding are plain
//! configuration so deployments can remap them without touching code.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A maintenance team as listed by the upstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: u64,
    pub name: String,
}

/// The static team tables: canonical short names that override whatever the
/// upstream reports, and the keyword each location team is bound to.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TeamDirectory {
    /// Canonical display names, keyed by team id.
    pub overrides: HashMap<u64, String>,
    /// Location teams, keyed by id, each bound to the keyword expected as the
    /// final ` - ` segment of a request name.
    pub locations: HashMap<u64, String>,
}

impl Default for TeamDirectory {
    fn default() -> Self {
        Self {
            overrides: HashMap::from([
                (14, "REFUGIO".to_string()),
                (15, "POSADA".to_string()),
                (16, "TRC".to_string()),
            ]),
            locations: HashMap::from([
                (14, "ARA".to_string()),
                (15, "POSADA".to_string()),
                (16, "TRC".to_string()),
            ]),
        }
    }
}

impl TeamDirectory {
    /// Resolves a team id to its display name. The override table wins over
    /// whatever name the source supplied.
    pub fn resolve_name(&self, id: u64, source_name: Option<String>) -> String {
        self.overrides
            .get(&id)
            .cloned()
            .or(source_name)
            .unwrap_or_default()
    }

    /// Decides whether an item passes the location rule for the selected team
    /// set. An empty selection applies no filtering at all.
    ///
    /// A location team's own ticket must always carry that location's keyword
    /// as its name tag, whatever is selected. Any other team's ticket is
    /// narrowed by the keywords of the selected locations, except that
    /// selecting none or all of the locations disables the check.
    pub fn includes(&self, selected: &HashSet<u64>, team_id: u64, name: &str) -> bool {
        if selected.is_empty() {
            return true;
        }
        let tag = name_tag(name).to_lowercase();
        if let Some(keyword) = self.locations.get(&team_id) {
            return tag == keyword.to_lowercase();
        }
        let selected_keywords: Vec<&String> = self
            .locations
            .iter()
            .filter(|(id, _)| selected.contains(*id))
            .map(|(_, keyword)| keyword)
            .collect();
        if selected_keywords.is_empty() || selected_keywords.len() == self.locations.len() {
            return true;
        }
        selected_keywords
            .iter()
            .any(|keyword| tag == keyword.to_lowercase())
    }
}

/// The final ` - `-delimited segment of a request name, trimmed. A name with
/// no delimiter is its own tag.
fn name_tag(name: &str) -> &str {
    name.rsplit(" - ").next().unwrap_or(name).trim()
}
