mod sort;

use crate::parse::RequestItem;
use crate::teams::TeamDirectory;
use sort::DeadlineOrder;
use std::collections::HashSet;
use tracing::debug;

/// The stage name the upstream gives closed-out tickets; these never rank.
const REPAIRED_STAGE: &str = "Repaired";

/// Filters and orders a normalized collection for display.
///
/// Archived and repaired tickets are dropped and the location rule is
/// applied against the selected team set. The survivors are ordered by how
/// pressing they are: overdue items first (most overdue leading), then
/// upcoming items soonest-first, then items without a resolvable deadline.
/// Ties keep their input order.
pub fn rank(
    items: Vec<RequestItem>,
    selected: &HashSet<u64>,
    teams: &TeamDirectory,
    now: i64,
) -> Vec<RequestItem> {
    let before = items.len();
    let mut ranked: Vec<RequestItem> = items
        .into_iter()
        .filter(|item| !item.archive)
        .filter(|item| item.stage_name != REPAIRED_STAGE)
        .filter(|item| teams.includes(selected, item.team_id, &item.name))
        .collect();
    // A stable sort, so equally-distant items (notably the deadline-less
    // block at the end) keep their input order
    ranked.sort_by_key(|item| DeadlineOrder::new(item, now));
    debug!(kept = ranked.len(), dropped = before - ranked.len(), "ranking pass");
    ranked
}
