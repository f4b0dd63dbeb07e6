use crate::parse::RequestItem;

/// The end of representable time, used to push items without a resolvable
/// deadline to the end of a sorted list.
const END_OF_TIME: i64 = i64::MAX;

/// An ordering key over the signed distance from the sampled `now` to an
/// item's deadline. Overdue items carry negative distances and therefore sort
/// before upcoming ones, most-overdue first; items with no deadline all share
/// [`END_OF_TIME`] and land at the end.
pub struct DeadlineOrder {
    distance: i64,
}
impl DeadlineOrder {
    /// Creates the sorting key for the given item against `now`.
    pub fn new(item: &RequestItem, now: i64) -> Self {
        Self {
            distance: item
                .deadline_epoch()
                .map(|deadline| deadline.saturating_sub(now))
                .unwrap_or(END_OF_TIME),
        }
    }
}
impl Ord for DeadlineOrder {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.cmp(&other.distance)
    }
}
impl PartialOrd for DeadlineOrder {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for DeadlineOrder {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}
impl Eq for DeadlineOrder {}
