//! Latest-request-wins bookkeeping for overlapping async reads.

/// Monotonic counter identifying the most recent request.
///
/// Each new request calls [`Generation::begin`] and keeps the returned
/// ticket; when its work finishes, the result is only applied if
/// [`Generation::is_current`] still holds for that ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new request, invalidating every earlier ticket.
    pub const fn begin(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Whether `ticket` belongs to the most recent request.
    #[must_use]
    pub const fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_is_current() {
        let mut generation = Generation::default();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));
    }

    #[test]
    fn read_finishing_after_newer_pick_is_stale() {
        let mut generation = Generation::default();
        let slow = generation.begin();
        let fast = generation.begin();

        // The newer pick resolves first and is applied.
        assert!(generation.is_current(fast));
        // The older read resolves later and must be dropped.
        assert!(!generation.is_current(slow));
    }

    #[test]
    fn cancel_invalidates_in_flight_read() {
        let mut generation = Generation::default();
        let pending = generation.begin();
        // Picker closed with no file: clears the icon and bumps the counter.
        let _cancel = generation.begin();
        assert!(!generation.is_current(pending));
    }
}
