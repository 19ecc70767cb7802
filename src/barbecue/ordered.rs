use log::debug;
use std::sync::{Condvar, Mutex};

use super::grill::{Barbecue, ChaoticGrill, GrillAction, ParticipantId};

/// A grill that adds mutual exclusion and ordered-turn signaling on top of
/// [`ChaoticGrill`]. Only the participant designated as next in line gets to
/// approach; everyone else blocks in `approach_safely` until designated.
///
/// Stepping away is deliberately not gated: it is not guaranteed that the
/// participant that approached the grill is the only one to also step away
/// from it again.
pub struct OrderedGrill {
    inner: ChaoticGrill,
    turn: Mutex<ParticipantId>,
    turn_changed: Condvar,
}

impl OrderedGrill {
    /// Create an ordered grill with the given participant designated to go first
    pub fn new(first_participant: ParticipantId) -> Self {
        Self {
            inner: ChaoticGrill::new(first_participant.clone()),
            turn: Mutex::new(first_participant),
            turn_changed: Condvar::new(),
        }
    }
}

impl Barbecue for OrderedGrill {
    fn set_next_active(&self, next_in_line: &ParticipantId) {
        {
            let mut turn = self.turn.lock().unwrap();
            self.inner.set_next_active(next_in_line);
            *turn = next_in_line.clone();
        }
        self.turn_changed.notify_all();
    }

    fn approach_safely(&self, participant: &ParticipantId) {
        let mut turn = self.turn.lock().unwrap();
        // Re-check after every wakeup (spurious wakeups, other waiters)
        while *turn != *participant {
            debug!("{} waiting for its turn (current: {})", participant, turn);
            turn = self.turn_changed.wait(turn).unwrap();
        }
        // The turn lock is still held here, so nobody else can slip in
        // between the designation check and the actual approach.
        self.inner.approach_safely(participant);
    }

    fn step_away_safely(&self, participant: &ParticipantId) {
        // Ungated on purpose, see the type-level docs.
        self.inner.step_away_safely(participant);
    }

    fn next_in_line(&self) -> ParticipantId {
        self.inner.next_in_line()
    }

    fn history(&self) -> Vec<GrillAction> {
        self.inner.history()
    }

    fn collision_count(&self) -> u64 {
        self.inner.collision_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barbecue::grill::GrillEvent;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_designated_participant_approaches_without_blocking() {
        let grill = OrderedGrill::new("chef".to_string());
        grill.approach_safely(&"chef".to_string());
        grill.step_away_safely(&"chef".to_string());
        assert_eq!(grill.collision_count(), 0);
    }

    #[test]
    fn test_approach_blocks_until_designated() {
        let grill = Arc::new(OrderedGrill::new("chef".to_string()));

        let waiter = {
            let grill = Arc::clone(&grill);
            thread::spawn(move || {
                grill.approach_safely(&"guest-1".to_string());
                grill.step_away_safely(&"guest-1".to_string());
            })
        };

        // Give the waiter a chance to block before the chef takes its turn.
        thread::sleep(Duration::from_millis(20));
        grill.approach_safely(&"chef".to_string());
        grill.step_away_safely(&"chef".to_string());
        grill.set_next_active(&"guest-1".to_string());
        waiter.join().unwrap();

        let approaches: Vec<ParticipantId> = grill
            .history()
            .into_iter()
            .filter(|a| a.event == GrillEvent::Approached)
            .map(|a| a.participant)
            .collect();
        assert_eq!(approaches, vec!["chef".to_string(), "guest-1".to_string()]);
        assert_eq!(grill.collision_count(), 0);
    }
}
