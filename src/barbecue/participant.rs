use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::thread;
use std::time::Duration;

use super::grill::{Barbecue, ParticipantId};

/// Role of a participant in the barbecue rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Chef,
    Guest,
}

/// A member of the turn rotation. Each participant knows its successor and
/// carries its own seeded RNG so simulation runs stay reproducible.
pub struct Participant {
    pub id: ParticipantId,
    pub role: Role,
    pub successor: ParticipantId,
    rng: StdRng,
    turn_duration: Normal<f64>,
}

impl Participant {
    pub fn new(
        id: ParticipantId,
        role: Role,
        successor: ParticipantId,
        turn_duration_mean_ms: f64,
        turn_duration_std_dev_ms: f64,
        seed: u64,
    ) -> Result<Self, String> {
        if turn_duration_std_dev_ms < 0.0 {
            return Err("Turn duration std dev cannot be negative".to_string());
        }
        let turn_duration = Normal::new(turn_duration_mean_ms, turn_duration_std_dev_ms)
            .map_err(|e| format!("Invalid turn duration distribution: {}", e))?;
        Ok(Self {
            id,
            role,
            successor,
            rng: StdRng::seed_from_u64(seed),
            turn_duration,
        })
    }

    /// One full turn: approach, spend some time at the grill, step away and
    /// hand over to the successor.
    pub fn take_turn(&mut self, grill: &dyn Barbecue) {
        grill.approach_safely(&self.id);

        let millis = self.turn_duration.sample(&mut self.rng).max(0.0) as u64;
        match self.role {
            Role::Chef => debug!("{} tends the coals for {}ms", self.id, millis),
            Role::Guest => debug!("{} grills a skewer for {}ms", self.id, millis),
        }
        if millis > 0 {
            thread::sleep(Duration::from_millis(millis));
        }

        grill.step_away_safely(&self.id);
        grill.set_next_active(&self.successor);
    }
}
