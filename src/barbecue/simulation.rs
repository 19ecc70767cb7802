use log::{debug, info};
use std::sync::Arc;
use std::thread;

use super::config::BbqConfig;
use super::grill::{Barbecue, GrillAction, GrillEvent, ParticipantId};
use super::ordered::OrderedGrill;
use super::participant::{Participant, Role};

/// Outcome of a finished barbecue
#[derive(Debug)]
pub struct BbqReport {
    pub turns_taken: usize,
    pub collisions: u64,
    pub history: Vec<GrillAction>,
}

/// Runs one barbecue: every participant gets its own thread, all of them
/// share one grill, and the rotation goes around for the configured number
/// of rounds.
pub struct BbqSimulation {
    config: BbqConfig,
    grill: Arc<dyn Barbecue>,
    participants: Vec<Participant>,
}

impl BbqSimulation {
    /// Build a simulation around an [`OrderedGrill`]
    pub fn new(config: BbqConfig) -> Result<Self, String> {
        let rotation = Self::rotation_ids(config.guest_count);
        let grill = Arc::new(OrderedGrill::new(rotation[0].clone()));
        Self::with_grill(config, grill)
    }

    /// Build a simulation around any grill implementation. The grill must
    /// already have the chef designated as first in line.
    pub fn with_grill(config: BbqConfig, grill: Arc<dyn Barbecue>) -> Result<Self, String> {
        config.validate()?;

        let rotation = Self::rotation_ids(config.guest_count);
        let mut participants = Vec::with_capacity(rotation.len());
        for (index, id) in rotation.iter().enumerate() {
            let role = if index == 0 { Role::Chef } else { Role::Guest };
            let successor = rotation[(index + 1) % rotation.len()].clone();
            participants.push(Participant::new(
                id.clone(),
                role,
                successor,
                config.turn_duration_mean_ms,
                config.turn_duration_std_dev_ms,
                config.random_seed.wrapping_add(index as u64),
            )?);
        }

        Ok(Self {
            config,
            grill,
            participants,
        })
    }

    /// The participant ids in turn order: the chef first, then the guests
    pub fn rotation(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id.clone()).collect()
    }

    fn rotation_ids(guest_count: usize) -> Vec<ParticipantId> {
        let mut ids = vec!["chef".to_string()];
        for n in 1..=guest_count {
            ids.push(format!("guest-{}", n));
        }
        ids
    }

    /// Run the barbecue to completion and report what happened at the grill
    pub fn run(self) -> Result<BbqReport, String> {
        let rounds = self.config.rounds;
        info!(
            "Barbecue starting: {} participants, {} rounds",
            self.participants.len(),
            rounds
        );

        let mut handles = Vec::with_capacity(self.participants.len());
        for mut participant in self.participants {
            let grill = Arc::clone(&self.grill);
            let handle = thread::Builder::new()
                .name(participant.id.clone())
                .spawn(move || {
                    for round in 0..rounds {
                        debug!("{} starting round {}", participant.id, round + 1);
                        participant.take_turn(grill.as_ref());
                    }
                })
                .map_err(|e| format!("Failed to spawn participant thread: {}", e))?;
            handles.push(handle);
        }

        for handle in handles {
            handle
                .join()
                .map_err(|_| "Participant thread panicked".to_string())?;
        }

        let history = self.grill.history();
        let turns_taken = history
            .iter()
            .filter(|a| a.event == GrillEvent::Approached)
            .count();
        let collisions = self.grill.collision_count();
        info!(
            "Barbecue finished: {} turns, {} collisions",
            turns_taken, collisions
        );

        Ok(BbqReport {
            turns_taken,
            collisions,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_starts_with_chef() {
        let sim = BbqSimulation::new(BbqConfig::default().with_guest_count(2)).unwrap();
        assert_eq!(
            sim.rotation(),
            vec![
                "chef".to_string(),
                "guest-1".to_string(),
                "guest-2".to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = BbqSimulation::new(BbqConfig::default().with_rounds(0));
        assert!(result.is_err());
    }
}
