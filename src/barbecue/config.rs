use serde::{Deserialize, Serialize};

/// Configuration for a barbecue simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BbqConfig {
    /// Number of guests in the rotation (the chef is always present)
    pub guest_count: usize,
    /// How many times the full rotation goes around
    pub rounds: u32,
    /// Mean time a participant spends at the grill per turn
    pub turn_duration_mean_ms: f64,
    /// Spread of the per-turn grill time
    pub turn_duration_std_dev_ms: f64,
    /// Base seed for the per-participant RNGs
    pub random_seed: u64,
}

impl Default for BbqConfig {
    fn default() -> Self {
        Self {
            guest_count: 3,
            rounds: 4,
            turn_duration_mean_ms: 2.0,
            turn_duration_std_dev_ms: 0.5,
            random_seed: 42,
        }
    }
}

impl BbqConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guest_count(mut self, guests: usize) -> Self {
        self.guest_count = guests;
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_turn_duration(mut self, mean_ms: f64, std_dev_ms: f64) -> Self {
        self.turn_duration_mean_ms = mean_ms;
        self.turn_duration_std_dev_ms = std_dev_ms;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.guest_count == 0 {
            return Err("At least one guest must attend the barbecue".to_string());
        }

        if self.rounds == 0 {
            return Err("Round count must be greater than 0".to_string());
        }

        if self.turn_duration_mean_ms < 0.0 {
            return Err("Turn duration mean cannot be negative".to_string());
        }

        if self.turn_duration_std_dev_ms < 0.0 {
            return Err("Turn duration std dev cannot be negative".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BbqConfig::default();
        assert_eq!(config.guest_count, 3);
        assert_eq!(config.rounds, 4);
        assert_eq!(config.turn_duration_mean_ms, 2.0);
        assert_eq!(config.turn_duration_std_dev_ms, 0.5);
        assert_eq!(config.random_seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BbqConfig::new()
            .with_guest_count(6)
            .with_rounds(10)
            .with_turn_duration(5.0, 1.0)
            .with_random_seed(7);

        assert_eq!(config.guest_count, 6);
        assert_eq!(config.rounds, 10);
        assert_eq!(config.turn_duration_mean_ms, 5.0);
        assert_eq!(config.turn_duration_std_dev_ms, 1.0);
        assert_eq!(config.random_seed, 7);
    }

    #[test]
    fn test_validation() {
        let config = BbqConfig::default();
        assert!(config.validate().is_ok());

        let config = BbqConfig::default().with_guest_count(0);
        assert!(config.validate().is_err());

        let config = BbqConfig::default().with_rounds(0);
        assert!(config.validate().is_err());

        let config = BbqConfig::default().with_turn_duration(2.0, -0.5);
        assert!(config.validate().is_err());
    }
}
