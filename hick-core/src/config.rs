use std::time::Duration;

use crate::hick::HickModel;

/// Tunable constants for a trial session.
///
/// ### Fields
/// - `max_trials` - Number of trials before the session completes.
/// - `feedback_delay` - Pause between a correct pick and the next trial.
/// - `hick` - Response-time model used to score each trial.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub max_trials: u32,
    pub feedback_delay: Duration,
    pub hick: HickModel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_trials: 10,
            feedback_delay: Duration::from_secs(1),
            hick: HickModel::default(),
        }
    }
}
