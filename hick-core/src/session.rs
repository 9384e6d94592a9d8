//! Trial state machine for the reaction test.
//!
//! A [`Session`] owns the menu [`Catalog`] and every piece of mutable test
//! state. The host drives it from a single event loop:
//!
//! 1. [`Session::start`] draws the first target and starts its timer.
//! 2. Each menu click goes to [`Session::select`]. A wrong pick is rejected
//!    and the trial stays open with its original start time. A correct pick
//!    records a [`TrialResult`] and returns an [`AdvanceTicket`].
//! 3. Once the ticket is due the host calls [`Session::fire`], which draws
//!    the next target, or completes the session after `max_trials` trials.
//!
//! Calls made in the wrong phase return [`SessionError`] and leave the
//! session untouched.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    config::Config,
    error::{Result, SessionError},
    schedule::AdvanceTicket,
    transcript::{self, Transcript},
    types::LeafId,
};

/// Coarse, externally visible state of a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingSelection,
    Completed,
}

/// The trial currently waiting for a pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trial {
    /// 1-based trial number.
    pub number: u32,
    pub target: LeafId,
    pub target_path: String,
    pub started_at: Instant,
}

/// Outcome of one resolved trial.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialResult {
    pub trial: u32,
    pub path: String,
    pub actual_ms: u64,
    pub predicted_ms: f64,
}

/// A wrong pick, to be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub clicked: String,
    pub expected: String,
}

impl Rejection {
    pub fn message(&self) -> String {
        format!("Вы выбрали: {}\nОжидается: {}", self.clicked, self.expected)
    }
}

/// What [`Session::select`] did with a click.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// The target was picked. The next trial starts when `ticket` fires.
    Accepted {
        result: TrialResult,
        ticket: AdvanceTicket,
    },
    /// Some other leaf was picked.
    Rejected(Rejection),
    /// The trial was already resolved and is waiting for its advance.
    Ignored,
}

/// What an advance did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advanced {
    Trial(Trial),
    Completed,
}

#[derive(Debug)]
enum State {
    Idle,
    Awaiting {
        trial: Trial,
        /// Set once the target has been picked.
        resolved: Option<AdvanceTicket>,
    },
    Completed,
}

/// The whole state of one reaction test.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    cfg: Config,
    trial_counter: u32,
    state: State,
    results: Vec<TrialResult>,
    transcript: Transcript,
    generation: u64,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, Config::default())
    }

    pub fn with_config(catalog: Catalog, cfg: Config) -> Self {
        Self {
            catalog,
            cfg,
            trial_counter: 0,
            state: State::Idle,
            results: Vec::new(),
            transcript: Transcript::default(),
            generation: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Awaiting { .. } => Phase::AwaitingSelection,
            State::Completed => Phase::Completed,
        }
    }

    pub fn trial_counter(&self) -> u32 {
        self.trial_counter
    }

    pub fn current_trial(&self) -> Option<&Trial> {
        match &self.state {
            State::Awaiting { trial, .. } => Some(trial),
            _ => None,
        }
    }

    /// The scheduled advance, if the current trial has been resolved.
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        match &self.state {
            State::Awaiting { resolved, .. } => *resolved,
            _ => None,
        }
    }

    /// Results recorded so far, in trial order.
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    /// The full result log, available only once the session is completed.
    pub fn final_results(&self) -> Option<&[TrialResult]> {
        match self.state {
            State::Completed => Some(&self.results),
            _ => None,
        }
    }

    pub fn transcript(&self) -> &str {
        self.transcript.as_str()
    }

    /// Text telling the user what to do right now.
    pub fn instruction(&self) -> String {
        match &self.state {
            State::Idle => transcript::WELCOME.to_owned(),
            State::Awaiting { trial, .. } => {
                transcript::trial_instruction(trial.number, &trial.target_path)
            }
            State::Completed => transcript::FINISHED.to_owned(),
        }
    }

    /// Begins the test by drawing the first target.
    ///
    /// ### Errors
    /// [`SessionError::InvalidTransition`] unless the session is idle, and
    /// [`SessionError::EmptyCatalog`] if there is nothing to pick from.
    pub fn start(&mut self, now: Instant, rng: &mut impl Rng) -> Result<Advanced> {
        if !matches!(self.state, State::Idle) {
            return Err(self.invalid("start"));
        }
        self.advance_unchecked(now, rng)
    }

    /// Moves on to the next trial, or completes the session.
    ///
    /// Valid while idle (first trial) or once the current trial has been
    /// resolved. Any ticket for the current trial is consumed.
    pub fn advance(&mut self, now: Instant, rng: &mut impl Rng) -> Result<Advanced> {
        match &self.state {
            State::Idle => {}
            State::Awaiting { resolved: Some(_), .. } => {}
            State::Awaiting { trial, resolved: None } => {
                return Err(SessionError::TrialUnresolved {
                    trial: trial.number,
                });
            }
            State::Completed => return Err(self.invalid("advance")),
        }
        self.advance_unchecked(now, rng)
    }

    /// Runs the advance scheduled by `ticket`.
    ///
    /// Returns `Ok(None)` without touching the session when the ticket is
    /// stale: it was cancelled, already fired, or issued for another trial.
    pub fn fire(
        &mut self,
        ticket: AdvanceTicket,
        now: Instant,
        rng: &mut impl Rng,
    ) -> Result<Option<Advanced>> {
        if ticket.generation() != self.generation || self.pending_advance() != Some(ticket) {
            debug!(?ticket, "ignoring stale advance ticket");
            return Ok(None);
        }
        self.advance_unchecked(now, rng).map(Some)
    }

    /// Invalidates every outstanding [`AdvanceTicket`].
    ///
    /// A resolved trial can still be moved on with [`Session::advance`].
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
    }

    /// Handles a click on the leaf at `path`.
    ///
    /// ### Errors
    /// [`SessionError::InvalidTransition`] unless a trial is in progress.
    pub fn select(&mut self, path: &str, now: Instant) -> Result<Selection> {
        let phase = self.phase();
        let State::Awaiting { trial, resolved } = &mut self.state else {
            return Err(SessionError::InvalidTransition {
                operation: "select",
                phase,
            });
        };

        if resolved.is_some() {
            debug!(path, trial = trial.number, "pick after trial was resolved");
            return Ok(Selection::Ignored);
        }

        if path != trial.target_path {
            debug!(clicked = path, expected = %trial.target_path, "wrong selection");
            self.transcript.wrong_selection(path);
            return Ok(Selection::Rejected(Rejection {
                clicked: path.to_owned(),
                expected: trial.target_path.clone(),
            }));
        }

        let elapsed = now.saturating_duration_since(trial.started_at);
        let actual_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let alternatives = self.catalog.registry().count_alternatives(&trial.target_path);
        let predicted_ms = self.cfg.hick.predict_ms(alternatives);

        let result = TrialResult {
            trial: trial.number,
            path: trial.target_path.clone(),
            actual_ms,
            predicted_ms,
        };
        info!(
            trial = result.trial,
            path = %result.path,
            actual_ms,
            predicted_ms,
            alternatives,
            "trial resolved"
        );

        let ticket = AdvanceTicket::new(now + self.cfg.feedback_delay, self.generation);
        *resolved = Some(ticket);

        self.transcript
            .correct_selection(&result.path, actual_ms, predicted_ms);
        self.results.push(result.clone());

        Ok(Selection::Accepted { result, ticket })
    }

    fn advance_unchecked(&mut self, now: Instant, rng: &mut impl Rng) -> Result<Advanced> {
        if self.trial_counter >= self.cfg.max_trials {
            self.state = State::Completed;
            self.transcript.finished(self.cfg.max_trials);
            info!(trials = self.results.len(), "session completed");
            return Ok(Advanced::Completed);
        }

        let registry = self.catalog.registry();
        if registry.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        let target = rng.random_range(0..registry.len());
        let target_path = registry
            .get(target)
            .map(|e| e.path.clone())
            .ok_or(SessionError::EmptyCatalog)?;

        self.trial_counter += 1;
        let trial = Trial {
            number: self.trial_counter,
            target,
            target_path,
            started_at: now,
        };
        info!(trial = trial.number, target = %trial.target_path, "trial started");

        self.transcript
            .trial_started(&transcript::trial_instruction(trial.number, &trial.target_path));
        self.state = State::Awaiting {
            trial: trial.clone(),
            resolved: None,
        };

        Ok(Advanced::Trial(trial))
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            phase: self.phase(),
        }
    }
}
