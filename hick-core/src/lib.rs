//! Core of the Hick's-law menu reaction test.
//!
//! Main components:
//! - [`catalog`] — the nested menu tree and its leaf registry.
//! - [`hick`] — the Hick's-law response-time model.
//! - [`session`] — the trial state machine driven by menu clicks.
//! - [`schedule`] — tickets for the deferred advance after a correct pick.
//! - [`transcript`] — human-readable instruction and log texts.
//! - [`config`] — tunable constants for a session.
//! - [`error`] — misuse faults reported by the session.
//! - [`types`] — shared type aliases and constants.

pub mod catalog;
pub mod config;
pub mod error;
pub mod hick;
pub mod schedule;
pub mod session;
pub mod transcript;
pub mod types;
