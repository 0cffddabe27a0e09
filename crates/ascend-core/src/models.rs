// ABOUTME: Session outcome and prescription models exchanged with the logging subsystem
// ABOUTME: SessionOutcome, Prescription, and ProgressionKey definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One completed session of an exercise, as reported by the logging subsystem
///
/// The engine only reads outcomes; it never stores or mutates them.
///
/// # Examples
///
/// ```rust
/// use ascend_core::SessionOutcome;
///
/// let outcome = SessionOutcome::completed(100.0, 5, 3).with_rpe(8.5);
/// assert!(outcome.all_sets_met);
/// assert_eq!(outcome.achieved_reps, vec![5, 5, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Caller-supplied identifier of the logged session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    /// When the session was finalized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Weight the athlete was asked to lift
    pub prescribed_weight: f64,
    /// Reps per set the athlete was asked to perform
    pub prescribed_reps: u32,
    /// Number of sets the athlete was asked to perform
    pub prescribed_sets: u32,
    /// Reps achieved, one entry per set performed
    #[serde(default)]
    pub achieved_reps: Vec<u32>,
    /// Self-reported exertion on the 1-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_rpe: Option<f64>,
    /// Whether every prescribed set hit its target
    pub all_sets_met: bool,
}

impl SessionOutcome {
    /// Outcome where every set hit the prescribed reps
    #[must_use]
    pub fn completed(weight: f64, reps: u32, sets: u32) -> Self {
        Self {
            session_id: None,
            completed_at: None,
            prescribed_weight: weight,
            prescribed_reps: reps,
            prescribed_sets: sets,
            achieved_reps: vec![reps; sets as usize],
            reported_rpe: None,
            all_sets_met: true,
        }
    }

    /// Outcome where every set hit the prescribed reps, without per-set detail
    ///
    /// Used for simulated sessions, where `achieved_reps` would only repeat
    /// `prescribed_reps` once per set.
    #[must_use]
    pub const fn idealized(weight: f64, reps: u32, sets: u32) -> Self {
        Self {
            session_id: None,
            completed_at: None,
            prescribed_weight: weight,
            prescribed_reps: reps,
            prescribed_sets: sets,
            achieved_reps: Vec::new(),
            reported_rpe: None,
            all_sets_met: true,
        }
    }

    /// Outcome where the last set fell one rep short
    #[must_use]
    pub fn missed(weight: f64, reps: u32, sets: u32) -> Self {
        let mut achieved_reps = vec![reps; sets as usize];
        if let Some(last) = achieved_reps.last_mut() {
            *last = last.saturating_sub(1);
        }
        Self {
            achieved_reps,
            all_sets_met: false,
            ..Self::completed(weight, reps, sets)
        }
    }

    /// Attach a reported RPE
    #[must_use]
    pub fn with_rpe(mut self, rpe: f64) -> Self {
        self.reported_rpe = Some(rpe);
        self
    }

    /// Attach the session identifier used for log correlation
    #[must_use]
    pub fn with_session_id(mut self, session_id: Uuid) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Total reps achieved across all sets
    #[must_use]
    pub fn total_achieved_reps(&self) -> u64 {
        self.achieved_reps.iter().copied().map(u64::from).sum()
    }
}

/// What the athlete should do in their next session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    /// Load, already rounded to the configured granularity
    pub weight: f64,
    /// Reps per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
    /// Target exertion, only set by RPE-driven strategies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f64>,
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} @ {}", self.sets, self.reps, format_weight(self.weight))?;
        if let Some(rpe) = self.target_rpe {
            write!(f, " (RPE {rpe:.1})")?;
        }
        Ok(())
    }
}

/// Weight with the decimals it carries, at least one and at most three
fn format_weight(weight: f64) -> String {
    let mut text = format!("{weight:.3}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

/// Identity of one progression state: an athlete training one exercise
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgressionKey {
    /// Athlete the state belongs to
    pub athlete_id: Uuid,
    /// Exercise assignment the state tracks
    pub exercise_id: String,
}

impl ProgressionKey {
    /// Build a key for an athlete/exercise pair
    #[must_use]
    pub fn new(athlete_id: Uuid, exercise_id: impl Into<String>) -> Self {
        Self {
            athlete_id,
            exercise_id: exercise_id.into(),
        }
    }
}

impl fmt::Display for ProgressionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.athlete_id, self.exercise_id)
    }
}
