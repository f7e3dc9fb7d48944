//! Replay cursor over a precomputed simulation trace.
//!
//! The cursor never recomputes anything: it only moves an index over
//! [`MatchResult::steps`]. Scheduling (timers, frames) is left to the caller,
//! which drives the cursor with [`Playback::tick`] at the configured
//! [`Playback::speed`].

use std::time::Duration;

use super::{MatchResult, SimulationStep};

/// Default delay between two automatic steps.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(500);

/// Whether the cursor advances on [`Playback::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackStatus {
    /// Not playing
    #[default]
    Idle,
    /// Advancing one step per tick
    Running,
    /// Playing, but ticks are ignored until resumed
    Paused,
}

/// Cursor over the steps of a [`MatchResult`].
///
/// The position is `None` before the first step. Every navigation request is
/// clamped to `[None, last step]`.
///
/// # Example
///
/// ```rust
/// use kmp_automaton::automaton::build_dfa;
/// use kmp_automaton::simulation::Playback;
///
/// let result = build_dfa("ab", "").simulate("aab");
/// let mut playback = Playback::new(&result);
///
/// playback.start();
/// while playback.tick() {}
/// assert_eq!(playback.position(), Some(2));
/// assert!(playback.current_step().unwrap().matched);
/// ```
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    result: &'a MatchResult,
    position: Option<usize>,
    status: PlaybackStatus,
    speed: Duration,
}

impl<'a> Playback<'a> {
    /// Create an idle cursor positioned before the first step.
    pub fn new(result: &'a MatchResult) -> Self {
        Self {
            result,
            position: None,
            status: PlaybackStatus::Idle,
            speed: DEFAULT_SPEED,
        }
    }

    fn last_index(&self) -> Option<usize> {
        self.result.steps.len().checked_sub(1)
    }

    /// Start playing.
    ///
    /// Moves to the next step, or back to the first one when the cursor is
    /// already on the last step. Does nothing for an empty trace.
    pub fn start(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };
        self.position = match self.position {
            Some(position) if position == last => Some(0),
            Some(position) => Some(position + 1),
            None => Some(0),
        };
        self.status = PlaybackStatus::Running;
    }

    /// Suspend automatic advancing.
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Running {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Continue after [`Playback::pause`].
    pub fn resume(&mut self) {
        if self.status == PlaybackStatus::Paused {
            self.status = PlaybackStatus::Running;
        }
    }

    /// Stop and move before the first step.
    pub fn reset(&mut self) {
        self.status = PlaybackStatus::Idle;
        self.position = None;
    }

    /// Advance one step if running.
    ///
    /// Returns `true` if the cursor moved. Reaching the last step stops the
    /// playback.
    pub fn tick(&mut self) -> bool {
        if self.status != PlaybackStatus::Running {
            return false;
        }
        match (self.position, self.last_index()) {
            (Some(position), Some(last)) if position < last => {
                self.position = Some(position + 1);
                true
            }
            (None, Some(_)) => {
                self.position = Some(0);
                true
            }
            _ => {
                self.status = PlaybackStatus::Idle;
                false
            }
        }
    }

    /// Move one step forward, staying on the last step.
    pub fn step_forward(&mut self) {
        if let Some(last) = self.last_index() {
            self.position = Some(self.position.map_or(0, |p| (p + 1).min(last)));
        }
    }

    /// Move one step back, down to "before the first step".
    pub fn step_backward(&mut self) {
        self.position = self.position.and_then(|p| p.checked_sub(1));
    }

    /// Jump to `step`; negative values mean "before the first step".
    pub fn jump_to(&mut self, step: isize) {
        self.position = match (usize::try_from(step), self.last_index()) {
            (Ok(step), Some(last)) => Some(step.min(last)),
            _ => None,
        };
    }

    /// Change the delay between automatic steps.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Delay between automatic steps.
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Current status.
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Index of the current step.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// The current step.
    pub fn current_step(&self) -> Option<&'a SimulationStep> {
        self.position.and_then(|p| self.result.steps.get(p))
    }

    /// Steps already replayed, current one included.
    pub fn replayed(&self) -> &'a [SimulationStep] {
        let end = self.position.map_or(0, |p| p + 1);
        &self.result.steps[..end]
    }

    /// Match starts revealed so far.
    pub fn revealed_matches(&self) -> impl Iterator<Item = usize> + 'a {
        self.replayed().iter().filter_map(|step| step.match_start)
    }

    /// Whether the cursor is on the last step.
    pub fn is_finished(&self) -> bool {
        self.position.is_some() && self.position == self.last_index()
    }
}
