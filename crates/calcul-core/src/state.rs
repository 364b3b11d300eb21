//! Game state owned by the automaton

use crate::{GameConfig, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for a key to start a run
    #[default]
    Idle,
    /// A problem is shown and the answer is being typed
    Typing,
    /// The answer is complete and graded
    Answer,
    /// The target score was reached
    GameOver,
}

impl Status {
    /// Upper-case name shown in the status line
    pub fn name(&self) -> &'static str {
        match self {
            Status::Idle => "IDLE",
            Status::Typing => "TYPING",
            Status::Answer => "ANSWER",
            Status::GameOver => "GAME_OVER",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An addition problem, `nb1 + nb2 = result`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub nb1: u32,
    pub nb2: u32,
    pub result: u32,
}

impl Problem {
    /// Build a problem from its two addends
    pub fn new(nb1: u32, nb2: u32) -> Self {
        Self {
            nb1,
            nb2,
            result: nb1 + nb2,
        }
    }

    /// Number of decimal digits in the result
    pub fn digits(&self) -> usize {
        self.result.checked_ilog10().map_or(1, |d| d as usize + 1)
    }

    /// Whether `answer` is the result
    pub fn is_answered_by(&self, answer: &str) -> bool {
        answer.parse::<u64>().ok() == Some(u64::from(self.result))
    }

    /// `"{nb1} + {nb2} = "`
    pub fn text(&self) -> String {
        format!("{} + {} = ", self.nb1, self.nb2)
    }
}

/// The complete mutable game record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub status: Status,
    /// Phase before the last transition
    pub prev_status: Status,
    /// Active problem, `None` outside a run
    pub problem: Option<Problem>,
    /// Problem shown before the active one
    pub prev_problem: Option<Problem>,
    /// Digits typed for the active problem
    pub answer: String,
    /// Digits typed for the previous problem
    pub prev_answer: String,
    /// When the current run started
    pub start_time: Option<Timestamp>,
    /// Duration of the last finished run
    pub final_time: Duration,
    /// Duration of the run before that
    pub prev_final_time: Duration,
    /// Correct answers in the current run
    pub score: u32,
    /// Immutable settings
    pub config: GameConfig,
}

impl GameState {
    /// Fresh state: idle, no problem, zero score and times
    pub fn new(config: GameConfig) -> Self {
        Self {
            status: Status::Idle,
            prev_status: Status::Idle,
            problem: None,
            prev_problem: None,
            answer: String::new(),
            prev_answer: String::new(),
            start_time: None,
            final_time: Duration::ZERO,
            prev_final_time: Duration::ZERO,
            score: 0,
            config,
        }
    }

    /// Move to `status`, remembering the previous one
    pub(crate) fn set_status(&mut self, status: Status) {
        self.prev_status = self.status;
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(Status::Idle.to_string(), "IDLE");
        assert_eq!(Status::Typing.to_string(), "TYPING");
        assert_eq!(Status::Answer.to_string(), "ANSWER");
        assert_eq!(Status::GameOver.to_string(), "GAME_OVER");
    }

    #[test]
    fn test_problem_digits() {
        assert_eq!(Problem::new(0, 4).digits(), 1);
        assert_eq!(Problem::new(4, 5).digits(), 1);
        assert_eq!(Problem::new(3, 7).digits(), 2);
        assert_eq!(Problem::new(50, 49).digits(), 2);
        assert_eq!(Problem::new(50, 50).digits(), 3);
    }

    #[test]
    fn test_problem_answer() {
        let problem = Problem::new(6, 6);
        assert!(problem.is_answered_by("12"));
        assert!(!problem.is_answered_by("13"));
        assert!(!problem.is_answered_by(""));
        assert_eq!(problem.text(), "6 + 6 = ");
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::new(4, 5, 1).unwrap());
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.problem, None);
        assert_eq!(state.prev_problem, None);
        assert_eq!(state.score, 0);
        assert_eq!(state.final_time, Duration::ZERO);
        assert_eq!(state.start_time, None);
    }

    #[test]
    fn test_set_status_tracks_previous() {
        let mut state = GameState::new(GameConfig::new(4, 5, 1).unwrap());
        state.set_status(Status::Typing);
        state.set_status(Status::Answer);
        assert_eq!(state.status, Status::Answer);
        assert_eq!(state.prev_status, Status::Typing);
    }
}
