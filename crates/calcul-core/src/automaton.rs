//! The game automaton: key events in, view models out
//!
//! ```text
//! Idle --any key--> Typing --digits--> Answer --any key--> Typing ...
//!                          \--score reached--> GameOver --any key--> Idle
//! ```

use crate::{
    project, Clock, GameConfig, GameState, Key, Problem, RandomSource, Status, ViewModel,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, trace};

/// A status change caused by one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Status,
    pub to: Status,
}

/// Result of handling a key
#[derive(Debug, Clone)]
pub struct UpdateResult {
    /// Status change, if the key caused one
    pub transition: Option<Transition>,
    /// View after the key was applied
    pub view: ViewModel,
}

/// The arithmetic drill state machine
///
/// Owns the game state exclusively. Time comes from `C`, randomness
/// from `R`; both are injected so runs can be replayed exactly.
pub struct Game<C, R> {
    state: GameState,
    clock: C,
    rng: R,
    /// Whether the periodic refresh timer should be running
    ticking: bool,
}

impl<C: Clock, R: RandomSource> Game<C, R> {
    /// Create an idle game
    pub fn new(config: GameConfig, clock: C, rng: R) -> Self {
        Self {
            state: GameState::new(config),
            clock,
            rng,
            ticking: false,
        }
    }

    /// Apply one key press
    pub fn on_key(&mut self, key: Key) -> UpdateResult {
        let from = self.state.status;

        match from {
            Status::Idle => {
                self.start_run();
                self.next_problem();
            }
            Status::Answer => self.next_problem(),
            Status::Typing => self.type_key(key),
            Status::GameOver => self.reset(),
        }

        let to = self.state.status;
        let transition = (from != to).then(|| {
            debug!(%from, %to, score = self.state.score, "transition");
            Transition { from, to }
        });

        UpdateResult {
            transition,
            view: self.view(),
        }
    }

    /// Periodic refresh; only re-derives the view
    pub fn on_tick(&self) -> ViewModel {
        trace!(status = %self.state.status, "tick");
        self.view()
    }

    /// Current view
    pub fn view(&self) -> ViewModel {
        project(&self.state, self.clock.now())
    }

    /// Read-only access to the state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current status
    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Settings of this game
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// Whether the elapsed-time display needs periodic refreshes
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    fn start_run(&mut self) {
        let now = self.clock.now();
        self.state.start_time = Some(now);
        self.state.prev_final_time = self.state.final_time;
        self.state.final_time = Duration::ZERO;
        self.state.score = 0;
        self.ticking = true;
        info!(
            res_min = self.state.config.res_min(),
            res_max = self.state.config.res_max(),
            score_max = self.state.config.score_max(),
            "run started"
        );
    }

    /// Draw a new problem whose addends both differ from the current one
    fn next_problem(&mut self) {
        let prev = self.state.problem;
        self.state.prev_problem = prev;
        self.state.prev_answer = std::mem::take(&mut self.state.answer);

        let (res_min, res_max) = (self.state.config.res_min(), self.state.config.res_max());
        let mut attempts = 0u32;
        let problem = loop {
            attempts += 1;
            let result = self.rng.draw(res_min, res_max);
            let nb1 = self.rng.draw(0, result);
            let candidate = Problem {
                nb1,
                nb2: result - nb1,
                result,
            };
            match prev {
                Some(p) if candidate.nb1 == p.nb1 || candidate.nb2 == p.nb2 => continue,
                _ => break candidate,
            }
        };

        debug!(
            nb1 = problem.nb1,
            nb2 = problem.nb2,
            attempts,
            "new problem"
        );
        self.state.problem = Some(problem);
        self.state.set_status(Status::Typing);
    }

    fn type_key(&mut self, key: Key) {
        let Some(problem) = self.state.problem else {
            return;
        };

        match key {
            Key::Digit(_) => {
                if let Some(c) = key.as_digit_char() {
                    if self.state.answer.len() < problem.digits() {
                        self.state.answer.push(c);
                    }
                }
            }
            Key::Backspace => {
                self.state.answer.pop();
            }
            Key::Other => {}
        }

        if self.state.answer.len() >= problem.digits() {
            self.finalize(problem);
        }
    }

    fn finalize(&mut self, problem: Problem) {
        if problem.is_answered_by(&self.state.answer) {
            self.state.score += 1;
        }

        if self.state.score >= self.state.config.score_max() {
            let now = self.clock.now();
            let elapsed = self
                .state
                .start_time
                .map(|start| now.elapsed_since(start))
                .unwrap_or_default();
            self.state.final_time = elapsed;
            self.state.set_status(Status::GameOver);
            info!(elapsed_ms = elapsed.as_millis() as u64, "run finished");
        } else {
            self.state.set_status(Status::Answer);
        }
    }

    /// Back to idle; run times survive so the idle screen can show them
    fn reset(&mut self) {
        self.state.score = 0;
        self.state.problem = None;
        self.state.prev_problem = None;
        self.state.answer.clear();
        self.state.prev_answer.clear();
        self.state.start_time = None;
        self.ticking = false;
        self.state.set_status(Status::Idle);
    }
}
