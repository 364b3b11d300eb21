//! Projection of the game state into display-ready text

use crate::time::format_mm_ss;
use crate::{GameState, Problem, Status, Timestamp};
use serde::{Deserialize, Serialize};

/// Coloring hint for an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Correctness {
    /// Still being typed, or nothing to show
    #[default]
    Pending,
    Correct,
    Incorrect,
}

/// Everything a screen needs to draw one frame
///
/// Blank strings mean "show nothing". `result_text` is always drawn as
/// correct, next to an incorrect answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewModel {
    pub title: String,
    pub status: Status,

    pub current_problem_text: String,
    pub current_answer_text: String,
    pub correctness: Correctness,
    pub result_text: String,
    pub game_over_emphasis: bool,

    pub previous_problem_text: String,
    pub previous_answer_text: String,
    pub previous_correctness: Correctness,
    pub previous_result_text: String,

    pub status_line: String,
    pub time_line: String,
}

/// Text shown while waiting for the first key of a run
pub const READY_PROMPT: &str = "Ready?";

/// Placeholder shown before any digit is typed
pub const EMPTY_ANSWER: &str = "?";

/// Derive the view of `state` at time `now`
pub fn project(state: &GameState, now: Timestamp) -> ViewModel {
    let mut view = ViewModel {
        title: state.config.title(),
        status: state.status,
        status_line: format!(
            "Score: {} / {} - [{}]",
            state.score,
            state.config.score_max(),
            state.status
        ),
        time_line: time_line(state, now),
        ..ViewModel::default()
    };

    match (state.status, state.problem) {
        (Status::Idle, _) | (_, None) => {
            view.current_problem_text = READY_PROMPT.to_string();
        }
        (Status::Typing, Some(problem)) => {
            view.current_problem_text = problem.text();
            view.current_answer_text = if state.answer.is_empty() {
                EMPTY_ANSWER.to_string()
            } else {
                state.answer.clone()
            };
        }
        (Status::Answer | Status::GameOver, Some(problem)) => {
            let graded = grade(&problem, &state.answer);
            view.current_problem_text = problem.text();
            view.current_answer_text = state.answer.clone();
            view.correctness = graded.correctness;
            view.result_text = graded.result_text;
            view.game_over_emphasis = state.status == Status::GameOver;
        }
    }

    if let Some(prev) = state.prev_problem {
        let graded = grade(&prev, &state.prev_answer);
        view.previous_problem_text = prev.text();
        view.previous_answer_text = state.prev_answer.clone();
        view.previous_correctness = graded.correctness;
        view.previous_result_text = graded.result_text;
    }

    view
}

struct Graded {
    correctness: Correctness,
    result_text: String,
}

fn grade(problem: &Problem, answer: &str) -> Graded {
    if problem.is_answered_by(answer) {
        Graded {
            correctness: Correctness::Correct,
            result_text: String::new(),
        }
    } else {
        Graded {
            correctness: Correctness::Incorrect,
            result_text: format!(" ({})", problem.result),
        }
    }
}

fn time_line(state: &GameState, now: Timestamp) -> String {
    match state.status {
        Status::Idle | Status::GameOver => format!(
            "[Previous: {}] - {}",
            format_mm_ss(state.prev_final_time),
            format_mm_ss(state.final_time)
        ),
        Status::Typing | Status::Answer => {
            let elapsed = state
                .start_time
                .map(|start| now.elapsed_since(start))
                .unwrap_or_default();
            format_mm_ss(elapsed)
        }
    }
}
