//! crossterm rendering of view models.
use calcul_core::{Correctness, Screen, ViewModel};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

const COLOR_TITLE: Color = Color::Cyan;
const COLOR_TYPING: Color = Color::DarkGrey;
const COLOR_CORRECT: Color = Color::Green;
const COLOR_INCORRECT: Color = Color::Red;
const COLOR_END: Color = Color::Yellow;

/// Fallback size when the output is not a terminal.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Draws frames on a terminal (or any writer, for tests).
pub struct TerminalScreen<W: Write> {
    out: W,
    width: u16,
    height: u16,
}

impl<W: Write> TerminalScreen<W> {
    /// Screen sized after the current terminal.
    pub fn new(out: W) -> Self {
        let (width, height) = terminal::size().unwrap_or(DEFAULT_SIZE);
        Self::with_size(out, width, height)
    }

    pub fn with_size(out: W, width: u16, height: u16) -> Self {
        Self { out, width, height }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn answer_color(correctness: Correctness) -> Color {
        match correctness {
            Correctness::Pending => COLOR_TYPING,
            Correctness::Correct => COLOR_CORRECT,
            Correctness::Incorrect => COLOR_INCORRECT,
        }
    }

    fn centered_col(&self, text: &str) -> u16 {
        let len = text.chars().count() as u16;
        self.width.saturating_sub(len) / 2
    }

    fn draw_line(
        &mut self,
        row: u16,
        problem: &str,
        problem_color: Color,
        answer: &str,
        answer_color: Color,
        result: &str,
    ) -> io::Result<()> {
        let full = format!("{problem}{answer}{result}");
        let col = self.centered_col(&full);
        queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(problem_color),
            Print(problem),
            SetForegroundColor(answer_color),
            Print(answer),
            SetForegroundColor(COLOR_CORRECT),
            Print(result),
            ResetColor
        )
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    type Error = io::Error;

    fn render(&mut self, view: &ViewModel) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let title_col = self.centered_col(&view.title);
        queue!(
            self.out,
            MoveTo(title_col, 0),
            SetForegroundColor(COLOR_TITLE),
            SetAttribute(Attribute::Bold),
            Print(&view.title),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;

        let middle = self.height / 2;

        if !view.previous_problem_text.is_empty() {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
            self.draw_line(
                middle.saturating_sub(2),
                &view.previous_problem_text,
                Color::Reset,
                &view.previous_answer_text,
                Self::answer_color(view.previous_correctness),
                &view.previous_result_text,
            )?;
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }

        let (problem_color, answer_color) = if view.game_over_emphasis {
            (COLOR_END, COLOR_END)
        } else {
            (Color::Reset, Self::answer_color(view.correctness))
        };
        queue!(self.out, SetAttribute(Attribute::Bold))?;
        self.draw_line(
            middle,
            &view.current_problem_text,
            problem_color,
            &view.current_answer_text,
            answer_color,
            &view.result_text,
        )?;
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        let bottom = self.height.saturating_sub(1);
        let time_len = view.time_line.chars().count() as u16;
        queue!(
            self.out,
            MoveTo(0, bottom),
            Print(&view.status_line),
            MoveTo(self.width.saturating_sub(time_len), bottom),
            Print(&view.time_line)
        )?;

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcul_core::{project, GameConfig, GameState, Problem, Status, Timestamp};

    fn render(view: &ViewModel) -> String {
        let mut screen = TerminalScreen::with_size(Vec::new(), 80, 24);
        screen.render(view).unwrap();
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn test_render_idle() {
        let state = GameState::new(GameConfig::new(4, 5, 1).unwrap());
        let out = render(&project(&state, Timestamp(0)));

        assert!(out.contains("Calcul Mental - Results between 4 and 5"));
        assert!(out.contains("Ready?"));
        assert!(out.contains("Score: 0 / 1 - [IDLE]"));
        assert!(out.contains("[Previous: 00:00] - 00:00"));
    }

    #[test]
    fn test_render_wrong_answer() {
        let mut state = GameState::new(GameConfig::new(4, 5, 2).unwrap());
        state.status = Status::Answer;
        state.problem = Some(Problem::new(1, 3));
        state.prev_problem = Some(Problem::new(2, 3));
        state.prev_answer = "5".to_string();
        state.answer = "9".to_string();
        state.start_time = Some(Timestamp(0));

        let out = render(&project(&state, Timestamp(0)));
        assert!(out.contains("1 + 3 = "));
        assert!(out.contains("2 + 3 = "));
        assert!(out.contains(" (4)"));
        assert!(out.contains("[ANSWER]"));
    }

    #[test]
    fn test_resize_narrow() {
        let state = GameState::new(GameConfig::new(4, 5, 1).unwrap());
        let mut screen = TerminalScreen::with_size(Vec::new(), 80, 24);
        screen.resize(4, 2);
        screen.render(&project(&state, Timestamp(0))).unwrap();
        assert!(!screen.into_inner().is_empty());
    }
}
