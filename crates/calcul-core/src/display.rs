//! Rendering seam between the automaton and a front end

use crate::ViewModel;

/// A surface that draws view models
///
/// Front ends implement this for their rendering technology. The
/// automaton never calls it; the event loop passes each new view in.
pub trait Screen {
    type Error;

    /// Draw one frame
    fn render(&mut self, view: &ViewModel) -> Result<(), Self::Error>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    type Error = S::Error;

    fn render(&mut self, view: &ViewModel) -> Result<(), Self::Error> {
        (**self).render(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, GameConfig, GameRng, Key, ManualClock, Status};
    use std::convert::Infallible;

    #[derive(Default)]
    struct RecordingScreen {
        frames: Vec<ViewModel>,
    }

    impl Screen for RecordingScreen {
        type Error = Infallible;

        fn render(&mut self, view: &ViewModel) -> Result<(), Infallible> {
            self.frames.push(view.clone());
            Ok(())
        }
    }

    fn drive<S: Screen>(screen: &mut S, view: &ViewModel) -> Result<(), S::Error> {
        screen.render(view)
    }

    #[test]
    fn test_screen_receives_each_view() {
        let config = GameConfig::new(4, 9, 2).unwrap();
        let mut game = Game::new(config, ManualClock::new(), GameRng::new(3));
        let mut screen = RecordingScreen::default();

        drive(&mut screen, &game.view()).unwrap();
        let update = game.on_key(Key::Other);
        drive(&mut &mut screen, &update.view).unwrap();
        drive(&mut screen, &game.on_tick()).unwrap();

        assert_eq!(screen.frames.len(), 3);
        assert_eq!(screen.frames[0].status, Status::Idle);
        assert_eq!(screen.frames[1].status, Status::Typing);
        assert_eq!(screen.frames[1], screen.frames[2]);
    }
}
