//! Screen navigation shell: start menu, play screen, game-over screen.
//!
//! Tagged-union "current screen" with an explicit transition table,
//! driven by the terminal event the session engine emits. The engine
//! itself knows nothing about screens.

use pg_core::SessionEnd;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Play,
    GameOver,
}

impl Screen {
    /// Transition table: Start begins a game, Play ends into the
    /// game-over screen or back to the menu, GameOver restarts or
    /// returns to the menu.
    pub fn can_transition(self, to: Screen) -> bool {
        use Screen::*;
        matches!(
            (self, to),
            (Start, Play) | (Play, GameOver) | (Play, Start) | (GameOver, Play) | (GameOver, Start)
        )
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Start
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    current: Screen,
    last_final_score: Option<u32>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Final score carried across to the game-over screen.
    pub fn last_final_score(&self) -> Option<u32> {
        self.last_final_score
    }

    pub fn show(&mut self, to: Screen) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.current.can_transition(to),
            "invalid screen transition {:?} -> {:?}",
            self.current,
            to
        );
        self.current = to;
        Ok(())
    }

    /// Terminal event from the session engine: route to game-over.
    pub fn session_ended(&mut self, end: &SessionEnd) {
        self.last_final_score = Some(end.final_score);
        self.current = Screen::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_core::EndReason;

    #[test]
    fn test_happy_path_transitions() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Start);
        nav.show(Screen::Play).unwrap();
        nav.session_ended(&SessionEnd {
            final_score: 3,
            reason: EndReason::TimedOut,
        });
        assert_eq!(nav.current(), Screen::GameOver);
        assert_eq!(nav.last_final_score(), Some(3));
        nav.show(Screen::Play).unwrap();
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut nav = Navigator::new();
        assert!(nav.show(Screen::GameOver).is_err());
        assert!(nav.show(Screen::Start).is_err());
        nav.show(Screen::Play).unwrap();
        assert!(nav.show(Screen::Play).is_err());
    }

    #[test]
    fn test_manual_exit_back_to_menu() {
        let mut nav = Navigator::new();
        nav.show(Screen::Play).unwrap();
        nav.show(Screen::Start).unwrap();
        // No terminal event was emitted, so no score was carried over.
        assert_eq!(nav.last_final_score(), None);
    }
}
