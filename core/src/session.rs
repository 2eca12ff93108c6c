use alloc::string::{String, ToString};

use crate::*;

/// Result of a guess submitted through [`GameSession::submit_guess`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Empty guess, or no round is being played.
    Ignored,
    Wrong,
    Correct(RoundSummary),
}

/// Host-side driver around a [`GameState`]: feeds it clock ticks, judges
/// guesses and hands out hints. Everything still goes through the reducer,
/// the session only decides which actions to dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    state: GameState,
    scheduler: RevealScheduler,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_rules(GameRules::default())
    }

    pub fn with_rules(rules: GameRules) -> Self {
        let scheduler = RevealScheduler::new(&rules);
        Self {
            state: GameState::with_rules(rules),
            scheduler,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Dispatches to the state, restarting the scheduler's clock whenever a
    /// new round starts or the game goes back to the menu.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let new_round = matches!(action, Action::StartGame { .. } | Action::ResetGame);
        let transition = self.state.dispatch(action);
        if new_round && transition.has_update() {
            self.scheduler.reset();
        }
        transition
    }

    pub fn start(&mut self, image: PixelImage, seed: u64) -> Transition {
        self.dispatch(Action::start_game(image, seed))
    }

    /// Starts a round with an image drawn from `catalog`, within the
    /// selected category when it has images.
    pub fn start_from_catalog(&mut self, catalog: &ImageCatalog, seed: u64) -> Result<Transition> {
        let image = match catalog.pick_random_in(self.state.selected_category(), seed) {
            Ok(image) => image,
            Err(GameError::UnknownCategory(category)) => {
                log::warn!("No images in category {category}, picking from all categories");
                catalog.pick_random(seed)?
            }
            Err(err) => return Err(err),
        };
        Ok(self.start(image.clone(), seed))
    }

    /// Feeds an absolute clock reading, returns the summary when this tick
    /// ended the round.
    pub fn tick(&mut self, elapsed_ms: Millis) -> Option<RoundSummary> {
        let was_finished = self.state.status().is_finished();
        for action in self.scheduler.on_tick(self.state.status(), elapsed_ms) {
            self.state.dispatch(action);
        }
        if !was_finished {
            self.state.summary()
        } else {
            None
        }
    }

    /// Advances the clock by `delta_ms` from the last recorded time.
    pub fn advance(&mut self, delta_ms: Millis) -> Option<RoundSummary> {
        let elapsed_ms = self.state.elapsed_ms().saturating_add(delta_ms);
        self.tick(elapsed_ms)
    }

    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        let guess = guess.trim();
        if guess.is_empty() || !self.state.status().is_playing() {
            return GuessOutcome::Ignored;
        }
        let Some(image) = self.state.image() else {
            return GuessOutcome::Ignored;
        };

        if image.matches_guess(guess) {
            self.dispatch(Action::complete(true));
            match self.state.summary() {
                Some(summary) => GuessOutcome::Correct(summary),
                None => GuessOutcome::Ignored,
            }
        } else {
            log::debug!("Wrong guess: {guess}");
            self.dispatch(Action::SubmitGuess(guess.to_string()));
            GuessOutcome::Wrong
        }
    }

    /// Uses a hint and returns its text, `None` once the limit is reached.
    pub fn use_hint(&mut self) -> Option<String> {
        let hint_index = self.state.hints_used();
        let hint = self.state.image()?.hint(hint_index);
        self.dispatch(Action::UseHint).has_update().then_some(hint)
    }

    pub fn pause(&mut self) -> Transition {
        self.dispatch(Action::Pause)
    }

    pub fn resume(&mut self) -> Transition {
        self.dispatch(Action::Resume)
    }

    pub fn reset(&mut self) -> Transition {
        self.dispatch(Action::ResetGame)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn hard_fox() -> PixelImage {
        PixelImage::new("fox-1", "Fox", "animals", "/images/fox.png", 32, Difficulty::Hard).unwrap()
    }

    fn started() -> GameSession {
        let mut session = GameSession::new();
        assert_eq!(session.start(hard_fox(), 11), Transition::Changed);
        session
    }

    #[test]
    fn ticks_advance_time_and_reveal_every_second() {
        let mut session = started();

        for _ in 0..300 {
            assert_eq!(session.advance(10), None);
        }

        assert_eq!(session.state().elapsed_ms(), 3_000);
        assert_eq!(session.state().auto_reveal_counters().fast, 3);
        assert_eq!(session.state().mask().revealed_count(), 36);
    }

    #[test]
    fn round_times_out_at_limit_fully_revealed() {
        let mut session = started();

        let mut summary = None;
        while summary.is_none() {
            summary = session.advance(10);
        }
        let summary = summary.unwrap();

        assert!(!summary.success);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.elapsed_ms, 120_000);
        assert_eq!(session.state().status(), GameStatus::Failed);
        assert!(session.state().mask().is_fully_revealed());
        assert_eq!(session.advance(10), None);
    }

    #[test]
    fn wrong_then_correct_guess() {
        let mut session = started();
        session.advance(20_000);

        assert_eq!(session.submit_guess("   "), GuessOutcome::Ignored);
        assert_eq!(session.submit_guess(" wolf "), GuessOutcome::Wrong);

        let GuessOutcome::Correct(summary) = session.submit_guess("FOX") else {
            panic!("expected a correct guess");
        };
        assert_eq!(summary.score, 100 + 40);
        assert!(summary.success);
        assert_eq!(session.state().guesses(), vec!["wolf"]);
        assert_eq!(session.state().best_score(), 140);
        assert_eq!(session.submit_guess("fox"), GuessOutcome::Ignored);
    }

    #[test]
    fn hints_are_handed_out_until_the_limit() {
        let mut session = started();

        assert_eq!(session.use_hint().as_deref(), Some("Category: animals"));
        assert_eq!(session.use_hint().as_deref(), Some("First letter: F"));
        assert_eq!(session.use_hint().as_deref(), Some("Length: 3 letters"));
        assert_eq!(session.use_hint(), None);
        assert_eq!(session.state().hints_used(), 3);
    }

    #[test]
    fn paused_session_ignores_ticks_and_guesses() {
        let mut session = started();
        session.advance(1_500);
        session.pause();

        assert_eq!(session.advance(5_000), None);
        assert_eq!(session.submit_guess("fox"), GuessOutcome::Ignored);
        assert_eq!(session.state().elapsed_ms(), 1_500);

        session.resume();
        session.advance(500);
        assert_eq!(session.state().elapsed_ms(), 2_000);
        assert_eq!(session.state().auto_reveal_counters().fast, 2);
    }

    #[test]
    fn reset_keeps_best_score() {
        let mut session = started();
        session.submit_guess("fox");
        session.reset();

        assert_eq!(session.state().status(), GameStatus::Menu);
        assert_eq!(session.state().best_score(), 160);
        assert!(session.state().image().is_none());
    }

    #[test]
    fn restart_through_dispatch_restarts_reveal_clock() {
        let mut session = started();
        for _ in 0..50 {
            session.advance(1_000);
        }
        assert_eq!(session.state().auto_reveal_counters().ticks(), 50);

        session.dispatch(Action::start_game(hard_fox(), 12));
        for _ in 0..1_000 {
            session.advance(10);
        }

        assert_eq!(session.state().elapsed_ms(), 10_000);
        assert_eq!(session.state().auto_reveal_counters().ticks(), 10);
        assert_eq!(session.state().mask().revealed_count(), 120);
    }

    #[test]
    fn reset_through_dispatch_restarts_reveal_clock() {
        let mut session = started();
        session.advance(30_000);

        session.dispatch(Action::ResetGame);
        assert_eq!(session.start(hard_fox(), 4), Transition::Changed);
        session.advance(1_000);

        assert_eq!(session.state().auto_reveal_counters().fast, 1);
        assert_eq!(session.state().mask().revealed_count(), 12);
    }

    #[test]
    fn catalog_start_prefers_selected_category() {
        let catalog = ImageCatalog::new(vec![
            hard_fox(),
            PixelImage::new("food/pie", "pie", "food", "/images/pie.png", 8, Difficulty::Easy)
                .unwrap(),
        ]);
        let mut session = GameSession::new();
        session.dispatch(Action::SetCategory("food".into()));

        session.start_from_catalog(&catalog, 5).unwrap();
        assert_eq!(session.state().image().unwrap().name, "pie");

        session.reset();
        session.dispatch(Action::SetCategory("vehicles".into()));
        session.start_from_catalog(&catalog, 5).unwrap();
        assert_eq!(session.state().status(), GameStatus::Playing);

        let mut empty = GameSession::new();
        assert_eq!(
            empty.start_from_catalog(&ImageCatalog::default(), 0),
            Err(GameError::EmptyCatalog)
        );
    }
}
