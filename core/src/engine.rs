use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// What a dispatched action did to the state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The precondition did not hold, the state is untouched.
    Rejected,
    /// The action was accepted but nothing changed.
    NoChange,
    Changed,
}

impl Transition {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Rejected | Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

impl GameState {
    /// Applies `action` to a copy of this state and returns the copy.
    #[must_use]
    pub fn reduce(&self, action: Action) -> Self {
        let mut next = self.clone();
        next.dispatch(action);
        next
    }

    /// Applies `action` in place. Every action yields a valid state: actions
    /// whose precondition fails leave it unchanged.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        use Action::*;

        let name = action.name();
        if self.status.is_finished() && !matches!(action, ResetGame) {
            log::warn!("Ignoring {name}, the round already ended");
            return Transition::Rejected;
        }

        let transition = match action {
            StartGame {
                image,
                category,
                seed,
            } => self.start_game(image, category, seed),
            RevealPixel { row, col } => self.reveal_pixel((row, col)),
            SubmitGuess(guess) => self.submit_guess(guess),
            UseHint => self.use_hint(),
            UpdateTime(elapsed_ms) => self.update_time(elapsed_ms),
            CompleteGame { success } => self.complete_game(success),
            ResetGame => self.reset_game(),
            AutoRevealPixels => self.auto_reveal_pixels(),
            SetCategory(category) => self.set_category(category),
            Pause => self.pause(),
            Resume => self.resume(),
            Unrecognized => {
                log::debug!("Unrecognized action, state unchanged");
                Transition::NoChange
            }
        };

        if transition == Transition::Rejected {
            log::warn!("Rejected {name} while {:?}", self.status);
        }
        transition
    }

    fn start_game(&mut self, image: PixelImage, category: String, seed: u64) -> Transition {
        if image.validate().is_err() {
            return Transition::Rejected;
        }

        log::debug!(
            "Starting round: {} ({}, {}x{}, {})",
            image.id,
            category,
            image.grid_size,
            image.grid_size,
            image.difficulty
        );
        self.mask = RevealMask::new(image.grid_size);
        self.image = Some(image);
        self.selected_category = category;
        self.status = GameStatus::Playing;
        self.score = 0;
        self.hints_used = 0;
        self.elapsed_ms = 0;
        self.guesses.clear();
        self.auto_reveal = AutoRevealCounters::default();
        self.seed = seed;
        Transition::Changed
    }

    fn reveal_pixel(&mut self, coords: Coord2) -> Transition {
        if !self.status.is_playing() {
            return Transition::Rejected;
        }

        match self.mask.reveal(coords) {
            Ok(true) => {
                log::trace!("Revealed cell at {:?}", coords);
                Transition::Changed
            }
            Ok(false) => Transition::NoChange,
            Err(_) => Transition::Rejected,
        }
    }

    fn submit_guess(&mut self, guess: String) -> Transition {
        if !self.status.is_playing() {
            return Transition::Rejected;
        }

        self.guesses.push(guess);
        Transition::Changed
    }

    fn use_hint(&mut self) -> Transition {
        if !self.status.is_playing() || self.hints_used >= self.rules.hint_limit {
            return Transition::Rejected;
        }

        self.hints_used += 1;
        self.score = self.score.saturating_sub(self.rules.hint_penalty);
        Transition::Changed
    }

    fn update_time(&mut self, elapsed_ms: Millis) -> Transition {
        if !self.status.is_playing() || elapsed_ms < self.elapsed_ms {
            return Transition::Rejected;
        }
        if elapsed_ms == self.elapsed_ms {
            return Transition::NoChange;
        }

        self.elapsed_ms = elapsed_ms;
        Transition::Changed
    }

    fn complete_game(&mut self, success: bool) -> Transition {
        if !self.status.is_playing() {
            return Transition::Rejected;
        }
        let Some(image) = &self.image else {
            return Transition::Rejected;
        };

        let breakdown = ScoreBreakdown::compute(
            &self.rules,
            image.difficulty,
            self.elapsed_ms,
            self.hints_used,
            success,
        );
        self.score = breakdown.total;
        self.best_score = self.best_score.max(breakdown.total);
        self.status = if success {
            GameStatus::Completed
        } else {
            GameStatus::Failed
        };

        log::debug!(
            "Round {} after {} ms: {:?}, best score {}",
            if success { "won" } else { "lost" },
            self.elapsed_ms,
            breakdown,
            self.best_score
        );
        Transition::Changed
    }

    fn reset_game(&mut self) -> Transition {
        let rules = core::mem::take(&mut self.rules);
        let best_score = self.best_score;
        *self = Self {
            best_score,
            ..Self::with_rules(rules)
        };
        log::debug!("Back to menu, best score {best_score}");
        Transition::Changed
    }

    fn auto_reveal_pixels(&mut self) -> Transition {
        if !self.status.is_playing() || self.image.is_none() {
            return Transition::Rejected;
        }

        let (kind, batch_size) = self.auto_reveal.next_batch(&self.rules);
        let picker = RandomCellPicker::for_tick(self.seed, self.auto_reveal.ticks());
        let picked: Vec<Coord2> = picker.pick(&self.mask, batch_size);
        let mut revealed = 0;
        for coords in picked {
            if let Ok(true) = self.mask.reveal(coords) {
                revealed += 1;
            }
        }
        self.auto_reveal.record(kind);

        log::trace!(
            "Auto-reveal tick {} ({:?}) revealed {} cells, progress {:.1}%",
            self.auto_reveal.ticks(),
            kind,
            revealed,
            self.mask.progress()
        );
        Transition::Changed
    }

    fn set_category(&mut self, category: String) -> Transition {
        if self.selected_category == category {
            return Transition::NoChange;
        }
        self.selected_category = category;
        Transition::Changed
    }

    fn pause(&mut self) -> Transition {
        if !self.status.is_playing() {
            return Transition::Rejected;
        }
        self.status = GameStatus::Paused;
        log::debug!("Paused at {} ms", self.elapsed_ms);
        Transition::Changed
    }

    fn resume(&mut self) -> Transition {
        if !matches!(self.status, GameStatus::Paused) {
            return Transition::Rejected;
        }
        self.status = GameStatus::Playing;
        log::debug!("Resumed at {} ms", self.elapsed_ms);
        Transition::Changed
    }
}
