use crate::board::{Board, Owner};
use crate::bot::{ClaimGenerator, RandomClaimGenerator};
use crate::claim::{Outcome, compare_claims, is_selectable};
use crate::types::{GameSnapshot, ModeSnapshot};

pub const DEFAULT_WIDTH: usize = 6;
pub const DEFAULT_HEIGHT: usize = 6;

/// Where a round stands. Strictly linear per round:
/// `Editing -> AwaitingOpponent -> Comparing -> Editing` (next day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundMode {
    Editing,
    AwaitingOpponent {
        self_claim: Vec<usize>,
        /// Board with the player's tentative marks stripped; this is the
        /// only view the opponent ever sees.
        censored: Board,
        delay_ms: u32,
    },
    Comparing {
        self_claim: Vec<usize>,
        opponent_claim: Vec<usize>,
        outcome: Outcome,
    },
}

/// Render collaborator: notified with a fresh snapshot after every state
/// mutation. Must not call back into the game.
pub trait RenderSink: Send {
    fn state_changed(&mut self, snapshot: &GameSnapshot);
}

/// The round resolver. Owns the board, the mode, and the day counter;
/// the opponent actor is injected behind [`ClaimGenerator`].
pub struct GameInstance {
    board: Board,
    selection: Vec<usize>,
    mode: RoundMode,
    day: u32,
    opponent: Box<dyn ClaimGenerator>,
    sink: Option<Box<dyn RenderSink>>,
}

impl GameInstance {
    pub fn new(width: usize, height: usize, opponent: Box<dyn ClaimGenerator>) -> Self {
        Self {
            board: Board::new(width, height),
            selection: Vec::new(),
            mode: RoundMode::Editing,
            day: 1,
            opponent,
            sink: None,
        }
    }

    pub fn new_with_default_opponent(width: usize, height: usize) -> Self {
        Self::new(width, height, Box::new(RandomClaimGenerator::new()))
    }

    pub fn set_render_sink(&mut self, sink: Box<dyn RenderSink>) {
        self.sink = Some(sink);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> &RoundMode {
        &self.mode
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Adds one cell to the round's selection.
    ///
    /// Out-of-range indices are a caller contract violation. Everything
    /// else that cannot proceed (wrong mode, occupied cell, non-contiguous
    /// candidate) is a harmless stale click and no-ops.
    pub fn place(&mut self, index: usize) -> Result<(), String> {
        if !self.board.grid().in_range(index) {
            return Err(format!(
                "index {index} out of range for {}x{} board",
                self.board.grid().width(),
                self.board.grid().height()
            ));
        }
        if self.mode != RoundMode::Editing {
            return Ok(());
        }
        if !self.board.is_empty_at(index) {
            return Ok(());
        }
        if !is_selectable(self.board.grid(), &self.selection, index) {
            return Ok(());
        }

        self.board = self.board.place_tentative(index, Owner::Player);
        self.selection.push(index);
        self.notify();
        Ok(())
    }

    /// Clears the in-progress selection. No-op outside `Editing`.
    pub fn erase_all(&mut self) {
        if self.mode != RoundMode::Editing {
            return;
        }
        self.board = self.board.strip_tentative();
        self.selection.clear();
        self.notify();
    }

    /// Locks the current selection in as this round's claim and starts
    /// waiting for the opponent. No-op when the selection is empty or the
    /// round is already past editing.
    pub fn submit(&mut self) {
        if self.mode != RoundMode::Editing || self.selection.is_empty() {
            return;
        }

        let delay_ms = self.opponent.think_delay_ms();
        self.mode = RoundMode::AwaitingOpponent {
            self_claim: self.selection.clone(),
            censored: self.board.strip_tentative(),
            delay_ms,
        };
        self.notify();
    }

    /// Completes the opponent wait: runs the claim generator against the
    /// censored board and compares the two claims. Driven by the host's
    /// timer once the advertised delay elapses. No-op unless awaiting.
    pub fn opponent_turn(&mut self) {
        if !matches!(self.mode, RoundMode::AwaitingOpponent { .. }) {
            return;
        }
        let RoundMode::AwaitingOpponent {
            self_claim,
            censored,
            ..
        } = std::mem::replace(&mut self.mode, RoundMode::Editing)
        else {
            unreachable!("mode checked above");
        };

        let opponent_claim = self.opponent.claim(&censored);
        debug_assert!(
            opponent_claim
                .iter()
                .all(|&index| censored.grid().in_range(index)),
            "opponent claim out of range"
        );

        let outcome = compare_claims(&self_claim, &opponent_claim);
        self.mode = RoundMode::Comparing {
            self_claim,
            opponent_claim,
            outcome,
        };
        self.notify();
    }

    /// Player acknowledgment of the compared round: applies the outcome,
    /// advances the day, and opens the next round. No-op outside
    /// `Comparing`.
    ///
    /// The self step runs first, the opponent overlay second, so the
    /// opponent keeps any contested index both steps touch.
    pub fn finalize(&mut self) {
        if !matches!(self.mode, RoundMode::Comparing { .. }) {
            return;
        }
        let RoundMode::Comparing {
            opponent_claim,
            outcome,
            ..
        } = std::mem::replace(&mut self.mode, RoundMode::Editing)
        else {
            unreachable!("mode checked above");
        };

        self.board = if outcome.self_wins {
            self.board.finalize_all()
        } else {
            self.board.strip_tentative()
        };
        // The overlay is applied whenever the opponent claimed anything,
        // independent of the reported outcome flags.
        self.board = self.board.overlay(&opponent_claim, Owner::Rival);

        self.selection.clear();
        self.day += 1;
        self.notify();
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        let mode = match &self.mode {
            RoundMode::Editing => ModeSnapshot::Editing,
            RoundMode::AwaitingOpponent { delay_ms, .. } => ModeSnapshot::AwaitingOpponent {
                delay_ms: *delay_ms,
            },
            RoundMode::Comparing {
                opponent_claim,
                outcome,
                ..
            } => ModeSnapshot::Comparing {
                opponent_claim: opponent_claim.clone(),
                outcome: *outcome,
            },
        };

        GameSnapshot {
            width: self.board.grid().width(),
            height: self.board.grid().height(),
            board: self.board.to_array(),
            selection: self.selection.clone(),
            day: self.day,
            mode,
        }
    }

    fn notify(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let snapshot = self.to_snapshot();
        if let Some(sink) = self.sink.as_mut() {
            sink.state_changed(&snapshot);
        }
    }
}
