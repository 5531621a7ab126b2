use serde::Serialize;

use crate::claim::Outcome;

/// Resolution phase exposed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeSnapshot {
    Editing,
    /// Contract: the host schedules a single timer for `delay_ms` and then
    /// calls `opponent_turn()` exactly once. There is no cancellation.
    AwaitingOpponent { delay_ms: u32 },
    /// Contract: `opponent_claim` lists the rival's submitted indices so the
    /// renderer can show the contested round before `finalize()` applies it.
    Comparing {
        opponent_claim: Vec<usize>,
        outcome: Outcome,
    },
}

/// Public game state returned after every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Flat row-major cell codes:
    /// 0=empty, 1=player tentative, 2=player finalized, 3=rival finalized.
    pub board: Vec<u8>,
    /// The player's in-progress selection for this round.
    pub selection: Vec<usize>,
    pub day: u32,
    pub mode: ModeSnapshot,
}
