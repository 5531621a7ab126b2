use crate::board::Board;
use crate::claim::is_selectable;
use crate::rng::GameRng;

/// How many uniform draws the generator spends looking for one cell
/// before giving up. Keeps a nearly-full board from looping forever.
const RETRY_BUDGET: usize = 200;

/// Cumulative thresholds for the claim size draw over {1, 2, 3, 4}:
/// P(1)=0.2, P(2)=0.3, P(3)=0.4, P(4)=0.1.
const SIZE_THRESHOLDS: [f64; 3] = [0.2, 0.5, 0.9];

/// The opponent actor: produces a claim against the censored board and
/// decides how long it pretends to think before answering.
pub trait ClaimGenerator: Send + Sync {
    /// Returns a contiguous set of empty-cell indices, possibly empty.
    /// Never mutates game state; the board passed in has the player's
    /// tentative marks already stripped.
    fn claim(&mut self, board: &Board) -> Vec<usize>;

    /// Delay before the claim is revealed, in milliseconds.
    fn think_delay_ms(&mut self) -> u32;
}

/// Default opponent: randomized contiguous cluster with bounded retries.
pub struct RandomClaimGenerator {
    rng: GameRng,
}

impl RandomClaimGenerator {
    pub fn new() -> Self {
        Self {
            rng: GameRng::new(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: GameRng::from_seed(seed),
        }
    }

    fn draw_claim_size(&mut self) -> usize {
        let roll = self.rng.unit();
        match SIZE_THRESHOLDS.iter().position(|&t| roll < t) {
            Some(bucket) => bucket + 1,
            None => 4,
        }
    }

    /// Up to `RETRY_BUDGET` uniform draws; first index passing `accept` wins.
    fn find_cell(&mut self, board: &Board, accept: impl Fn(usize) -> bool) -> Option<usize> {
        let len = board.grid().len();
        for _ in 0..RETRY_BUDGET {
            let index = self.rng.index(len);
            if accept(index) {
                return Some(index);
            }
        }
        None
    }
}

impl Default for RandomClaimGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimGenerator for RandomClaimGenerator {
    fn claim(&mut self, board: &Board) -> Vec<usize> {
        let attempted = self.draw_claim_size();
        let grid = board.grid();
        let mut claim = Vec::with_capacity(attempted);

        // Seed cell: any empty square. Exhaustion means the bot sits this
        // round out with an empty claim.
        match self.find_cell(board, |index| board.is_empty_at(index)) {
            Some(seed) => claim.push(seed),
            None => return claim,
        }

        // Grow the cluster one cell at a time; stop early when the budget
        // runs out rather than restarting the whole claim.
        for _ in 1..attempted {
            let found = self.find_cell(board, |index| {
                board.is_empty_at(index) && is_selectable(grid, &claim, index)
            });
            match found {
                Some(index) => claim.push(index),
                None => break,
            }
        }

        claim
    }

    fn think_delay_ms(&mut self) -> u32 {
        self.rng.range_u32(1000, 6000)
    }
}
