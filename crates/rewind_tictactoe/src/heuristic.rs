//! Heuristic machine opponent.
//!
//! A fixed priority chain stands in for search: win if possible, otherwise
//! block, otherwise take the center, a corner, then a side. Only the corner
//! and side tiers use randomness, drawn from a caller-supplied [`Rng`].

use super::rules::WINNING_LINES;
use super::{Board, CellKind, Player, Position, Square};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Which tier of the priority chain produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Rule {
    /// Completes a line for the machine.
    #[strum(serialize = "win")]
    Win,
    /// Fills the opponent's open two-in-a-line.
    #[strum(serialize = "block")]
    Block,
    /// Takes the middle cell.
    #[strum(serialize = "center")]
    Center,
    /// Takes a random free corner.
    #[strum(serialize = "corner")]
    Corner,
    /// Takes a random free side.
    #[strum(serialize = "side")]
    Side,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Tier that fired.
    pub rule: Rule,
}

/// Finds the cell that completes a line for `mark`.
///
/// Scans [`WINNING_LINES`] in order for a line holding two of `mark` and one
/// empty cell, returning that cell. Used for both winning and blocking.
pub fn find_critical_move(board: &Board, mark: Player) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        let empty = line.iter().copied().find(|pos| board.is_empty(*pos));
        if owned == 2 { empty } else { None }
    })
}

/// Runs the priority chain and reports which rule fired.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn decide<R: Rng + ?Sized>(board: &Board, machine: Player, rng: &mut R) -> Option<Decision> {
    let decision = if let Some(position) = find_critical_move(board, machine) {
        Decision { position, rule: Rule::Win }
    } else if let Some(position) = find_critical_move(board, machine.opponent()) {
        Decision { position, rule: Rule::Block }
    } else if board.is_empty(Position::Center) {
        Decision {
            position: Position::Center,
            rule: Rule::Center,
        }
    } else if let Some(position) = pick_free(board, CellKind::Corner, rng) {
        Decision { position, rule: Rule::Corner }
    } else if let Some(position) = pick_free(board, CellKind::Side, rng) {
        Decision { position, rule: Rule::Side }
    } else {
        debug!("No free squares");
        return None;
    };

    debug!(position = %decision.position, rule = %decision.rule, "Heuristic move");
    Some(decision)
}

/// Picks the machine's next cell, or `None` when the board is full.
pub fn select_move<R: Rng + ?Sized>(board: &Board, machine: Player, rng: &mut R) -> Option<Position> {
    decide(board, machine, rng).map(|decision| decision.position)
}

fn pick_free<R: Rng + ?Sized>(board: &Board, kind: CellKind, rng: &mut R) -> Option<Position> {
    let free: Vec<Position> = Position::valid_moves(board)
        .into_iter()
        .filter(|pos| pos.kind() == kind)
        .collect();
    free.choose(rng).copied()
}

/// The heuristic bundled with its own random source.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent {
    mark: Player,
    rng: StdRng,
}

impl HeuristicOpponent {
    /// Creates an opponent seeded from the operating system.
    pub fn new(mark: Player) -> Self {
        Self {
            mark,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an opponent with a deterministic seed.
    pub fn with_seed(mark: Player, seed: u64) -> Self {
        Self {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The mark this opponent plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Chooses a move on `board`.
    pub fn decide(&mut self, board: &Board) -> Option<Decision> {
        decide(board, self.mark, &mut self.rng)
    }

    /// Chooses a cell on `board`.
    pub fn select_move(&mut self, board: &Board) -> Option<Position> {
        select_move(board, self.mark, &mut self.rng)
    }
}
