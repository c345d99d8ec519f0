//! Headless machine-versus-machine games.

use rewind_tictactoe::{GameMode, HeuristicOpponent, Outcome, Player, Timeline};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Results of a batch of self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Plays one game with the heuristic on both sides.
///
/// Returns the finished timeline.
pub fn play_game(x: &mut HeuristicOpponent, o: &mut HeuristicOpponent) -> Timeline {
    let mut timeline = Timeline::new(GameMode::PlayerVsPlayer);
    while !timeline.outcome().is_terminal() {
        let side = match timeline.to_move() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let Some(decision) = side.decide(timeline.current()) else {
            break;
        };
        if let Err(e) = timeline.play(decision.position) {
            debug!(error = %e, "Heuristic move rejected");
            break;
        }
    }
    timeline
}

/// Plays `games` games and tallies the results.
///
/// Each side gets its own random stream derived from `seed`.
#[instrument]
pub fn run(games: u32, seed: u64) -> Tally {
    let mut x = HeuristicOpponent::with_seed(Player::X, seed);
    let mut o = HeuristicOpponent::with_seed(Player::O, seed.wrapping_add(1));
    let mut tally = Tally::default();

    for game in 0..games {
        let timeline = play_game(&mut x, &mut o);
        let outcome = timeline.outcome();
        debug!(
            game,
            moves = timeline.len() - 1,
            ?outcome,
            "Self-play game finished\n{}",
            timeline.current().display()
        );
        tally.record(&outcome);
    }

    info!(
        x_wins = tally.x_wins,
        o_wins = tally.o_wins,
        draws = tally.draws,
        "Self-play complete"
    );
    tally
}
