//! Self-play checks that the heuristic never passes up a win or a block.

use rewind::selfplay::{play_game, run};
use rewind_tictactoe::{HeuristicOpponent, Player, find_critical_move};

#[test]
fn test_heuristic_takes_every_win_and_block() {
    for seed in 0..100 {
        let mut x = HeuristicOpponent::with_seed(Player::X, seed);
        let mut o = HeuristicOpponent::with_seed(Player::O, seed + 1000);
        let timeline = play_game(&mut x, &mut o);

        for k in 1..timeline.len() {
            let before = &timeline.history()[k - 1];
            let played = timeline.move_at(k).unwrap();
            if let Some(win) = find_critical_move(before, played.player) {
                assert_eq!(played.position, win, "seed {seed}: missed a win at move {k}");
            } else if let Some(block) = find_critical_move(before, played.player.opponent()) {
                assert_eq!(played.position, block, "seed {seed}: missed a block at move {k}");
            }
        }
    }
}

#[test]
fn test_tally_reports_as_json() {
    let tally = run(10, 17);
    let json = serde_json::to_value(tally).unwrap();
    let total: u64 = ["x_wins", "o_wins", "draws"]
        .iter()
        .map(|key| json[key].as_u64().unwrap())
        .sum();
    assert_eq!(total, 10);
}
