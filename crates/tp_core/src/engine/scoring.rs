//! Score transition: the per-point state machine.
//!
//! Standard no-tie-break rules. Regular phase counts points 0-3; 3-all
//! enters deuce with both counters pinned at 3; from deuce a player must win
//! two points in a row (advantage, then game). A set ends at >=6 games with
//! a two-game margin, a match once a player holds more than half of the
//! `bestOf` sets.

use rand::Rng;

use crate::models::{GameState, MatchState, PlayerId, PointType, SetState};

use super::{rally, statistics};

/// Serve speed band for serve outcomes, km/h (upper bound exclusive).
const SERVE_SPEED_KMH: std::ops::Range<u32> = 160..200;

/// Apply one point outcome to a match snapshot and return the next state.
///
/// Total over its inputs: unknown point categories award a generic point and
/// no input combination fails. The caller's snapshot is never touched; the
/// transition works on an owned copy.
pub fn apply_point<R: Rng>(
    state: &MatchState,
    player: PlayerId,
    point_type: PointType,
    rng: &mut R,
) -> MatchState {
    let mut next = state.clone();

    statistics::record_point(&mut next, player, point_type);
    next.last_point = rally::generate_visualization(player, point_type, rng);

    let game = &mut next.current_game;
    let game_won = if !game.deuce {
        *game.points_mut(player) += 1;

        if game.player1_points >= 3
            && game.player2_points >= 3
            && game.player1_points == game.player2_points
        {
            game.deuce = true;
            game.advantage = None;
            game.player1_points = 3;
            game.player2_points = 3;
            false
        } else {
            game.points(player) >= 4 && game.points(player) >= game.points(player.opponent()) + 2
        }
    } else if game.advantage == Some(player) {
        true
    } else if game.advantage.is_none() {
        game.advantage = Some(player);
        false
    } else {
        // Opponent held advantage: back to deuce-even, not a reversed advantage.
        game.advantage = None;
        false
    };

    if game_won {
        win_game(&mut next, player);
        return next;
    }

    if point_type.is_serve_outcome() {
        next.last_point.serve_speed = Some(rng.gen_range(SERVE_SPEED_KMH));
    }

    next
}

/// Game-won transition: set score, set/match completion, server swap, fresh
/// game.
fn win_game(state: &mut MatchState, winner: PlayerId) {
    let set_index = state.current_set_index();
    *state.sets[set_index].score_mut(winner) += 1;

    let games_won = state.sets[set_index].score(winner);
    let games_lost = state.sets[set_index].score(winner.opponent());
    if games_won >= 6 && games_won >= games_lost + 2 {
        state.sets[set_index].winner = Some(winner);
        state.player_mut(winner).sets_won += 1;
        log::debug!(
            "set {} won by {} ({}-{})",
            state.current_set,
            winner.as_str(),
            games_won,
            games_lost
        );

        if state.player(winner).sets_won > state.best_of.total_sets() / 2 {
            state.winner = Some(winner);
            state.is_complete = true;
            log::info!("match won by {}: {}", winner.as_str(), state.scoreline());
        } else {
            state.current_set += 1;
            state.sets.push(SetState::new());
        }
    }

    // Server swaps on every game completion, including set boundaries.
    state.player1.is_serving = !state.player1.is_serving;
    state.player2.is_serving = !state.player2.is_serving;

    // Game numbering continues across sets.
    state.current_game = GameState::fresh(state.current_game.number + 1);
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::models::{BestOf, MatchMeta, PlayerState};

    use super::*;

    fn fresh_match(best_of: BestOf) -> MatchState {
        MatchState::new(
            MatchMeta::exhibition("match-test"),
            best_of,
            PlayerState::new("player-001", "Alpha", true),
            PlayerState::new("player-002", "Beta", false),
        )
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn run(state: MatchState, points: &[(PlayerId, PointType)]) -> MatchState {
        let mut rng = rng();
        points
            .iter()
            .fold(state, |acc, &(player, pt)| apply_point(&acc, player, pt, &mut rng))
    }

    #[test]
    fn test_point_counts_climb_until_game() {
        let mut state = fresh_match(BestOf::Five);
        let mut r = rng();
        for expected in 1..=3 {
            state = apply_point(&state, PlayerId::Player1, PointType::Winner, &mut r);
            assert_eq!(state.current_game.player1_points, expected);
            assert_eq!(state.current_game.player2_points, 0);
            assert!(!state.current_game.deuce);
        }
    }

    #[test]
    fn test_four_straight_winners_take_the_game() {
        // The concrete scenario: four winner points by player1 from love-all.
        let state = run(
            fresh_match(BestOf::Five),
            &[(PlayerId::Player1, PointType::Winner); 4],
        );

        assert_eq!(state.current_game.number, 2);
        assert_eq!(state.current_game.player1_points, 0);
        assert_eq!(state.current_game.player2_points, 0);
        assert_eq!(state.sets[0].player1_score, 1);
        assert_eq!(state.sets[0].player2_score, 0);
        assert!(!state.player1.is_serving);
        assert!(state.player2.is_serving);
        assert_eq!(state.player1.statistics.overall.winners, 4);
    }

    #[test]
    fn test_three_all_always_enters_deuce() {
        let alternating = [
            (PlayerId::Player1, PointType::Winner),
            (PlayerId::Player2, PointType::Winner),
            (PlayerId::Player1, PointType::Winner),
            (PlayerId::Player2, PointType::Winner),
            (PlayerId::Player1, PointType::Winner),
            (PlayerId::Player2, PointType::Winner),
        ];
        let state = run(fresh_match(BestOf::Five), &alternating);

        assert!(state.current_game.deuce);
        assert_eq!(state.current_game.player1_points, 3);
        assert_eq!(state.current_game.player2_points, 3);
        assert_eq!(state.current_game.advantage, None);
    }

    fn deuce_state() -> MatchState {
        let mut state = fresh_match(BestOf::Five);
        state.current_game.player1_points = 3;
        state.current_game.player2_points = 3;
        state.current_game.deuce = true;
        state
    }

    #[test]
    fn test_deuce_point_grants_advantage() {
        let state = run(deuce_state(), &[(PlayerId::Player2, PointType::Winner)]);
        assert_eq!(state.current_game.advantage, Some(PlayerId::Player2));
        assert!(state.current_game.deuce);
    }

    #[test]
    fn test_advantage_converts_to_game() {
        let state = run(
            deuce_state(),
            &[
                (PlayerId::Player2, PointType::Winner),
                (PlayerId::Player2, PointType::Winner),
            ],
        );
        assert_eq!(state.sets[0].player2_score, 1);
        assert_eq!(state.current_game.number, 2);
        assert!(!state.current_game.deuce);
    }

    #[test]
    fn test_losing_advantage_returns_to_even_deuce() {
        let state = run(
            deuce_state(),
            &[
                (PlayerId::Player1, PointType::Winner),
                (PlayerId::Player2, PointType::Winner),
            ],
        );
        // Back to deuce with no advantage, not advantage for player2.
        assert!(state.current_game.deuce);
        assert_eq!(state.current_game.advantage, None);
        assert_eq!(state.sets[0].player1_score, 0);
        assert_eq!(state.sets[0].player2_score, 0);
    }

    /// State one game away from the given set score for player1.
    fn set_point_state(p1_games: u32, p2_games: u32) -> MatchState {
        let mut state = fresh_match(BestOf::Five);
        state.sets[0].player1_score = p1_games;
        state.sets[0].player2_score = p2_games;
        state.current_game.player1_points = 3;
        state
    }

    #[test]
    fn test_set_won_at_six_four() {
        let state = run(set_point_state(5, 4), &[(PlayerId::Player1, PointType::Winner)]);

        assert_eq!(state.sets[0].player1_score, 6);
        assert_eq!(state.sets[0].winner, Some(PlayerId::Player1));
        assert_eq!(state.player1.sets_won, 1);
        assert_eq!(state.current_set, 2);
        assert_eq!(state.sets.len(), 2);
        assert_eq!(state.sets[1], SetState::new());
        assert!(!state.is_complete);
    }

    #[test]
    fn test_set_continues_at_six_five() {
        let state = run(set_point_state(5, 5), &[(PlayerId::Player1, PointType::Winner)]);

        assert_eq!(state.sets[0].player1_score, 6);
        assert_eq!(state.sets[0].winner, None);
        assert_eq!(state.player1.sets_won, 0);
        assert_eq!(state.current_set, 1);
        assert_eq!(state.sets.len(), 1);
    }

    #[test]
    fn test_match_completes_at_three_sets_of_five() {
        let mut state = set_point_state(5, 0);
        state.player1.sets_won = 2;

        let state = run(state, &[(PlayerId::Player1, PointType::Winner)]);

        assert!(state.is_complete);
        assert_eq!(state.winner, Some(PlayerId::Player1));
        assert_eq!(state.player1.sets_won, 3);
        // No new set appended once the match is decided.
        assert_eq!(state.sets.len(), 1);
        assert_eq!(state.current_set, 1);
    }

    #[test]
    fn test_match_open_at_two_sets_of_five() {
        let mut state = set_point_state(5, 0);
        state.player1.sets_won = 1;

        let state = run(state, &[(PlayerId::Player1, PointType::Winner)]);

        assert!(!state.is_complete);
        assert_eq!(state.winner, None);
        assert_eq!(state.sets.len(), 2);
    }

    #[test]
    fn test_match_completes_at_two_sets_of_three() {
        let mut state = set_point_state(5, 0);
        state.best_of = BestOf::Three;
        state.player1.sets_won = 1;

        let state = run(state, &[(PlayerId::Player1, PointType::Winner)]);

        assert!(state.is_complete);
        assert_eq!(state.winner, Some(PlayerId::Player1));
    }

    #[test]
    fn test_server_flips_only_on_game_completion() {
        let mut state = fresh_match(BestOf::Five);
        let mut r = rng();

        for _ in 0..3 {
            state = apply_point(&state, PlayerId::Player1, PointType::Winner, &mut r);
            assert!(state.player1.is_serving, "server must not change mid-game");
            assert!(!state.player2.is_serving);
        }

        state = apply_point(&state, PlayerId::Player1, PointType::Winner, &mut r);
        assert!(!state.player1.is_serving);
        assert!(state.player2.is_serving);
    }

    #[test]
    fn test_game_numbering_continues_across_sets() {
        let mut state = set_point_state(5, 0);
        state.current_game.number = 11;

        let state = run(state, &[(PlayerId::Player1, PointType::Winner)]);

        // New set, but the game counter keeps climbing.
        assert_eq!(state.current_set, 2);
        assert_eq!(state.current_game.number, 12);
    }

    #[test]
    fn test_serve_speed_set_for_serve_outcomes() {
        for pt in [PointType::Ace, PointType::Fault, PointType::DoubleFault] {
            let state = run(fresh_match(BestOf::Five), &[(PlayerId::Player1, pt)]);
            let speed = state.last_point.serve_speed.expect("serve outcome needs a speed");
            assert!((160..200).contains(&speed), "speed {} out of band", speed);
        }
    }

    #[test]
    fn test_serve_speed_absent_for_rally_outcomes() {
        for pt in [PointType::Winner, PointType::UnforcedError, PointType::Net] {
            let state = run(fresh_match(BestOf::Five), &[(PlayerId::Player1, pt)]);
            assert_eq!(state.last_point.serve_speed, None);
        }
    }

    #[test]
    fn test_serve_speed_absent_when_serve_ends_the_game() {
        let mut state = fresh_match(BestOf::Five);
        state.current_game.player1_points = 3;

        let state = run(state, &[(PlayerId::Player1, PointType::Ace)]);

        assert_eq!(state.current_game.number, 2);
        assert_eq!(state.last_point.serve_speed, None);
    }

    #[test]
    fn test_unknown_point_type_awards_generic_point() {
        let state = run(fresh_match(BestOf::Five), &[(PlayerId::Player2, PointType::Other)]);
        assert_eq!(state.current_game.player2_points, 1);
        assert_eq!(state.player2.statistics.overall.points_won, 1);
    }

    #[test]
    fn test_caller_snapshot_is_untouched() {
        let state = fresh_match(BestOf::Five);
        let before = serde_json::to_string(&state).unwrap();

        let mut r = rng();
        let _ = apply_point(&state, PlayerId::Player1, PointType::Ace, &mut r);

        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }

    #[test]
    fn test_same_seed_same_output() {
        let state = fresh_match(BestOf::Five);

        let mut r1 = ChaCha8Rng::seed_from_u64(7);
        let mut r2 = ChaCha8Rng::seed_from_u64(7);
        let a = apply_point(&state, PlayerId::Player1, PointType::Winner, &mut r1);
        let b = apply_point(&state, PlayerId::Player1, PointType::Winner, &mut r2);

        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}
