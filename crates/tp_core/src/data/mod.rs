//! Embedded demo data.
//!
//! One mid-match best-of-five fixture used by the CLI, the JSON API sample
//! endpoint and integration-style tests: third set in progress, one set
//! apiece, game six at deuce with advantage to player 1.

use crate::models::{
    BestOf, CourtPoint, GameState, MatchKind, MatchMeta, MatchState, PlayerId, PlayerState,
    PointType, PointVisualization, SetState, StatBucket, Statistics, Surface, Tournament,
    TournamentCategory,
};

/// Build the demo fixture.
pub fn sample_match() -> MatchState {
    let player1 = PlayerState {
        id: "player-001".to_string(),
        name: "Rafael Nadal".to_string(),
        country: "Spain".to_string(),
        country_code: "ES".to_string(),
        ranking: 2,
        seed: 1,
        age: 36,
        plays: "Left-handed".to_string(),
        is_serving: true,
        sets_won: 1,
        statistics: Statistics {
            overall: StatBucket {
                aces: 5,
                double_faults: 2,
                first_serve_percentage: 68,
                winners: 18,
                unforced_errors: 12,
                points_won: 48,
                ..Default::default()
            },
            sets: vec![
                StatBucket {
                    aces: 2,
                    double_faults: 1,
                    first_serve_percentage: 65,
                    winners: 8,
                    unforced_errors: 6,
                    points_won: 24,
                    ..Default::default()
                },
                StatBucket {
                    aces: 3,
                    double_faults: 1,
                    first_serve_percentage: 70,
                    winners: 10,
                    unforced_errors: 6,
                    points_won: 24,
                    ..Default::default()
                },
            ],
        },
    };

    let player2 = PlayerState {
        id: "player-002".to_string(),
        name: "Novak Djokovic".to_string(),
        country: "Serbia".to_string(),
        country_code: "RS".to_string(),
        ranking: 1,
        seed: 2,
        age: 35,
        plays: "Right-handed".to_string(),
        is_serving: false,
        sets_won: 1,
        statistics: Statistics {
            overall: StatBucket {
                aces: 7,
                double_faults: 1,
                first_serve_percentage: 72,
                winners: 22,
                unforced_errors: 10,
                points_won: 52,
                ..Default::default()
            },
            sets: vec![
                StatBucket {
                    aces: 4,
                    double_faults: 0,
                    first_serve_percentage: 75,
                    winners: 12,
                    unforced_errors: 4,
                    points_won: 28,
                    ..Default::default()
                },
                StatBucket {
                    aces: 3,
                    double_faults: 1,
                    first_serve_percentage: 70,
                    winners: 10,
                    unforced_errors: 6,
                    points_won: 24,
                    ..Default::default()
                },
            ],
        },
    };

    MatchState {
        meta: MatchMeta {
            id: "match-123456".to_string(),
            kind: MatchKind::Singles,
            surface: Surface::Hard,
            tournament: Tournament {
                id: "tournament-789".to_string(),
                name: "Grand Slam Finals 2023".to_string(),
                location: "New York, USA".to_string(),
                category: TournamentCategory::GrandSlam,
            },
            round: "Finals".to_string(),
            court: "Center Court".to_string(),
        },
        best_of: BestOf::Five,
        player1,
        player2,
        current_set: 3,
        sets: vec![
            SetState { player1_score: 6, player2_score: 4, winner: Some(PlayerId::Player1) },
            SetState { player1_score: 4, player2_score: 6, winner: Some(PlayerId::Player2) },
            SetState { player1_score: 2, player2_score: 3, winner: None },
        ],
        current_game: GameState {
            number: 6,
            player1_points: 3,
            player2_points: 3,
            deuce: true,
            advantage: Some(PlayerId::Player1),
        },
        last_point: PointVisualization {
            trajectory: vec![
                CourtPoint::new(0.15, 0.85),
                CourtPoint::new(0.75, 0.15),
                CourtPoint::new(0.25, 0.50),
                CourtPoint::new(0.80, 0.30),
            ],
            player1_position: CourtPoint::new(0.15, 0.50),
            player2_position: CourtPoint::new(0.85, 0.30),
            rally_length: 4,
            point_winner: PlayerId::Player1,
            point_type: PointType::Winner,
            serve_speed: Some(185),
        },
        winner: None,
        is_complete: false,
    }
}
