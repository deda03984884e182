//! Rally visualization: synthetic ball trajectories for the court view.
//!
//! Coordinates are normalized to the unit square. Player 1 acts from the
//! left/bottom of the frame (serve origin x=0.15, baseline y=0.85), player 2
//! mirrored. Purely illustrative; nothing here feeds back into scoring.

use rand::Rng;

use crate::models::{CourtPoint, PlayerId, PointType, PointVisualization};

/// Resting player positions when a point does not re-place them.
const P1_REST: CourtPoint = CourtPoint::new(0.15, 0.5);
const P2_REST: CourtPoint = CourtPoint::new(0.85, 0.5);

/// Build the visualization for one point.
///
/// The trajectory shape depends only on the point category and the acting
/// player; jitter comes from the injected random source so callers control
/// reproducibility. `serve_speed` is left unset here; the score transition
/// owns it.
pub(crate) fn generate_visualization<R: Rng>(
    player: PlayerId,
    point_type: PointType,
    rng: &mut R,
) -> PointVisualization {
    let p1_acting = player == PlayerId::Player1;
    let mut player1_position = P1_REST;
    let mut player2_position = P2_REST;

    let trajectory = match point_type {
        PointType::Ace => vec![
            serve_origin(p1_acting),
            CourtPoint::new(side(p1_acting, 0.75, 0.25), 0.15),
        ],
        PointType::Winner => {
            let mut shots = vec![
                serve_origin(p1_acting),
                CourtPoint::new(side(p1_acting, 0.75, 0.25), 0.15),
            ];

            // Cross-court exchange between the ~0.3 and ~0.7 bands.
            let rally_shots = rng.gen_range(3..=5);
            for i in 0..rally_shots {
                let band = if i % 2 == 0 { 0.3 } else { 0.7 };
                shots.push(CourtPoint::new(
                    band + rng.gen_range(-0.1..0.1),
                    rng.gen_range(0.2..0.8),
                ));
            }

            // Winner into the acting player's attacking corner.
            shots.push(CourtPoint::new(side(p1_acting, 0.9, 0.1), rng.gen_range(0.1..0.9)));

            player1_position =
                CourtPoint::new(side(p1_acting, 0.3, 0.1), rng.gen_range(0.2..0.8));
            player2_position =
                CourtPoint::new(side(p1_acting, 0.9, 0.7), rng.gen_range(0.2..0.8));

            shots
        }
        // Serve landing wide of the service box.
        PointType::Fault => vec![
            serve_origin(p1_acting),
            CourtPoint::new(side(p1_acting, 0.9, 0.1), 0.3),
        ],
        // Second serve sailing beyond the baseline.
        PointType::DoubleFault => vec![
            serve_origin(p1_acting),
            CourtPoint::new(side(p1_acting, 0.6, 0.4), 0.95),
        ],
        _ => vec![
            CourtPoint::new(side(p1_acting, 0.15, 0.85), 0.5),
            CourtPoint::new(0.5, 0.5),
            CourtPoint::new(side(p1_acting, 0.85, 0.15), 0.5),
        ],
    };

    PointVisualization {
        rally_length: trajectory.len() as u32,
        trajectory,
        player1_position,
        player2_position,
        point_winner: player,
        point_type,
        serve_speed: None,
    }
}

fn serve_origin(p1_acting: bool) -> CourtPoint {
    CourtPoint::new(side(p1_acting, 0.15, 0.85), 0.85)
}

/// Horizontal orientation: player 1 acts from `p1_x`, player 2 from `p2_x`.
fn side(p1_acting: bool, p1_x: f32, p2_x: f32) -> f32 {
    if p1_acting {
        p1_x
    } else {
        p2_x
    }
}
