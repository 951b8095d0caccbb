//! Rules scenarios played through the public engine API.

use rps_tactics::core::{
    home_region, CombatOutcome, GameEvent, GameResult, GameRng, GameState, MatchConfig, Move,
    MoveOutcome, Phase, PieceId, PieceKind, PlayerId, Position,
};
use rps_tactics::error::{GameError, MoveRejection};
use rps_tactics::rules::RulesEngine;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

fn scenario(player_count: usize, placements: &[(PlayerId, PieceKind, Position)]) -> GameState {
    GameState::from_placements(&MatchConfig::new(player_count), placements).unwrap()
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_two_player_setup_fills_home_rows() {
    let config = MatchConfig::new(2);
    let state = GameState::setup(&config, &mut GameRng::new(42)).unwrap();

    assert_eq!(state.phase, Phase::InProgress);
    assert_eq!(state.current, P0);
    for player in [P0, P1] {
        let region = home_region(2, player);
        let pieces: Vec<_> = state.board.alive_pieces(player).collect();
        assert_eq!(pieces.len(), 12);
        assert!(pieces.iter().all(|p| region.contains(&p.position)));
        assert_eq!(state.board.kind_counts(player), [4, 4, 4]);
    }
    assert!(state.board.is_consistent());
    assert_eq!(state.events(), &[GameEvent::MatchStarted { player_count: 2 }]);
}

#[test]
fn test_three_player_setup_is_capped_by_region() {
    let config = MatchConfig::new(3);
    let state = GameState::setup(&config, &mut GameRng::new(1)).unwrap();

    for player in PlayerId::all(3) {
        let region = home_region(3, player);
        assert_eq!(region.len(), 8);
        assert_eq!(state.board.count_alive(player), 8);
        assert!(state
            .board
            .alive_pieces(player)
            .all(|p| region.contains(&p.position)));
    }
}

#[test]
fn test_setup_is_seed_deterministic() {
    let config = MatchConfig::new(2);
    let a = GameState::setup(&config, &mut GameRng::new(5)).unwrap();
    let b = GameState::setup(&config, &mut GameRng::new(5)).unwrap();
    let c = GameState::setup(&config, &mut GameRng::new(6)).unwrap();

    assert_eq!(a.board, b.board);
    assert_ne!(a.board, c.board);
}

#[test]
fn test_overlapping_placements_rejected() {
    let err = GameState::from_placements(
        &MatchConfig::new(2),
        &[(P0, PieceKind::Rock, pos(1, 1)), (P1, PieceKind::Paper, pos(1, 1))],
    )
    .unwrap_err();
    assert!(matches!(err, GameError::InvalidSetup { .. }));
}

// =============================================================================
// Combat scenarios
// =============================================================================

#[test]
fn test_rock_meets_rock_is_a_draw() {
    let mut state = scenario(
        2,
        &[(P0, PieceKind::Rock, pos(2, 2)), (P1, PieceKind::Rock, pos(2, 3))],
    );
    let rules = RulesEngine::default();

    let outcome = rules
        .apply_turn(&mut state, &Move::new(PieceId::new(0), pos(2, 2), pos(2, 3)))
        .unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Combat {
            defender: PieceId::new(1),
            outcome: CombatOutcome::Mutual
        }
    );
    assert!(state.board.piece_at(pos(2, 3)).is_none());
    assert!(state.board.piece_at(pos(2, 2)).is_none());
    assert_eq!(state.alive_counts()[P0], 0);
    assert_eq!(state.alive_counts()[P1], 0);
    assert_eq!(state.phase, Phase::Finished(GameResult::Draw));
}

#[test]
fn test_paper_captures_rock() {
    let mut state = scenario(
        2,
        &[
            (P0, PieceKind::Paper, pos(3, 3)),
            (P0, PieceKind::Rock, pos(0, 0)),
            (P1, PieceKind::Rock, pos(4, 3)),
            (P1, PieceKind::Scissors, pos(5, 5)),
        ],
    );
    let rules = RulesEngine::default();
    let mv = Move::new(PieceId::new(0), pos(3, 3), pos(4, 3));

    rules.apply_turn(&mut state, &mv).unwrap();

    let occupant = state.board.piece_at(pos(4, 3)).unwrap();
    assert_eq!(occupant.id, PieceId::new(0));
    assert_eq!(occupant.kind, PieceKind::Paper);
    assert!(state.board.piece_at(pos(3, 3)).is_none());
    assert_eq!(state.alive_counts()[P0], 2);
    assert_eq!(state.alive_counts()[P1], 1);
    assert_eq!(state.current, P1);
    assert_eq!(
        state.events(),
        &[
            GameEvent::Combat {
                attacker: PieceId::new(0),
                attacker_kind: PieceKind::Paper,
                defender: PieceId::new(2),
                defender_kind: PieceKind::Rock,
                at: pos(4, 3),
                outcome: CombatOutcome::AttackerWins,
            },
            GameEvent::PieceMoved { player: P0, mv },
            GameEvent::TurnChanged { from: P0, to: P1 },
        ]
    );
}

#[test]
fn test_failed_attack_loses_the_attacker() {
    let mut state = scenario(
        2,
        &[
            (P0, PieceKind::Scissors, pos(3, 3)),
            (P0, PieceKind::Rock, pos(0, 0)),
            (P1, PieceKind::Rock, pos(3, 4)),
        ],
    );
    let rules = RulesEngine::default();

    let outcome = rules
        .apply_turn(&mut state, &Move::new(PieceId::new(0), pos(3, 3), pos(3, 4)))
        .unwrap();

    assert!(matches!(
        outcome,
        MoveOutcome::Combat {
            outcome: CombatOutcome::DefenderWins,
            ..
        }
    ));
    assert_eq!(state.board.piece_at(pos(3, 4)).map(|p| p.owner), Some(P1));
    assert!(state.board.piece_at(pos(3, 3)).is_none());
    assert_eq!(state.alive_counts()[P0], 1);
    assert_eq!(state.alive_counts()[P1], 1);
    assert!(!state
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::PieceMoved { .. })));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_rejections_leave_state_untouched() {
    let base = scenario(
        2,
        &[
            (P0, PieceKind::Rock, pos(2, 2)),
            (P0, PieceKind::Paper, pos(2, 3)),
            (P1, PieceKind::Rock, pos(5, 5)),
        ],
    );
    let rules = RulesEngine::default();

    let cases = [
        (
            Move::new(PieceId::new(0), pos(2, 2), pos(4, 2)),
            MoveRejection::NotAdjacent {
                from: pos(2, 2),
                to: pos(4, 2),
            },
        ),
        (
            Move::new(PieceId::new(0), pos(2, 2), pos(2, 3)),
            MoveRejection::OwnPieceAtDestination(pos(2, 3)),
        ),
        (
            Move::new(PieceId::new(0), pos(1, 1), pos(1, 2)),
            MoveRejection::SourceMismatch {
                piece: PieceId::new(0),
                claimed: pos(1, 1),
                actual: pos(2, 2),
            },
        ),
        (
            Move::new(PieceId::new(9), pos(2, 2), pos(1, 2)),
            MoveRejection::UnknownPiece(PieceId::new(9)),
        ),
        (
            Move::new(PieceId::new(2), pos(5, 5), pos(4, 5)),
            MoveRejection::NotOwner {
                piece: PieceId::new(2),
                owner: P1,
            },
        ),
    ];

    for (mv, reason) in cases {
        let mut state = base.clone();
        let err = rules.apply_turn(&mut state, &mv).unwrap_err();
        assert_eq!(err, GameError::InvalidMove { player: P0, reason }, "{mv}");
        assert_eq!(state.board, base.board);
        assert_eq!(state.current, P0);
        assert_eq!(state.turn_number, 0);
    }
}

#[test]
fn test_destroyed_piece_cannot_move() {
    let mut state = scenario(
        2,
        &[
            (P0, PieceKind::Scissors, pos(2, 2)),
            (P0, PieceKind::Rock, pos(0, 0)),
            (P1, PieceKind::Rock, pos(2, 3)),
            (P1, PieceKind::Paper, pos(5, 5)),
        ],
    );
    let rules = RulesEngine::default();
    rules
        .apply_turn(&mut state, &Move::new(PieceId::new(0), pos(2, 2), pos(2, 3)))
        .unwrap();
    rules
        .apply_turn(&mut state, &Move::new(PieceId::new(3), pos(5, 5), pos(4, 5)))
        .unwrap();

    let err = rules
        .apply_turn(&mut state, &Move::new(PieceId::new(0), pos(2, 2), pos(1, 2)))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove {
            player: P0,
            reason: MoveRejection::DeadPiece(PieceId::new(0))
        }
    );
}

#[test]
fn test_off_board_move_from_the_wire_is_refused() {
    let mut state = scenario(
        2,
        &[(P0, PieceKind::Rock, pos(5, 5)), (P1, PieceKind::Rock, pos(0, 0))],
    );
    let json = r#"{"piece":0,"from":{"row":5,"col":5},"to":{"row":5,"col":6}}"#;

    assert!(serde_json::from_str::<Move>(json).is_err());

    // The in-bounds neighbor decodes and plays normally.
    let ok = r#"{"piece":0,"from":{"row":5,"col":5},"to":{"row":5,"col":4}}"#;
    let mv: Move = serde_json::from_str(ok).unwrap();
    RulesEngine::default().apply_turn(&mut state, &mv).unwrap();
    assert_eq!(state.board.piece_at(pos(5, 4)).unwrap().id, PieceId::new(0));
}

// =============================================================================
// Three players
// =============================================================================

#[test]
fn test_three_player_elimination_keeps_match_going() {
    let mut state = scenario(
        3,
        &[
            (P0, PieceKind::Paper, pos(2, 2)),
            (P1, PieceKind::Rock, pos(2, 3)),
            (P2, PieceKind::Scissors, pos(5, 5)),
        ],
    );
    let rules = RulesEngine::default();
    let mv = Move::new(PieceId::new(0), pos(2, 2), pos(2, 3));

    rules.apply_turn(&mut state, &mv).unwrap();

    assert_eq!(state.phase, Phase::InProgress);
    assert!(state.is_eliminated(P1));
    assert_eq!(state.active_players(), vec![P0, P2]);
    assert_eq!(state.current, P2);
    assert!(state
        .events()
        .contains(&GameEvent::PlayerEliminated { player: P1 }));
    assert_eq!(
        state.events().last(),
        Some(&GameEvent::TurnChanged { from: P0, to: P2 })
    );

    // Seat order now skips the eliminated player.
    rules
        .apply_turn(&mut state, &Move::new(PieceId::new(2), pos(5, 5), pos(4, 5)))
        .unwrap();
    assert_eq!(state.current, P0);
}

#[test]
fn test_mutual_combat_can_eliminate_two_of_three() {
    let mut state = scenario(
        3,
        &[
            (P0, PieceKind::Rock, pos(2, 2)),
            (P1, PieceKind::Rock, pos(2, 3)),
            (P2, PieceKind::Scissors, pos(5, 5)),
        ],
    );
    let rules = RulesEngine::default();

    rules
        .apply_turn(&mut state, &Move::new(PieceId::new(0), pos(2, 2), pos(2, 3)))
        .unwrap();

    assert_eq!(state.result(), Some(GameResult::Winner(P2)));
    assert_eq!(
        &state.events()[1..],
        &[
            GameEvent::PlayerEliminated { player: P0 },
            GameEvent::PlayerEliminated { player: P1 },
            GameEvent::GameOver {
                result: GameResult::Winner(P2)
            },
        ]
    );
}

#[test]
fn test_history_records_each_move() {
    let mut state = scenario(
        2,
        &[(P0, PieceKind::Rock, pos(0, 0)), (P1, PieceKind::Rock, pos(5, 5))],
    );
    let rules = RulesEngine::default();

    rules
        .apply_turn(&mut state, &Move::new(PieceId::new(0), pos(0, 0), pos(0, 1)))
        .unwrap();
    rules
        .apply_turn(&mut state, &Move::new(PieceId::new(1), pos(5, 5), pos(5, 4)))
        .unwrap();

    let players: Vec<_> = state.history.iter().map(|r| r.player).collect();
    let turns: Vec<_> = state.history.iter().map(|r| r.turn).collect();
    assert_eq!(players, vec![P0, P1]);
    assert_eq!(turns, vec![0, 1]);
    assert_eq!(state.turn_number, 2);
}
