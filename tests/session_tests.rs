//! Session integration tests.
//!
//! These tests drive full sessions the way a request handler would: parse
//! input, play, reconfigure, reset, and persist snapshots.

use rps_engine::core::{Alphabet, Choice, Difficulty, EngineConfig, GameRng, PlayMode, ScriptedRng, SessionState};
use rps_engine::opponent::choose_opponent_move;
use rps_engine::rules::RoundResult;
use rps_engine::session::{Session, SessionId, SessionSnapshot, SessionStore, ROUND_LOG_CAPACITY};

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_leaves_no_bias() {
    let mut session = Session::new(EngineConfig::default().with_seed(5));
    for _ in 0..20 {
        session.play("rock").unwrap();
    }
    assert!(session.state().last_opponent_choice.is_some());

    session.reset();
    assert!(session.state().player_history.is_empty());
    assert_eq!(session.state().last_opponent_choice, None);

    // With no previous opponent move, Normal is uniform again.
    let mut rng = GameRng::new(99);
    let mut counts = [0usize; 3];
    let trials = 9_000;
    for _ in 0..trials {
        let reply = choose_opponent_move(Difficulty::Normal, session.state(), &mut rng);
        counts[reply.index()] += 1;
    }
    let expected = trials as f64 / 3.0;
    let chi: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    assert!(chi < 20.0, "chi-square {chi}");
}

// =============================================================================
// Scripted Sessions
// =============================================================================

#[test]
fn test_scripted_hard_session() {
    let config = EngineConfig::default().with_difficulty(Difficulty::Hard);
    // round 1: empty history -> index 0 (Rock)
    // rounds 2+: single leader, roll 0.0 -> counter
    let mut session = Session::with_rng(config, ScriptedRng::new(vec![0], vec![0.0]));

    let first = session.play("paper").unwrap();
    assert_eq!(first.opponent, Choice::Rock);
    assert_eq!(first.result, RoundResult::Win);

    let second = session.play("paper").unwrap();
    assert_eq!(second.opponent, Choice::Scissors);
    assert_eq!(second.result, RoundResult::Lose);

    let third = session.play("rock").unwrap();
    assert_eq!(third.opponent, Choice::Scissors);
    assert_eq!(third.result, RoundResult::Win);

    let board = session.scoreboard();
    assert_eq!((board.total_rounds, board.wins, board.losses, board.draws), (3, 2, 1, 0));
}

#[test]
fn test_counters_add_up() {
    let mut session = Session::new(EngineConfig::default().with_alphabet(Alphabet::Extended).with_seed(77));
    let inputs = ["rock", "paper", "scissors", "lizard", "spock"];
    for i in 0..50 {
        session.play(inputs[i % inputs.len()]).unwrap();
    }

    let board = session.scoreboard();
    assert_eq!(board.total_rounds, 50);
    assert_eq!(board.wins + board.losses + board.draws, 50);
    assert_eq!(session.round_log().len(), ROUND_LOG_CAPACITY);
    assert_eq!(session.state().rounds_played(), 50);
}

#[test]
fn test_finnish_input() {
    let mut session = Session::new(EngineConfig::default());
    let outcome = session.play("Kivi").unwrap();
    assert_eq!(outcome.player, Choice::Rock);
}

// =============================================================================
// Configuration Endpoint
// =============================================================================

#[test]
fn test_switching_alphabet() {
    let mut session = Session::new(EngineConfig::default());
    assert!(session.play("spock").unwrap_err().is_invalid_choice());

    session.set_alphabet("extended".parse().unwrap());
    assert!(session.play("spock").is_ok());

    session.set_alphabet(Alphabet::Basic);
    for _ in 0..20 {
        let outcome = session.play("rock").unwrap();
        assert!(Alphabet::Basic.contains(outcome.opponent));
    }
}

#[test]
fn test_match_mode_json() {
    let config: EngineConfig = serde_json::from_str(r#"{"mode":"match","seed":3}"#).unwrap();
    let mut store = SessionStore::new(config);
    let id = SessionId::new("match-player");

    let mut completed = 0;
    for _ in 0..15 {
        let outcome = store.play(&id, "paper").unwrap();
        let progress = outcome.match_progress.unwrap();
        assert!(progress.round >= 1 && progress.round <= 5);
        if progress.complete {
            completed += 1;
            assert!(progress.winner.is_some());
        }

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["player"], "paper");
        assert!(json["match_progress"]["round"].is_number());
    }
    assert!(completed >= 3);

    let state = store.get(&id).unwrap().match_state();
    assert!(state.player_votes + state.opponent_votes <= completed);
    assert_eq!(store.get(&id).unwrap().mode(), PlayMode::Match);
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_snapshot_continues_identically() {
    let config = EngineConfig::default().with_difficulty(Difficulty::Adaptive);
    let mut original = Session::new(config);
    for input in ["rock", "rock", "paper", "rock"] {
        original.play(input).unwrap();
    }

    let bytes = original.state().to_bytes().unwrap();
    let restored = SessionState::from_bytes(&bytes).unwrap();
    assert_eq!(&restored, original.state());

    // Same state and same scripted source produce the same reply.
    let mut a = ScriptedRng::new(vec![1], vec![0.5]);
    let mut b = ScriptedRng::new(vec![1], vec![0.5]);
    assert_eq!(
        choose_opponent_move(Difficulty::Adaptive, original.state(), &mut a),
        choose_opponent_move(Difficulty::Adaptive, &restored, &mut b)
    );
}

#[test]
fn test_session_snapshot_bytes_resume_opponent_sequence() {
    let config = EngineConfig::default().with_difficulty(Difficulty::Hard).with_seed(11);
    let mut original = Session::new(config);
    for input in ["rock", "scissors", "rock"] {
        original.play(input).unwrap();
    }

    let bytes = original.snapshot().to_bytes().unwrap();
    let mut resumed = Session::from_snapshot(SessionSnapshot::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(resumed.scoreboard(), original.scoreboard());
    assert_eq!(resumed.round_log(), original.round_log());

    for input in ["paper", "rock", "rock", "scissors", "paper"] {
        assert_eq!(original.play(input).unwrap(), resumed.play(input).unwrap());
    }
}
