//! Resolution tests.
//!
//! These tests verify the beats-relation over both alphabets: the exact
//! edge set, antisymmetry, and alphabet validation.

use proptest::prelude::*;

use rps_engine::core::{Alphabet, Choice, EngineError};
use rps_engine::rules::{counter_of, resolve, RoundResult};

fn any_choice() -> impl Strategy<Value = Choice> {
    prop::sample::select(Choice::ALL.to_vec())
}

fn core_choice() -> impl Strategy<Value = Choice> {
    prop::sample::select(Choice::CORE.to_vec())
}

// =============================================================================
// Exact Edge Sets
// =============================================================================

#[test]
fn test_basic_win_edges_are_exactly_the_cycle() {
    use Choice::*;
    let expected = [(Rock, Scissors), (Scissors, Paper), (Paper, Rock)];

    for a in Choice::CORE {
        let mut wins = 0;
        let mut losses = 0;
        for b in Choice::CORE {
            match resolve(Alphabet::Basic, a, b).unwrap() {
                RoundResult::Win => {
                    assert!(expected.contains(&(a, b)), "unexpected win {a} over {b}");
                    wins += 1;
                }
                RoundResult::Lose => losses += 1,
                RoundResult::Draw => assert_eq!(a, b),
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(losses, 1);
    }
}

#[test]
fn test_extended_win_edges() {
    use Choice::*;
    let table = [
        (Rock, [Scissors, Lizard]),
        (Paper, [Rock, Spock]),
        (Scissors, [Paper, Lizard]),
        (Lizard, [Paper, Spock]),
        (Spock, [Scissors, Rock]),
    ];

    for (winner, losers) in table {
        let mut wins = Vec::new();
        let mut losses = 0;
        for other in Choice::ALL {
            match resolve(Alphabet::Extended, winner, other).unwrap() {
                RoundResult::Win => wins.push(other),
                RoundResult::Lose => losses += 1,
                RoundResult::Draw => assert_eq!(winner, other),
            }
        }
        wins.sort();
        let mut expected = losers.to_vec();
        expected.sort();
        assert_eq!(wins, expected, "{winner} beats the wrong set");
        assert_eq!(losses, 2);
    }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_lizard_rejected_in_basic_alphabet() {
    let err = resolve(Alphabet::Basic, Choice::Lizard, Choice::Paper).unwrap_err();
    assert!(matches!(err, EngineError::InvalidChoice(_)));

    let err = Alphabet::Basic.parse_choice("Lizard").unwrap_err();
    assert!(err.is_invalid_choice());
}

#[test]
fn test_counter_table() {
    use Choice::*;
    assert_eq!(counter_of(Rock), Paper);
    assert_eq!(counter_of(Paper), Scissors);
    assert_eq!(counter_of(Scissors), Rock);
    assert_eq!(counter_of(Lizard), Rock);
    assert_eq!(counter_of(Spock), Lizard);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_antisymmetric(a in any_choice(), b in any_choice()) {
        let forward = resolve(Alphabet::Extended, a, b).unwrap();
        let backward = resolve(Alphabet::Extended, b, a).unwrap();

        prop_assert!(!(forward == RoundResult::Win && backward == RoundResult::Win));
        prop_assert_eq!(forward == RoundResult::Draw, a == b);
        prop_assert_eq!(backward == RoundResult::Draw, a == b);
        prop_assert_eq!(forward.inverse(), backward);
    }

    #[test]
    fn prop_basic_agrees_with_extended(a in core_choice(), b in core_choice()) {
        prop_assert_eq!(
            resolve(Alphabet::Basic, a, b).unwrap(),
            resolve(Alphabet::Extended, a, b).unwrap()
        );
    }

    #[test]
    fn prop_counter_beats_source(choice in any_choice()) {
        prop_assert_eq!(RoundResult::between(counter_of(choice), choice), RoundResult::Win);
    }

    #[test]
    fn prop_parse_display_round_trip(choice in any_choice()) {
        let parsed: Choice = choice.to_string().to_uppercase().parse().unwrap();
        prop_assert_eq!(parsed, choice);
    }
}
