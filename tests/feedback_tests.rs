use wordle_ranker::{Feedback, LetterStatus, Word};

use LetterStatus::{Correct as C, Elsewhere as E, Reject as R};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn paint(hidden: &str, guess: &str) -> [LetterStatus; 5] {
    Feedback::calculate(&w(guess), &w(hidden)).0
}

#[test]
fn test_all_correct() {
    let feedback = Feedback::calculate(&w("crane"), &w("crane"));
    assert!(feedback.is_win());
    assert_eq!(feedback, Feedback::ALL_CORRECT);
}

#[test]
fn test_all_reject() {
    assert_eq!(paint("dream", "quick"), [R, R, R, R, R]);
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(paint("charm", "crane"), [C, E, C, R, R]);
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(paint("creep", "speed"), [R, E, C, C, R]);
}

#[test]
fn test_duplicate_letters_in_hidden() {
    assert_eq!(paint("creep", "arose"), [R, C, R, R, E]);
}

#[test]
fn test_duplicate_guess_limited_hidden() {
    assert_eq!(paint("creep", "geese"), [R, E, C, R, R]);
}

#[test]
fn test_specific_wordle_cases() {
    assert_eq!(paint("those", "sores"), [E, E, R, E, R]);
}

#[test]
fn test_single_letter_vectors() {
    assert_eq!(paint("ABCDE", "FGHIJ"), [R, R, R, R, R]);
    assert_eq!(paint("ABCDE", "AXXXX"), [C, R, R, R, R]);
    assert_eq!(paint("ABCDE", "XXXXA"), [R, R, R, R, E]);
}

#[test]
fn test_earlier_occurrence_claims_first() {
    assert_eq!(paint("ABCDE", "AAXXX"), [C, R, R, R, R]);
    assert_eq!(paint("ABCDE", "CCXXX"), [E, R, R, R, R]);
    // A later correct copy uses up the only C before the scan reaches position 0.
    assert_eq!(paint("ABCDE", "CCCXX"), [R, R, C, R, R]);
}

#[test]
fn test_repeated_letters_in_both() {
    assert_eq!(paint("AAYYY", "XXXXA"), [R, R, R, R, E]);
    assert_eq!(paint("YBBYY", "BBXXX"), [E, C, R, R, R]);
    assert_eq!(paint("YYBBY", "BBXXX"), [E, E, R, R, R]);
    assert_eq!(paint("YYBBY", "XBBXX"), [R, E, C, R, R]);
}

#[test]
fn test_feedback_parse() {
    let feedback = Feedback::parse("CERRR").unwrap();
    assert_eq!(feedback.0, [C, E, R, R, R]);
    assert_eq!(Feedback::parse("gybbb"), Some(feedback));
    assert_eq!(Feedback::parse("21000"), Some(feedback));
    assert_eq!(Feedback::parse("gyxxx"), Some(feedback));
}

#[test]
fn test_feedback_parse_invalid() {
    assert!(Feedback::parse("CERRRR").is_none());
    assert!(Feedback::parse("CERR").is_none());
    assert!(Feedback::parse("CEZRR").is_none());
}

#[test]
fn test_display() {
    let feedback = Feedback::new([C, E, R, R, C]);
    assert_eq!(feedback.to_string(), "CERRC");
    assert_eq!(feedback.to_emoji_string(), "🟩🟨⬛⬛🟩");
}

#[test]
fn test_index_bounds() {
    assert_eq!(Feedback::new([R; 5]).index(), 0);
    assert_eq!(Feedback::ALL_CORRECT.index(), Feedback::NUM_PATTERNS - 1);
    assert_eq!(Feedback::new([E, R, R, R, R]).index(), 1);
    assert_eq!(Feedback::new([R, C, R, R, R]).index(), 6);
}
