use wordle_ranker::heuristic::{heuristic_score, letter_frequencies, rank_by_letter_frequency};
use wordle_ranker::Word;

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| Word::parse(s).unwrap()).collect()
}

#[test]
fn test_letters_count_once_per_word() {
    let list = words(&["CRANE", "SPEED", "LLAMA", "SLATE"]);
    let freq = letter_frequencies(&list);

    assert_eq!(freq[0], 3); // A
    assert_eq!(freq[(b'E' - b'A') as usize], 3);
    assert_eq!(freq[(b'L' - b'A') as usize], 2);
    assert_eq!(freq[(b'Z' - b'A') as usize], 0);
}

#[test]
fn test_scores() {
    let list = words(&["CRANE", "SPEED", "LLAMA", "SLATE"]);
    let freq = letter_frequencies(&list);
    let scores: Vec<u32> = list.iter().map(|w| heuristic_score(w, &freq)).collect();
    assert_eq!(scores, [9, 7, 6, 11]);
}

#[test]
fn test_rank_descending_with_ties() {
    let list = words(&["TRACE", "CRATE", "LLAMA", "CRANE"]);
    let ranked = rank_by_letter_frequency(&list);
    let order: Vec<String> = ranked.iter().map(|(w, _)| w.to_string()).collect();

    // TRACE and CRATE are anagrams, so they tie and sort alphabetically.
    assert_eq!(order, ["CRATE", "TRACE", "CRANE", "LLAMA"]);
    assert!(ranked.windows(2).all(|p| p[0].1 >= p[1].1));
}
