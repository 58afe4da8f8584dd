#[macro_use]
extern crate assert_matches;

use rs_wordle_approx::*;

use std::collections::HashMap;

fn results(guess: &str, answer: &str) -> Vec<LetterResult> {
    judge(guess, answer).unwrap().results()
}

#[test]
fn judge_correct() {
    assert_matches!(judge("abcb", "abcb"), Ok(pattern) if pattern.is_all_correct());
    assert_eq!(results("abcb", "abcb"), vec![LetterResult::Correct; 4]);
}

#[test]
fn judge_partial() {
    assert_eq!(
        results("sassy", "mesas"),
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );
    assert_eq!(
        results("babb", "abba"),
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent
        ]
    );
    assert_eq!(
        results("bcce", "abcb"),
        vec![
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::Correct,
            LetterResult::NotPresent
        ]
    );
}

#[test]
fn judge_none_match() {
    assert_eq!(results("defg", "abcb"), vec![LetterResult::NotPresent; 4]);
}

#[test]
fn judge_exact_match_consumes_letter() -> Result<(), WordleError> {
    // The second 'e' is exact, so the first must not also be marked present.
    assert_eq!(judge("eerie", "abide")?.to_string(), "00012");
    assert_eq!(judge("speed", "abide")?.to_string(), "00101");
    Ok(())
}

#[test]
fn judge_mismatched_length() {
    assert_matches!(judge("guess", "goal"), Err(WordleError::WordLength(4)));
}

#[test]
fn judge_too_long_to_compress() {
    let word = "a".repeat(MAX_LETTERS_IN_PATTERN + 1);

    assert_matches!(
        judge(&word, &word),
        Err(WordleError::WordLength(MAX_LETTERS_IN_PATTERN))
    );
}

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for letter in word.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

#[test]
fn judge_counts_match_letter_multiplicity() {
    let alphabet = ['a', 'b', 'c'];
    let words: Vec<String> = (0..81)
        .map(|mut i| {
            (0..4)
                .map(|_| {
                    let letter = alphabet[i % 3];
                    i /= 3;
                    letter
                })
                .collect()
        })
        .collect();

    for guess in &words {
        for answer in &words {
            let results = results(guess, answer);
            let num_equal = guess
                .chars()
                .zip(answer.chars())
                .filter(|(a, b)| a == b)
                .count();
            let num_correct = results
                .iter()
                .filter(|result| **result == LetterResult::Correct)
                .count();
            assert_eq!(num_correct, num_equal, "{} vs {}", guess, answer);

            let answer_counts = letter_counts(answer);
            let mut marked: HashMap<char, usize> = HashMap::new();
            for (letter, result) in guess.chars().zip(results.iter()) {
                if *result != LetterResult::NotPresent {
                    *marked.entry(letter).or_insert(0) += 1;
                }
            }
            for (letter, count) in marked {
                assert!(
                    count <= *answer_counts.get(&letter).unwrap_or(&0),
                    "{} vs {}",
                    guess,
                    answer
                );
            }
        }
    }
}
