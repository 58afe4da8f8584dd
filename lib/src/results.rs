use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The maximum number of letters that can be stored in a [`Pattern`].
pub const MAX_LETTERS_IN_PATTERN: usize = 20;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

impl LetterResult {
    fn to_digit(self) -> u32 {
        match self {
            LetterResult::NotPresent => 0,
            LetterResult::PresentNotHere => 1,
            LetterResult::Correct => 2,
        }
    }

    fn from_digit(digit: u32) -> LetterResult {
        match digit {
            2 => LetterResult::Correct,
            1 => LetterResult::PresentNotHere,
            _ => LetterResult::NotPresent,
        }
    }
}

/// Indicates that an error occurred while loading words or evaluating guesses.
#[derive(Error, Debug)]
pub enum WordleError {
    /// Indicates that a word had the wrong length. Provides the expected length.
    #[error("words must be {0} letters long")]
    WordLength(usize),
    /// Indicates that the same word was given more than once.
    #[error("duplicate word: {0}")]
    DuplicateWord(String),
    /// Indicates that no words were provided.
    #[error("the vocabulary must contain at least one word")]
    EmptyVocabulary,
    /// Indicates that the given feedback could not be understood.
    #[error("invalid results, expected only the digits 0, 1 and 2")]
    InvalidResults,
    /// Indicates that none of the given words are in the vocabulary.
    #[error("none of the given words are in the vocabulary")]
    NotFound,
    /// Indicates that the evaluator configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Wraps an error from reading the word list.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The feedback for one guess against one answer, compressed into base-3 digits.
///
/// The first letter is the most significant digit, so the numeric value of a pattern equals its
/// digit string read as a base-3 number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    data: u32,
    len: u8,
}

impl Pattern {
    /// Compresses the given letter results into a `Pattern`.
    ///
    /// Fails with [`WordleError::WordLength`] if there are more than
    /// [`MAX_LETTERS_IN_PATTERN`] results.
    pub fn from_results(results: &[LetterResult]) -> Result<Pattern, WordleError> {
        if results.len() > MAX_LETTERS_IN_PATTERN {
            return Err(WordleError::WordLength(MAX_LETTERS_IN_PATTERN));
        }
        let data = results
            .iter()
            .fold(0u32, |acc, result| acc * 3 + result.to_digit());
        Ok(Pattern {
            data,
            len: results.len() as u8,
        })
    }

    /// Returns the pattern where every letter is correct.
    pub fn all_correct(len: usize) -> Result<Pattern, WordleError> {
        Pattern::from_results(&vec![LetterResult::Correct; len])
    }

    /// Number of letters in the pattern.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every letter in the pattern is [`LetterResult::Correct`].
    pub fn is_all_correct(&self) -> bool {
        self.data == 3u32.pow(self.len as u32) - 1
    }

    /// Expands the pattern back into one result per letter.
    pub fn results(&self) -> Vec<LetterResult> {
        let mut results = vec![LetterResult::NotPresent; self.len()];
        let mut remaining = self.data;
        for result in results.iter_mut().rev() {
            *result = LetterResult::from_digit(remaining % 3);
            remaining /= 3;
        }
        results
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in self.results() {
            write!(f, "{}", result.to_digit())?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = WordleError;

    /// Parses a string of `0` (not present), `1` (present elsewhere) and `2` (correct).
    fn from_str(s: &str) -> Result<Pattern, WordleError> {
        let results = s
            .chars()
            .map(|c| match c {
                '0' => Ok(LetterResult::NotPresent),
                '1' => Ok(LetterResult::PresentNotHere),
                '2' => Ok(LetterResult::Correct),
                _ => Err(WordleError::InvalidResults),
            })
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        Pattern::from_results(&results)
    }
}

/// Determines the feedback a player sees after guessing `guess` when the answer is `answer`.
///
/// Exact matches are marked first. Remaining guess letters are then marked as present from left
/// to right, but only as many times as the letter is still unmatched in the answer.
pub fn judge(guess: &str, answer: &str) -> Result<Pattern, WordleError> {
    let guess_letters: Vec<char> = guess.chars().collect();
    let answer_letters: Vec<char> = answer.chars().collect();
    if guess_letters.len() != answer_letters.len() {
        return Err(WordleError::WordLength(answer_letters.len()));
    }
    let mut results = vec![LetterResult::NotPresent; guess_letters.len()];
    let mut unmatched: Vec<char> = Vec::with_capacity(answer_letters.len());
    for (index, (guess_letter, answer_letter)) in
        guess_letters.iter().zip(answer_letters.iter()).enumerate()
    {
        if guess_letter == answer_letter {
            results[index] = LetterResult::Correct;
        } else {
            unmatched.push(*answer_letter);
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(position) = unmatched.iter().position(|other| other == letter) {
            unmatched.swap_remove(position);
            results[index] = LetterResult::PresentNotHere;
        }
    }
    Pattern::from_results(&results)
}
