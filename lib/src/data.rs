use crate::results::WordleError;
use crate::results::MAX_LETTERS_IN_PATTERN;
use log::info;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// Contains all the words that can be guessed, all of the same length.
///
/// A vocabulary is immutable once built, and cloning it only clones the word pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl Vocabulary {
    /// Constructs a `Vocabulary` from words that are already unique and trimmed.
    ///
    /// Fails if the words differ in length, are longer than [`MAX_LETTERS_IN_PATTERN`], if any
    /// word repeats, or if there are no words.
    ///
    /// ```
    /// use rs_wordle_approx::Vocabulary;
    /// use rs_wordle_approx::WordleError;
    ///
    /// assert!(Vocabulary::new(vec!["abc", "def"]).is_ok());
    /// assert!(matches!(Vocabulary::new(vec!["abc", "abc"]), Err(WordleError::DuplicateWord(_))));
    /// assert!(matches!(Vocabulary::new(vec!["abc", "defg"]), Err(WordleError::WordLength(3))));
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut word_length = 0;
        for word in words {
            let word = word.as_ref();
            let length = word.chars().count();
            if all_words.is_empty() {
                if length > MAX_LETTERS_IN_PATTERN {
                    return Err(WordleError::WordLength(MAX_LETTERS_IN_PATTERN));
                }
                word_length = length;
            } else if length != word_length {
                return Err(WordleError::WordLength(word_length));
            }
            let word: Arc<str> = Arc::from(word);
            if !seen.insert(Arc::clone(&word)) {
                return Err(WordleError::DuplicateWord(word.to_string()));
            }
            all_words.push(word);
        }
        if all_words.is_empty() {
            return Err(WordleError::EmptyVocabulary);
        }
        info!(
            "Loaded {} words of length {}",
            all_words.len(),
            word_length
        );
        Ok(Vocabulary {
            all_words,
            word_length,
        })
    }

    /// Constructs a `Vocabulary` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case. Blank lines and repeated words are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Vocabulary::from_iterator(lines)
    }

    /// Constructs a `Vocabulary` from the given words.
    ///
    /// Each word is trimmed and converted to lower case. Empty and repeated words are skipped,
    /// keeping the first occurrence.
    ///
    /// ```
    /// use rs_wordle_approx::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::from_iterator(vec!["Worda ", "", "worda", "wordb"]).unwrap();
    /// assert_eq!(vocabulary.len(), 2);
    /// ```
    pub fn from_iterator<I, S>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let cleaned: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Vocabulary::new(cleaned)
    }

    /// Returns every word in the vocabulary.
    pub fn words(&self) -> &[Arc<str>] {
        &self.all_words
    }

    /// Returns the length of each word in the vocabulary.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns `true` iff the given word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.all_words.iter().any(|known| known.as_ref() == word)
    }

    /// Returns the vocabulary words that are also in `subset`, in vocabulary order.
    ///
    /// Words in `subset` that are not in the vocabulary are ignored.
    pub fn candidates<S: AsRef<str>>(&self, subset: &[S]) -> Vec<Arc<str>> {
        let subset: HashSet<&str> = subset.iter().map(|word| word.as_ref()).collect();
        self.all_words
            .iter()
            .filter(|word| subset.contains(word.as_ref()))
            .map(Arc::clone)
            .collect()
    }
}

impl Deref for Vocabulary {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
