//! Random text generation: random strings, UUIDs, lorem ipsum

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const HEX_LOWER: &str = "0123456789abcdef";

const LOREM_WORDS: [&str; 64] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et",
    "dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis",
    "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea",
    "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia",
    "deserunt", "mollit", "anim", "id", "est", "laborum", "porro", "quisquam",
];

/// `len` characters drawn uniformly from `charset`; empty when the charset is empty
pub fn random_string(len: usize, charset: &str) -> String {
    let chars: Vec<char> = charset.chars().collect();
    let mut rng = rand::thread_rng();
    (0..len)
        .filter_map(|_| chars.choose(&mut rng).copied())
        .collect()
}

pub fn random_alphanumeric(len: usize) -> String {
    random_string(len, ALPHANUMERIC)
}

/// Random (version 4) UUID in hyphenated lowercase form
pub fn uuid_v4() -> String {
    uuid::Uuid::new_v4().hyphenated().to_string()
}

/// Shape of generated lorem ipsum text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoremConfig {
    pub min_words_per_sentence: usize,
    pub max_words_per_sentence: usize,
    pub min_sentences_per_paragraph: usize,
    pub max_sentences_per_paragraph: usize,
}

impl Default for LoremConfig {
    fn default() -> Self {
        Self {
            min_words_per_sentence: 6,
            max_words_per_sentence: 14,
            min_sentences_per_paragraph: 3,
            max_sentences_per_paragraph: 6,
        }
    }
}

impl LoremConfig {
    pub fn with_words_per_sentence(mut self, min: usize, max: usize) -> Self {
        self.min_words_per_sentence = min;
        self.max_words_per_sentence = max;
        self
    }

    pub fn with_sentences_per_paragraph(mut self, min: usize, max: usize) -> Self {
        self.min_sentences_per_paragraph = min;
        self.max_sentences_per_paragraph = max;
        self
    }

    fn words(&self) -> RangeInclusive<usize> {
        ordered(self.min_words_per_sentence.max(1), self.max_words_per_sentence.max(1))
    }

    fn sentences(&self) -> RangeInclusive<usize> {
        ordered(
            self.min_sentences_per_paragraph.max(1),
            self.max_sentences_per_paragraph.max(1),
        )
    }
}

fn ordered(a: usize, b: usize) -> RangeInclusive<usize> {
    if a <= b {
        a..=b
    } else {
        b..=a
    }
}

/// `n` lowercase lorem words separated by single spaces
pub fn lorem_words(n: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| LOREM_WORDS[rng.gen_range(0..LOREM_WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// One capitalized sentence ending in a period
pub fn lorem_sentence() -> String {
    lorem_sentence_with(&LoremConfig::default())
}

pub fn lorem_sentence_with(config: &LoremConfig) -> String {
    let count = rand::thread_rng().gen_range(config.words());
    let mut sentence = crate::transform::capitalize(&lorem_words(count));
    sentence.push('.');
    sentence
}

pub fn lorem_paragraph() -> String {
    lorem_paragraph_with(&LoremConfig::default())
}

pub fn lorem_paragraph_with(config: &LoremConfig) -> String {
    let count = rand::thread_rng().gen_range(config.sentences());
    (0..count)
        .map(|_| lorem_sentence_with(config))
        .collect::<Vec<_>>()
        .join(" ")
}
