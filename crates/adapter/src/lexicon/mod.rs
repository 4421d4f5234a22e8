//! Rule-based sentiment scoring over a valence lexicon.
//!
//! Each known word contributes its valence, adjusted by boosters and
//! negations in the three preceding tokens, ALL-CAPS emphasis and a
//! contrastive "but". The sum is squashed into a compound score in [-1, 1].

mod words;

use anyhow::Result;
use std::collections::{HashMap, HashSet};

use crate::traits::SentimentScorer;
use words::{BOOSTERS, NEGATIONS, VALENCES};

/// Extra valence for an ALL-CAPS word in mixed-case text.
const C_INCR: f64 = 0.733;
/// Multiplier applied when a negation precedes a word.
const N_SCALAR: f64 = -0.74;
/// Normalization constant, approximates the max expected sum.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

pub struct LexiconScorer {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES
                .iter()
                .map(|(w, v)| (w.to_string(), *v))
                .collect(),
            boosters: BOOSTERS
                .iter()
                .map(|(w, v)| (w.to_string(), *v))
                .collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Compound polarity of `text`, 0.0 when no known word is present.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let cap_diff = has_cap_differential(&tokens);

        let mut sentiments: Vec<f64> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();
            if self.boosters.contains_key(&lower) {
                sentiments.push(0.0);
                continue;
            }
            let Some(mut valence) = self.valences.get(&lower).copied() else {
                sentiments.push(0.0);
                continue;
            };

            if cap_diff && is_shouting(token) {
                valence += C_INCR.copysign(valence);
            }

            for dist in 1..=3 {
                if i < dist {
                    break;
                }
                let prev = tokens[i - dist];
                let prev_lower = prev.to_lowercase();
                if !self.valences.contains_key(&prev_lower) {
                    let mut scalar = self.booster_scalar(prev, valence, cap_diff);
                    if dist == 2 {
                        scalar *= 0.95;
                    } else if dist == 3 {
                        scalar *= 0.9;
                    }
                    valence += scalar;
                }
                if self.is_negation(&prev_lower) {
                    valence *= N_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        apply_but(&tokens, &mut sentiments);

        let sum: f64 = sentiments.iter().sum();
        let emphasis = punctuation_emphasis(text);
        let sum = if sum > 0.0 {
            sum + emphasis
        } else if sum < 0.0 {
            sum - emphasis
        } else {
            sum
        };

        normalize(sum)
    }

    fn booster_scalar(&self, word: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(b) = self.boosters.get(&word.to_lowercase()).copied() else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -b } else { b };
        if cap_diff && is_shouting(word) {
            scalar += C_INCR.copysign(valence);
        }
        scalar
    }

    fn is_negation(&self, lower: &str) -> bool {
        let bare: String = lower.chars().filter(|c| *c != '\'' && *c != '’').collect();
        self.negations.contains(&bare) || lower.ends_with("n't") || lower.ends_with("n’t")
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.polarity(text))
    }
}

/// Whitespace tokens with surrounding punctuation removed; single characters
/// are dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|t| t.chars().count() > 1)
        .collect()
}

fn is_shouting(token: &str) -> bool {
    token.chars().any(|c| c.is_alphabetic())
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
}

fn has_cap_differential(tokens: &[&str]) -> bool {
    let shouting = tokens.iter().filter(|t| is_shouting(t)).count();
    shouting > 0 && shouting < tokens.len()
}

/// Words before the first "but" count half, words after count one and a half.
fn apply_but(tokens: &[&str], sentiments: &mut [f64]) {
    let Some(pos) = tokens.iter().position(|t| t.eq_ignore_ascii_case("but")) else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pos {
            *s *= 0.5;
        } else if i > pos {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_amp
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
