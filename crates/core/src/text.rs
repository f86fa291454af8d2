// crates/core/src/text.rs

//! Lexical representation of problem text used for similarity scoring.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of letters/underscore or runs of digits; everything else separates.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z_]+|\d+").unwrap());

/// Color words carry most of the identity of a blocks problem, so they are
/// upweighted the same way single-letter object names are.
const COLORS: &[&str] = &[
    "red", "blue", "orange", "yellow", "green", "purple", "pink", "black", "white", "gray",
    "grey", "brown",
];

const UPWEIGHT: u32 = 3;

/// A multiset of lowercase tokens. Pure function of the input text.
#[derive(Debug, Clone, Default)]
pub struct TokenBag {
    counts: HashMap<String, u32>,
}

impl TokenBag {
    /// Tokenize `text`, tripling color words and single-letter tokens.
    pub fn of_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut counts = HashMap::new();
        for m in TOKEN_RE.find_iter(&lower) {
            let tok = m.as_str();
            let weight = if COLORS.contains(&tok) || is_single_letter(tok) {
                UPWEIGHT
            } else {
                1
            };
            *counts.entry(tok.to_string()).or_insert(0) += weight;
        }
        Self { counts }
    }

    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Weighted Jaccard coefficient: multiset intersection over multiset
    /// union, 0.0 when the union is empty.
    pub fn overlap(&self, other: &TokenBag) -> f64 {
        let mut inter: u64 = 0;
        let mut union: u64 = 0;
        for (tok, &n) in &self.counts {
            let m = other.count(tok);
            inter += u64::from(n.min(m));
            union += u64::from(n.max(m));
        }
        for (tok, &m) in &other.counts {
            if !self.counts.contains_key(tok) {
                union += u64::from(m);
            }
        }
        if union == 0 {
            0.0
        } else {
            inter as f64 / union as f64
        }
    }
}

fn is_single_letter(tok: &str) -> bool {
    let mut chars = tok.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_and_single_letters_are_tripled() {
        let bag = TokenBag::of_text("Red red a");
        assert_eq!(bag.count("red"), 6);
        assert_eq!(bag.count("a"), 3);
    }

    #[test]
    fn plain_tokens_count_once() {
        let bag = TokenBag::of_text("block on block");
        assert_eq!(bag.count("block"), 2);
        assert_eq!(bag.count("on"), 2);
    }

    #[test]
    fn digits_and_underscores_are_tokens() {
        let bag = TokenBag::of_text("mount_node 42, b7");
        assert_eq!(bag.count("mount_node"), 1);
        assert_eq!(bag.count("42"), 1);
        // "b7" splits into a letter run and a digit run
        assert_eq!(bag.count("b"), 3);
        assert_eq!(bag.count("7"), 1);
    }

    #[test]
    fn underscore_alone_is_not_a_letter() {
        let bag = TokenBag::of_text("x _ y");
        assert_eq!(bag.count("x"), 3);
        assert_eq!(bag.count("_"), 1);
    }

    #[test]
    fn overlap_of_identical_bags_is_one() {
        let a = TokenBag::of_text("the red block is on the table");
        let b = TokenBag::of_text("the red block is on the table");
        assert_eq!(a.overlap(&b), 1.0);
    }

    #[test]
    fn overlap_of_disjoint_bags_is_zero() {
        let a = TokenBag::of_text("red block");
        let b = TokenBag::of_text("object craves");
        assert_eq!(a.overlap(&b), 0.0);
    }

    #[test]
    fn overlap_of_empty_bags_is_zero() {
        let a = TokenBag::of_text("");
        let b = TokenBag::of_text("");
        assert_eq!(a.overlap(&b), 0.0);
    }

    #[test]
    fn overlap_counts_multiplicity() {
        // query {x:3}, doc {x:3, y:1} -> 3 / 4
        let a = TokenBag::of_text("x");
        let b = TokenBag::of_text("x table");
        assert_eq!(a.overlap(&b), 3.0 / 4.0);
    }
}
