// crates/core/src/extract.rs

//! Regex extraction of problem statements and goal clauses from scenario
//! text. Kept separate from prompt assembly so the grammar can be tested
//! on its own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Domain;
use crate::types::GoalPair;

const STATEMENT_MARKER: &str = "[STATEMENT]";
const PLAN_MARKER: &str = "[PLAN]";

/// Goal clause: everything between "my goal is to have that" and the first
/// following period, across newlines.
static GOAL_CLAUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)my goal is to have that (.+?)\.").unwrap());

static ON_TOP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)the ([a-z]+) block is on top of the ([a-z]+) block").unwrap());

static CRAVES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)object ([a-z]) craves object ([a-z])").unwrap());

/// Slice the most recent unsolved problem out of a scenario transcript.
///
/// Takes from the last `[STATEMENT]` marker to the end, then truncates
/// through the last `[PLAN]` marker in that tail when one exists. Note the
/// returned slice deliberately still ends with the literal `[PLAN]` token;
/// the prompt relies on that as the cue position.
pub fn last_unsolved_statement(scenario: &str) -> &str {
    let Some(start) = scenario.rfind(STATEMENT_MARKER) else {
        return scenario;
    };
    let tail = &scenario[start..];
    match tail.rfind(PLAN_MARKER) {
        Some(plan) => &tail[..plan + PLAN_MARKER.len()],
        None => tail,
    }
}

/// Extract the goal pairs of a problem statement under the domain's grammar.
///
/// No goal clause is not an error; mid-plan text legitimately has none.
pub fn goal_pairs(domain: Domain, problem: &str) -> Vec<GoalPair> {
    let Some(caps) = GOAL_CLAUSE_RE.captures(problem) else {
        return Vec::new();
    };
    let clause = caps.get(1).map(|m| m.as_str()).unwrap_or("");

    let pair_re: &Regex = match domain {
        Domain::Blocks => &ON_TOP_RE,
        Domain::Objects => &CRAVES_RE,
    };

    pair_re
        .captures_iter(clause)
        .map(|c| (c[1].to_lowercase(), c[2].to_lowercase()))
        .collect()
}
