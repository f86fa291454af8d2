// crates/core/src/validate.rs

//! Advisory structural checks for generated plans.
//!
//! The validator only reports; it never rejects or rewrites a plan. Callers
//! decide what to do with the issue list (by default, nothing).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Domain;

/// `(action arg [arg])` with nothing else on the line.
static ACTION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\([a-zA-Z_]+\s+[a-zA-Z0-9_]+\s*(?:[a-zA-Z0-9_]+)?\)$").unwrap()
});

/// One structural problem with one plan line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanIssue {
    EmptyPlan,
    ContainsFrom { line: usize },
    NotParenthesized { line: usize },
    BadFormat { line: usize },
    EmptyLine { line: usize },
    UnknownAction { line: usize, action: String },
    BadArity { line: usize, action: String },
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanIssue::EmptyPlan => write!(f, "EMPTY_PLAN"),
            PlanIssue::ContainsFrom { line } => write!(f, "LINE_{line}_CONTAINS_FROM"),
            PlanIssue::NotParenthesized { line } => write!(f, "LINE_{line}_NOT_PARENTHESIZED"),
            PlanIssue::BadFormat { line } => write!(f, "LINE_{line}_BAD_FORMAT"),
            PlanIssue::EmptyLine { line } => write!(f, "LINE_{line}_EMPTY"),
            PlanIssue::UnknownAction { line, action } => {
                write!(f, "LINE_{line}_UNKNOWN_ACTION:{action}")
            }
            PlanIssue::BadArity { line, action } => {
                write!(f, "LINE_{line}_BAD_ARITY:{action}")
            }
        }
    }
}

/// Check every plan line against the domain's action vocabulary and arities.
/// Lines are assumed pre-trimmed with blanks removed. A line can collect
/// several issues; an unparenthesized or empty line stops its own checks.
pub fn validate_plan(domain: Domain, plan: &[String]) -> Vec<PlanIssue> {
    if plan.is_empty() {
        return vec![PlanIssue::EmptyPlan];
    }

    let profile = domain.profile();
    let mut issues = Vec::new();

    for (line_no, line) in plan.iter().enumerate() {
        if line.to_lowercase().contains("from") {
            issues.push(PlanIssue::ContainsFrom { line: line_no });
        }
        if !(line.starts_with('(') && line.ends_with(')')) {
            issues.push(PlanIssue::NotParenthesized { line: line_no });
            continue;
        }
        if !ACTION_LINE_RE.is_match(line) {
            issues.push(PlanIssue::BadFormat { line: line_no });
        }

        let inner: Vec<&str> = line[1..line.len() - 1].split_whitespace().collect();
        let Some(&action) = inner.first() else {
            issues.push(PlanIssue::EmptyLine { line: line_no });
            continue;
        };

        match profile.action(action) {
            None => issues.push(PlanIssue::UnknownAction {
                line: line_no,
                action: action.to_string(),
            }),
            Some(sig) => {
                if inner.len() != sig.args + 1 {
                    issues.push(PlanIssue::BadArity {
                        line: line_no,
                        action: action.to_string(),
                    });
                }
            }
        }
    }

    issues
}
