// crates/core/src/types.rs

use crate::text::TokenBag;

/// An end-state relation between two named entities, lowercase, in the order
/// it appears in the goal clause ("a on b", "a craves b").
pub type GoalPair = (String, String);

/// A worked problem/solution pair used for few-shot guidance.
///
/// Built once from a corpus record at load time; the token bag and goal
/// pairs are precomputed so selection is a pure lookup-and-score pass.
#[derive(Debug, Clone)]
pub struct Example {
    /// The sliced problem statement (last unsolved `[STATEMENT]` block).
    pub problem: String,
    /// Reference plan: one action line per entry.
    pub plan: Vec<String>,
    pub tokens: TokenBag,
    /// Goal pairs extracted with the example's own domain grammar.
    pub goals: Vec<GoalPair>,
    /// Length of the reference plan, kept for shot logging.
    pub plan_len: usize,
}
