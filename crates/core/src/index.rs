// crates/core/src/index.rs

use std::collections::HashSet;

use crate::corpus::CorpusRecord;
use crate::domain::Domain;
use crate::extract;
use crate::text::TokenBag;
use crate::types::{Example, GoalPair};

/// Score increment applied when the query and example goals line up.
const GOAL_BOOST: f64 = 0.08;

/// In-memory index of few-shot examples, partitioned by domain.
///
/// Uses a linear scan + bag-overlap scoring. Pools are immutable after
/// construction, so concurrent reads are safe without locking.
#[derive(Debug, Default)]
pub struct ExampleIndex {
    blocks: Vec<Example>,
    objects: Vec<Example>,
}

impl ExampleIndex {
    /// Build the index from raw corpus records: classify each record's
    /// domain, slice its problem, and precompute tokens and goal pairs.
    pub fn build(records: Vec<CorpusRecord>) -> Self {
        let mut blocks = Vec::new();
        let mut objects = Vec::new();

        for record in records {
            let domain = Domain::of_text(&record.scenario_context);
            let problem = extract::last_unsolved_statement(&record.scenario_context).to_string();
            let example = Example {
                tokens: TokenBag::of_text(&problem),
                goals: extract::goal_pairs(domain, &problem),
                plan_len: record.target_action_sequence.len(),
                plan: record.target_action_sequence,
                problem,
            };
            match domain {
                Domain::Blocks => blocks.push(example),
                Domain::Objects => objects.push(example),
            }
        }

        Self { blocks, objects }
    }

    pub fn pool(&self, domain: Domain) -> &[Example] {
        match domain {
            Domain::Blocks => &self.blocks,
            Domain::Objects => &self.objects,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len() + self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.objects.is_empty()
    }

    /// Score the domain's pool against a query problem and return the top-k
    /// examples with their scores, best first.
    ///
    /// Score = bag overlap, plus a fixed boost when both sides carry goals
    /// of equal count and share at least one goal subject. Ties keep pool
    /// order (the sort is stable), so results are deterministic.
    pub fn select(&self, domain: Domain, problem: &str, k: usize) -> Vec<(f64, &Example)> {
        let pool = self.pool(domain);
        if pool.is_empty() || k == 0 {
            return Vec::new();
        }

        let query_tokens = TokenBag::of_text(problem);
        let query_goals = extract::goal_pairs(domain, problem);

        let mut scored: Vec<(f64, &Example)> = pool
            .iter()
            .map(|example| {
                let mut score = query_tokens.overlap(&example.tokens);
                if goals_aligned(&query_goals, &example.goals) {
                    score += GOAL_BOOST;
                }
                (score, example)
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }
}

/// The goal boost fires only when both sides have goals, the goal counts
/// match, and the sets of goal subjects (first elements) intersect.
fn goals_aligned(query: &[GoalPair], example: &[GoalPair]) -> bool {
    if query.is_empty() || example.is_empty() || query.len() != example.len() {
        return false;
    }
    let subjects: HashSet<&str> = example.iter().map(|(a, _)| a.as_str()).collect();
    query.iter().any(|(a, _)| subjects.contains(a.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(scenario: &str, plan: &[&str]) -> CorpusRecord {
        CorpusRecord {
            scenario_context: scenario.to_string(),
            target_action_sequence: plan.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn blocks_scenario(body: &str) -> String {
        format!("set of blocks [STATEMENT]{body}[PLAN]")
    }

    #[test]
    fn partitions_by_domain() {
        let index = ExampleIndex::build(vec![
            record("a set of blocks here [STATEMENT] x [PLAN]", &[]),
            record("a set of objects here [STATEMENT] x [PLAN]", &[]),
        ]);
        assert_eq!(index.pool(Domain::Blocks).len(), 1);
        assert_eq!(index.pool(Domain::Objects).len(), 1);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn closer_bags_rank_higher() {
        let query = blocks_scenario("the red block is on the table");
        let index = ExampleIndex::build(vec![
            record(&blocks_scenario("qqq www block eee"), &["(engage_payload a)"]),
            record(&query, &["(release_payload a)"]),
        ]);
        let picked = index.select(Domain::Blocks, &query, 2);
        assert_eq!(picked.len(), 2);
        assert!(picked[0].0 > picked[1].0);
        assert_eq!(picked[0].1.plan, vec!["(release_payload a)"]);
    }

    #[test]
    fn k_truncates_and_zero_is_empty() {
        let records: Vec<_> = (0..5)
            .map(|i| record(&blocks_scenario(&format!("problem number {i}")), &[]))
            .collect();
        let index = ExampleIndex::build(records);
        assert_eq!(index.select(Domain::Blocks, "a block", 1).len(), 1);
        assert_eq!(index.select(Domain::Blocks, "a block", 10).len(), 5);
        assert!(index.select(Domain::Blocks, "a block", 0).is_empty());
    }

    #[test]
    fn empty_pool_is_empty_result() {
        let index = ExampleIndex::build(Vec::new());
        assert!(index.select(Domain::Objects, "anything", 6).is_empty());
    }

    #[test]
    fn goal_boost_requires_matching_subjects_and_counts() {
        let same_subject = vec![("red".to_string(), "blue".to_string())];
        let other_subject = vec![("green".to_string(), "blue".to_string())];
        let two_goals = vec![
            ("red".to_string(), "blue".to_string()),
            ("blue".to_string(), "white".to_string()),
        ];

        assert!(goals_aligned(&same_subject, &same_subject));
        assert!(!goals_aligned(&same_subject, &other_subject));
        assert!(!goals_aligned(&same_subject, &two_goals));
        assert!(!goals_aligned(&[], &same_subject));
        assert!(!goals_aligned(&same_subject, &[]));
    }

    #[test]
    fn goal_boost_moves_an_example_up() {
        // Both examples share the query's wording; only one shares its goal
        // subject, so only that one gets the boost.
        let query = blocks_scenario(
            "my goal is to have that the red block is on top of the blue block.",
        );
        let boosted = blocks_scenario(
            "my goal is to have that the red block is on top of the white block.",
        );
        let plain = blocks_scenario(
            "my goal is to have that the green block is on top of the white block.",
        );
        let index = ExampleIndex::build(vec![
            record(&plain, &["(engage_payload g)"]),
            record(&boosted, &["(engage_payload r)"]),
        ]);
        let picked = index.select(Domain::Blocks, &query, 2);
        assert_eq!(picked[0].1.plan, vec!["(engage_payload r)"]);
        assert!(picked[0].0 > picked[1].0);
    }
}
