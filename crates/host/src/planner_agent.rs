// crates/host/src/planner_agent.rs

//! The planning agent: slice the active problem out of a scenario, pick
//! few-shot examples, build the prompt, call the generator, and split the
//! reply into plan lines.

use anyhow::Result;

use planshot_core::domain::Domain;
use planshot_core::extract;
use planshot_core::gen_client::{GenerationRequest, TextGenerator};
use planshot_core::validate;

use crate::log;
use crate::prompts;
use crate::store::ExampleStore;

const SHOTS_K_DEFAULT: usize = 6;
/// How many validation codes to show before cutting the warning off.
const VALIDATION_PREVIEW: usize = 12;

pub struct PlannerAgent<'a> {
    store: &'a ExampleStore,
    shots_k: usize,
    validate: bool,
}

impl<'a> PlannerAgent<'a> {
    pub fn new(store: &'a ExampleStore) -> Self {
        Self {
            store,
            shots_k: SHOTS_K_DEFAULT,
            validate: false,
        }
    }

    pub fn with_shots_k(mut self, k: usize) -> Self {
        self.shots_k = k;
        self
    }

    pub fn with_validation(mut self, on: bool) -> Self {
        self.validate = on;
        self
    }

    /// Solve one scenario. Returns the generated plan as trimmed non-empty
    /// lines, exactly as the model produced them. Validation, when enabled,
    /// only logs; it never touches the returned plan.
    pub fn solve(&self, scenario: &str, client: &impl TextGenerator) -> Result<Vec<String>> {
        let domain = Domain::of_text(scenario);
        let problem = extract::last_unsolved_statement(scenario);

        let shots = self.store.select(domain, problem, self.shots_k);
        log::domain_info(domain, format!("selected {} shots", shots.len()));
        for (rank, (score, example)) in shots.iter().enumerate() {
            log::shot(domain, rank + 1, *score, example.plan_len);
        }

        let profile = domain.profile();
        let prompt = prompts::build_prompt(domain, problem, &shots);
        let request =
            GenerationRequest::greedy(prompt, profile.system.to_string(), profile.max_new_tokens);

        let raw = client.generate(&request)?;

        let plan: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if self.validate {
            let issues = validate::validate_plan(domain, &plan);
            if !issues.is_empty() {
                let codes: Vec<String> = issues
                    .iter()
                    .take(VALIDATION_PREVIEW)
                    .map(|issue| issue.to_string())
                    .collect();
                log::validation(domain, &codes);
            }
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use planshot_core::corpus::CorpusRecord;

    struct StubGenerator {
        reply: &'static str,
        seen: RefCell<Option<GenerationRequest>>,
    }

    impl StubGenerator {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                seen: RefCell::new(None),
            }
        }
    }

    impl TextGenerator for StubGenerator {
        fn generate(&self, request: &GenerationRequest) -> Result<String> {
            *self.seen.borrow_mut() = Some(request.clone());
            Ok(self.reply.to_string())
        }
    }

    fn empty_store() -> ExampleStore {
        ExampleStore::from_records(Vec::new())
    }

    #[test]
    fn solve_splits_and_trims_lines() {
        let store = empty_store();
        let agent = PlannerAgent::new(&store).with_validation(false);
        let stub = StubGenerator::new("(attack a)\n\n(overcome a b)\n");

        let plan = agent.solve("a set of objects", &stub).unwrap();
        assert_eq!(plan, vec!["(attack a)", "(overcome a b)"]);
    }

    #[test]
    fn solve_uses_the_domain_persona_and_greedy_options() {
        let store = empty_store();
        let agent = PlannerAgent::new(&store).with_validation(false);
        let stub = StubGenerator::new("(mount_node a b)");

        agent
            .solve("a set of blocks [STATEMENT] stack them [PLAN]", &stub)
            .unwrap();

        let seen = stub.seen.borrow();
        let request = seen.as_ref().unwrap();
        assert!(request.system.contains("BLOCKS domain"));
        assert_eq!(request.temperature, 0.0);
        assert!(!request.do_sample);
        assert_eq!(request.max_new_tokens, 192);
        assert!(!request.stream);
    }

    #[test]
    fn solve_slices_the_last_statement_into_the_prompt() {
        let store = empty_store();
        let agent = PlannerAgent::new(&store).with_validation(false);
        let stub = StubGenerator::new("(attack a)");

        agent
            .solve(
                "a set of objects [STATEMENT]old[PLAN]done[STATEMENT]current one[PLAN]",
                &stub,
            )
            .unwrap();

        let seen = stub.seen.borrow();
        let prompt = &seen.as_ref().unwrap().prompt;
        assert!(prompt.contains("PROBLEM:\n[STATEMENT]current one[PLAN]"));
        assert!(!prompt.contains("old"));
    }

    #[test]
    fn solve_puts_selected_examples_into_the_prompt() {
        let store = ExampleStore::from_records(vec![CorpusRecord {
            scenario_context: "a set of objects [STATEMENT]object a craves object b[PLAN]"
                .to_string(),
            target_action_sequence: vec!["(attack a)".to_string(), "(overcome a b)".to_string()],
        }]);
        let agent = PlannerAgent::new(&store).with_validation(false);
        let stub = StubGenerator::new("(attack a)");

        agent
            .solve("a set of objects [STATEMENT]object a craves object c[PLAN]", &stub)
            .unwrap();

        let seen = stub.seen.borrow();
        let prompt = &seen.as_ref().unwrap().prompt;
        assert!(prompt.contains("EXAMPLES (copy the style and minimality):"));
        assert!(prompt.contains("(overcome a b)"));
        assert!(prompt.contains("END EXAMPLES."));
    }

    #[test]
    fn validation_does_not_change_the_plan() {
        let store = empty_store();
        let agent = PlannerAgent::new(&store).with_validation(true);
        let stub = StubGenerator::new("not even close to a plan");

        let plan = agent.solve("a set of blocks", &stub).unwrap();
        assert_eq!(plan, vec!["not even close to a plan"]);
    }
}
