// crates/host/src/prompts.rs

//! Prompt templates for the two planning domains.
//!
//! The rule blocks and action vocabularies are load-bearing: downstream
//! models were tuned against these exact strings, so edit with care.

use planshot_core::domain::Domain;
use planshot_core::extract;
use planshot_core::types::Example;

/// At most this many shots are written into the prompt, regardless of how
/// many the selector returned.
const MAX_PROMPT_SHOTS: usize = 3;

const OBJECTS_RULES: &str = "OUTPUT FORMAT (STRICT):
- Output ONLY action lines.
- One action per line.
- Each line MUST start with '(' and end with ')'.
- NEVER write the word 'from' inside parentheses.

VALID ACTIONS:
- (attack X)
- (succumb X)
- (feast X Y)
- (overcome X Y)

STRICT PLANNING RULES:
1) Use ONLY the LAST [STATEMENT] initial conditions + goal.
2) Only act on object letters that appear in the GOAL cravings.
3) If GOAL is a single craving X craves Y, prefer EXACTLY 2 steps:
   (attack X)
   (overcome X Y)
   unless Attack is impossible due to missing preconditions.
4) Do NOT use feast/succumb if Attack is already possible.
5) Never add extra actions after goal is satisfied.
6) Overcome order: if you output (overcome X Y), you must have (attack X) earlier
   unless Pain X is explicitly already true.

";

const BLOCKS_RULES: &str = "OUTPUT FORMAT (STRICT):
- Output ONLY action lines.
- One action per line.
- Each line MUST start with '(' and end with ')'.

VALID ACTIONS:
- (unmount_node X Y)
- (mount_node X Y)
- (engage_payload X)
- (release_payload X)

MECHANICS (STRICT):
A) unmount_node X Y means X was on Y; after this you are HOLDING X.
B) mount_node X Y requires you are holding X; after this hand becomes EMPTY.
C) engage_payload X only for blocks ON THE TABLE; after this you are HOLDING X.
D) release_payload X puts down held X; after this hand becomes EMPTY.

STRICT OPTIMALITY RULES:
1) If goal includes 'X on Y', the final stacking for that relation MUST be (mount_node X Y).
2) If X is currently on Z and you need X on Y, the core move is:
   (unmount_node X Z)
   (mount_node X Y)
   Do NOT insert release/engage between them.
3) Use release/engage ONLY when you must switch which block you are holding.
4) Never use engage_payload before an unmount_node.
5) Build towers bottom-up.
6) Use the SHORTEST valid plan.

";

/// Assemble the full prompt for a problem: fixed rules, goal hint, up to
/// three worked examples, then the problem itself and the PLAN: cue.
pub fn build_prompt(domain: Domain, problem: &str, shots: &[(f64, &Example)]) -> String {
    match domain {
        Domain::Blocks => build_blocks_prompt(problem, shots),
        Domain::Objects => build_objects_prompt(problem, shots),
    }
}

fn build_objects_prompt(problem: &str, shots: &[(f64, &Example)]) -> String {
    let goals = extract::goal_pairs(Domain::Objects, problem);
    let goal_hint = if goals.is_empty() {
        String::new()
    } else {
        let listed: Vec<String> = goals.iter().map(|(a, b)| format!("{a}->{b}")).collect();
        format!(
            "GOAL CRAVINGS (must satisfy exactly): {}\n",
            listed.join(", ")
        )
    };

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!(
        "{OBJECTS_RULES}{goal_hint}Now solve. Output plan lines only.\n"
    ));

    push_shots(&mut parts, "\nEXAMPLES (copy the style and minimality):", shots);

    parts.push(format!("PROBLEM:\n{problem}"));
    parts.push("\nPLAN:".to_string());
    parts.join("\n")
}

fn build_blocks_prompt(problem: &str, shots: &[(f64, &Example)]) -> String {
    let goals = extract::goal_pairs(Domain::Blocks, problem);
    let goal_hint = if goals.is_empty() {
        String::new()
    } else {
        let listed: Vec<String> = goals.iter().map(|(a, b)| format!("{a} on {b}")).collect();
        format!("GOAL STACKS (must satisfy): {}\n", listed.join(", "))
    };

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!(
        "{BLOCKS_RULES}{goal_hint}Now solve. Output plan lines only.\n"
    ));

    push_shots(&mut parts, "\nEXAMPLES (copy the minimal patterns):", shots);

    parts.push(format!("PROBLEM:\n{problem}"));
    parts.push("\nPLAN:".to_string());
    parts.join("\n")
}

fn push_shots(parts: &mut Vec<String>, header: &str, shots: &[(f64, &Example)]) {
    if shots.is_empty() {
        return;
    }
    parts.push(header.to_string());
    for (_, example) in shots.iter().take(MAX_PROMPT_SHOTS) {
        parts.push(format!("\nProblem:\n{}", example.problem));
        parts.push("Plan:".to_string());
        parts.extend(example.plan.iter().cloned());
    }
    parts.push("\nEND EXAMPLES.\n".to_string());
}
