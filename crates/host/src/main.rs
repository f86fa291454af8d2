mod log;
mod planner_agent;
mod prompts;
mod store;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use planshot_core::corpus::ExampleCorpus;
use planshot_core::domain::Domain;
use planshot_core::http_generator::HttpTextGenerator;

use planner_agent::PlannerAgent;
use store::ExampleStore;

fn main() -> Result<()> {
    let client = HttpTextGenerator::from_env()?;

    let corpus = ExampleCorpus::from_env();
    let store = ExampleStore::load(&corpus)?;
    println!(
        "Loaded {} examples ({} blocks, {} objects) from {:?}.",
        store.len(),
        store.pool_len(Domain::Blocks),
        store.pool_len(Domain::Objects),
        corpus.path()
    );
    if store.is_empty() {
        log::warn("example corpus is empty - prompts will carry no shots");
    }
    println!("\nFew-Shot Planning Agent");
    println!("Paste a scenario, finish with a line containing only '.'. Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(scenario) = read_scenario(&mut stdin.lock())? else {
            break;
        };
        if scenario.is_empty() {
            continue;
        }

        let mut agent =
            PlannerAgent::new(&store).with_validation(std::env::var("PLANSHOT_VALIDATE").is_ok());
        if let Some(k) = std::env::var("PLANSHOT_SHOTS").ok().and_then(|k| k.parse().ok()) {
            agent = agent.with_shots_k(k);
        }
        match agent.solve(&scenario, &client) {
            Ok(plan) => {
                println!();
                for line in &plan {
                    println!("{line}");
                }
                println!();
            }
            Err(e) => {
                log::error(&e);
                println!();
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Read scenario lines until a line containing only ".". Returns None on
/// EOF or an explicit quit/exit as the first line.
fn read_scenario(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if lines.is_empty()
            && (trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit"))
        {
            return Ok(None);
        }
        if trimmed.trim() == "." {
            return Ok(Some(lines.join("\n").trim().to_string()));
        }
        lines.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn scenario_ends_at_lone_dot() {
        let mut input = Cursor::new("line one\n\nline two\n.\nleftover\n");
        let scenario = read_scenario(&mut input).unwrap().unwrap();
        assert_eq!(scenario, "line one\n\nline two");
    }

    #[test]
    fn quit_stops_reading() {
        let mut input = Cursor::new("QUIT\n");
        assert!(read_scenario(&mut input).unwrap().is_none());
    }

    #[test]
    fn eof_stops_reading() {
        let mut input = Cursor::new("");
        assert!(read_scenario(&mut input).unwrap().is_none());
    }
}
