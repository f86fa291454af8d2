// crates/host/src/log.rs

//! Colored logging for the planning agent.

use std::fmt::Display;

use planshot_core::domain::Domain;

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";

fn domain_color(domain: Domain) -> &'static str {
    match domain {
        Domain::Blocks => BLUE,
        Domain::Objects => MAGENTA,
    }
}

/// Log a domain-tagged progress message.
pub fn domain_info(domain: Domain, message: impl Display) {
    eprintln!(
        "{}{BOLD}[{}]{RESET} {}",
        domain_color(domain),
        domain.name(),
        message
    );
}

/// Log one selected shot with its rank, score, and reference plan length.
pub fn shot(domain: Domain, rank: usize, score: f64, plan_len: usize) {
    eprintln!(
        "{}{BOLD}[{}]{RESET} {DIM}shot {}: score {:.3}, plan len {}{RESET}",
        domain_color(domain),
        domain.name(),
        rank,
        score,
        plan_len
    );
}

/// Log advisory validation codes for a generated plan.
pub fn validation(domain: Domain, codes: &[String]) {
    eprintln!(
        "{}{BOLD}[{}]{RESET} {YELLOW}validation:{RESET} {}",
        domain_color(domain),
        domain.name(),
        truncate(&codes.join(", "), 300)
    );
}

/// Log a warning.
pub fn warn(message: impl Display) {
    eprintln!("{YELLOW}[warn]{RESET} {}", message);
}

/// Log an error.
pub fn error(message: impl Display) {
    eprintln!("{RED}[error]{RESET} {}", message);
}

/// Truncate and clean string for display.
fn truncate(s: &str, max: usize) -> String {
    let clean: String = s
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect();
    let trimmed = clean.trim();
    if trimmed.len() > max {
        format!("{}...", &trimmed[..max])
    } else {
        trimmed.to_string()
    }
}
