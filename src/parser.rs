//! Line grammars for plain-text decklists.
//!
//! Each grammar is a single anchored regex. Lines that don't match are
//! skipped rather than reported, so headers, comments and blank lines in an
//! export pass through harmlessly.
//!
//! The name capture is greedy and ends at the *last* bracket group on the
//! line: `1 Foo (Bar) [ONS]` yields the name `Foo (Bar)`, but a name that
//! itself ends in a parenthesized word can be misread as the set code.

use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::DecklistLine;

lazy_static! {
    /// `4 Polluted Delta [ONS]` or `4 Polluted Delta (ONS)`
    static ref BRACKETED_LINE: Regex =
        Regex::new(r"^(\d+) (.*) [\[(]([A-Za-z0-9]+)[\])]$").unwrap();
    /// `1 Llanowar Elves (DOM) 182`
    static ref NUMBERED_LINE: Regex =
        Regex::new(r"^(\d+) (.*) \(([A-Za-z0-9]+)\) (\d+)$").unwrap();
}

/// Supported input line formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputGrammar {
    /// `<qty> <name> [<set>]` or `<qty> <name> (<set>)`, as exported by TCGplayer
    Bracketed,
    /// `<qty> <name> (<set>) <collector number>`
    Numbered,
}

impl InputGrammar {
    fn regex(&self) -> &'static Regex {
        match self {
            InputGrammar::Bracketed => &BRACKETED_LINE,
            InputGrammar::Numbered => &NUMBERED_LINE,
        }
    }
}

/// Parse one decklist line, returning `None` if it doesn't match `grammar`
pub fn parse_line(grammar: InputGrammar, line: &str) -> Option<DecklistLine> {
    let caps = grammar.regex().captures(line.trim())?;

    let quantity = caps[1].parse::<u32>().ok().filter(|q| *q > 0)?;
    let name = caps[2].to_string();
    if name.is_empty() {
        return None;
    }
    let set_code = caps[3].to_uppercase();
    let collector_number = match caps.get(4) {
        Some(m) => Some(m.as_str().parse::<u32>().ok()?),
        None => None,
    };

    Some(DecklistLine {
        quantity,
        name,
        set_code,
        collector_number,
    })
}

/// Parse every line that matches `grammar`, keeping input order
pub fn parse_lines<I, S>(grammar: InputGrammar, lines: I) -> Vec<DecklistLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(grammar, line) {
            Some(entry) => parsed.push(entry),
            None if line.trim().is_empty() => {}
            None => log::debug!("Skipping line {}: {:?}", idx + 1, line.trim()),
        }
    }
    log::info!("Parsed {} decklist entries ({:?} format)", parsed.len(), grammar);
    parsed
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
