//! Decklist conversion: parse, resolve set names, serialize.
//!
//! The whole input is resolved before anything is written, so an unknown set
//! code anywhere in the file leaves no output behind.

use crate::catalog::{SetCatalog, SetResolver};
use crate::config::ConvertConfig;
use crate::error::ConvertResult;
use crate::formatters::{format_records, OutputFormat};
use crate::io::{read_decklist, write_output};
use crate::models::{CardRecord, DecklistLine};
use crate::parser::{parse_lines, InputGrammar};

/// Resolve set names for every parsed line, in order, stopping at the first
/// unknown set code
pub fn resolve_lines<R: SetResolver + ?Sized>(
    lines: Vec<DecklistLine>,
    resolver: &R,
) -> ConvertResult<Vec<CardRecord>> {
    lines
        .into_iter()
        .map(|line| {
            CardRecord::resolve(line, resolver).inspect_err(|e| {
                log::error!("Cannot resolve set: {}", e);
            })
        })
        .collect()
}

/// Convert decklist text from `grammar` to `format`
pub fn convert<R: SetResolver + ?Sized>(
    input: &str,
    grammar: InputGrammar,
    format: OutputFormat,
    resolver: &R,
) -> ConvertResult<String> {
    convert_lines(input.lines(), grammar, format, resolver).map(|(output, _)| output)
}

fn convert_lines<I, S, R>(
    lines: I,
    grammar: InputGrammar,
    format: OutputFormat,
    resolver: &R,
) -> ConvertResult<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: SetResolver + ?Sized,
{
    let records = resolve_lines(parse_lines(grammar, lines), resolver)?;
    let output = format_records(format, &records)?;
    Ok((output, records.len()))
}

/// Run a conversion with an already-loaded resolver; returns the number of
/// cards written
pub fn run_with_resolver<R: SetResolver + ?Sized>(
    config: &ConvertConfig,
    resolver: &R,
) -> ConvertResult<usize> {
    let lines = read_decklist(&config.input)?;
    let (output, count) = convert_lines(&lines, config.grammar, config.format, resolver)?;
    write_output(&config.output, &output)?;
    Ok(count)
}

/// Load the set catalog and run a full file-to-file conversion
pub fn run(config: &ConvertConfig) -> ConvertResult<usize> {
    log::info!(
        "Converting {} ({:?}) to {} ({:?})",
        config.input.display(),
        config.grammar,
        config.output.display(),
        config.format
    );

    // Fail on a missing input file before touching the network
    if !config.input.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("input file not found: {}", config.input.display()),
        )
        .into());
    }

    let catalog = SetCatalog::load(&config.cache_path, config.refresh)?;
    let count = run_with_resolver(config, &catalog)?;

    log::info!("Converted {} cards", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::scryfall::ScryfallSet;
    use crate::error::ConvertError;
    use std::collections::HashMap;

    fn catalog() -> SetCatalog {
        SetCatalog::from_sets(vec![
            ScryfallSet::new("ons", "Onslaught"),
            ScryfallSet::new("dom", "Dominaria"),
        ])
    }

    /// Resolver backed by a plain map, standing in for the Scryfall catalog
    struct MapResolver(HashMap<String, String>);

    impl SetResolver for MapResolver {
        fn resolve(&self, code: &str) -> ConvertResult<&str> {
            self.0
                .get(&code.to_uppercase())
                .map(String::as_str)
                .ok_or_else(|| ConvertError::SetNotFound(code.to_string()))
        }
    }

    #[test]
    fn end_to_end_card_kingdom() {
        let output = convert(
            "4 Polluted Delta [ONS]",
            InputGrammar::Bracketed,
            OutputFormat::CardKingdom,
            &catalog(),
        )
        .unwrap();
        assert_eq!(output, "Polluted Delta,Onslaught,0,4\n");
    }

    #[test]
    fn end_to_end_numbered_to_decklist() {
        let input = "1 Llanowar Elves (DOM) 182\n4 Polluted Delta (ons) 322";
        let output = convert(input, InputGrammar::Numbered, OutputFormat::Decklist, &catalog()).unwrap();
        assert_eq!(output, "1 Llanowar Elves | DOM | 182\n4 Polluted Delta | ONS | 322");
    }

    #[test]
    fn bracketed_to_decklist_omits_collector_number() {
        let output = convert(
            "1 Llanowar Elves (DOM)",
            InputGrammar::Bracketed,
            OutputFormat::Decklist,
            &catalog(),
        )
        .unwrap();
        assert_eq!(output, "1 Llanowar Elves | DOM");
    }

    #[test]
    fn unknown_set_fails_whole_conversion() {
        let input = "4 Polluted Delta [ONS]\n1 Black Lotus [LEA]";
        match convert(input, InputGrammar::Bracketed, OutputFormat::CardKingdom, &catalog()) {
            Err(ConvertError::SetNotFound(code)) => assert_eq!(code, "LEA"),
            other => panic!("Expected SetNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn unmatched_lines_are_not_resolved() {
        // "LEA" is unknown but the line has no bracket group, so it never reaches the resolver
        let input = "Deck\n1 Black Lotus LEA\n4 Polluted Delta [ONS]";
        let output =
            convert(input, InputGrammar::Bracketed, OutputFormat::CardKingdom, &catalog()).unwrap();
        assert_eq!(output, "Polluted Delta,Onslaught,0,4\n");
    }

    #[test]
    fn comment_only_input_produces_empty_output() {
        let output = convert(
            "// nothing here\n\nSideboard",
            InputGrammar::Bracketed,
            OutputFormat::Decklist,
            &catalog(),
        )
        .unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn works_with_any_resolver() {
        let resolver = MapResolver(HashMap::from([(
            "ONS".to_string(),
            "Onslaught".to_string(),
        )]));
        let output = convert(
            "4 Polluted Delta [ons]",
            InputGrammar::Bracketed,
            OutputFormat::CardKingdom,
            &resolver,
        )
        .unwrap();
        assert_eq!(output, "Polluted Delta,Onslaught,0,4\n");
    }

    #[test]
    fn resolve_lines_keeps_order() {
        let lines = parse_lines(
            InputGrammar::Bracketed,
            ["1 Llanowar Elves [DOM]", "4 Polluted Delta [ONS]"],
        );
        let records = resolve_lines(lines, &catalog()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.set_name()).collect();
        assert_eq!(names, vec!["Dominaria", "Onslaught"]);
    }
}
