use std::path::PathBuf;

use crate::catalog::default_cache_path;
use crate::formatters::OutputFormat;
use crate::parser::InputGrammar;

/// Everything one conversion run needs to know
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Decklist text file to read
    pub input: PathBuf,
    /// File to write the converted output to
    pub output: PathBuf,
    /// Grammar used to parse input lines
    pub grammar: InputGrammar,
    /// Format to write
    pub format: OutputFormat,
    /// Location of the cached Scryfall set catalog
    pub cache_path: PathBuf,
    /// Ignore the cache and fetch the catalog again
    pub refresh: bool,
}

impl ConvertConfig {
    /// Config for `input` using the given formats; the output file defaults to
    /// the format's file name in the working directory
    pub fn new(input: impl Into<PathBuf>, grammar: InputGrammar, format: OutputFormat) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(format.default_file_name()),
            grammar,
            format,
            cache_path: default_cache_path(),
            refresh: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_cache_path(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = cache_path.into();
        self
    }

    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }
}

impl Default for ConvertConfig {
    /// `input.txt` in TCGplayer format to `output.csv` for Card Kingdom
    fn default() -> Self {
        Self::new("input.txt", InputGrammar::Bracketed, OutputFormat::CardKingdom)
    }
}
