use crate::catalog::SetResolver;
use crate::error::ConvertResult;

/// A decklist line that matched one of the input grammars, before its set
/// code has been looked up in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecklistLine {
    pub quantity: u32,
    pub name: String,
    /// Uppercased set code
    pub set_code: String,
    pub collector_number: Option<u32>,
}

/// A fully resolved card entry, ready to be written by a formatter.
///
/// Only constructed through [`CardRecord::resolve`], so `set_name` is always
/// a name the catalog knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    quantity: u32,
    name: String,
    set_code: String,
    set_name: String,
    is_foil: bool,
    collector_number: Option<u32>,
}

impl CardRecord {
    /// Attach the set name for `line`, failing if the set code is unknown
    pub fn resolve<R: SetResolver + ?Sized>(line: DecklistLine, resolver: &R) -> ConvertResult<Self> {
        let set_name = resolver.resolve(&line.set_code)?.to_string();
        Ok(Self {
            quantity: line.quantity,
            name: line.name,
            set_code: line.set_code,
            set_name,
            is_foil: false,
            collector_number: line.collector_number,
        })
    }

    /// Mark the record as foil (neither input grammar carries this flag)
    pub fn with_foil(mut self, is_foil: bool) -> Self {
        self.is_foil = is_foil;
        self
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn is_foil(&self) -> bool {
        self.is_foil
    }

    pub fn collector_number(&self) -> Option<u32> {
        self.collector_number
    }
}
