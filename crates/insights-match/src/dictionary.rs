//! Static company/alias/executive dictionary.
//!
//! The dictionary maps surface names (companies, products, subsidiaries,
//! executives) to ticker symbols, plus a list of indicator keywords that mark
//! a paragraph as likely company coverage. Declaration order is stable and
//! observable: the matcher records the first name that hits per ticker.

use insights_core::Ticker;

/// Sentinel ticker for companies that are not publicly traded.
///
/// Entries mapped to this ticker still participate in matching (and occupy
/// their ticker's dedup slot) but are removed from final results.
pub const PRIVATE_TICKER: &str = "PRIVATE";

/// Built-in name-to-ticker mapping, in declaration order.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // Tech companies
    ("Google", "GOOG"),
    ("Alphabet", "GOOG"),
    ("Amazon", "AMZN"),
    ("AWS", "AMZN"),
    ("Apple", "AAPL"),
    ("Microsoft", "MSFT"),
    ("Azure", "MSFT"),
    ("Facebook", "META"),
    ("Meta", "META"),
    ("Instagram", "META"),
    ("WhatsApp", "META"),
    ("Netflix", "NFLX"),
    ("Tesla", "TSLA"),
    ("SpaceX", PRIVATE_TICKER),
    ("Nvidia", "NVDA"),
    ("AMD", "AMD"),
    ("Intel", "INTC"),
    // Retail companies
    ("Walmart", "WMT"),
    ("Target", "TGT"),
    ("Costco", "COST"),
    ("Home Depot", "HD"),
    // Financial companies
    ("JPMorgan", "JPM"),
    ("JP Morgan", "JPM"),
    ("Bank of America", "BAC"),
    ("Goldman Sachs", "GS"),
    ("Morgan Stanley", "MS"),
    ("Visa", "V"),
    ("Mastercard", "MA"),
    ("PayPal", "PYPL"),
    // Auto companies
    ("Ford", "F"),
    ("General Motors", "GM"),
    ("Toyota", "TM"),
    ("Honda", "HMC"),
    ("BMW", "BMWYY"),
    // Executives
    ("Tim Cook", "AAPL"),
    ("Sundar Pichai", "GOOG"),
    ("Satya Nadella", "MSFT"),
    ("Mark Zuckerberg", "META"),
    ("Elon Musk", "TSLA"),
    ("Jensen Huang", "NVDA"),
    ("Andy Jassy", "AMZN"),
    ("Lisa Su", "AMD"),
    ("Pat Gelsinger", "INTC"),
];

/// Keywords that mark a paragraph as likely company coverage.
const BUILTIN_INDICATORS: &[&str] = &[
    "company",
    "stock",
    "shares",
    "CEO",
    "headquartered",
    "announced",
    "reported",
    "earnings",
    "quarterly",
    "investors",
    "market",
    "revenue",
    "growth",
    "products",
    "launched",
    "unveiled",
];

/// A single dictionary entry mapping a surface name to a ticker.
///
/// Names are unique within a dictionary; many names may share a ticker
/// (aliases, subsidiaries, executives).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// The surface name as it appears in text.
    pub name: String,
    /// The ticker the name maps to.
    pub ticker: Ticker,
}

impl DictionaryEntry {
    /// Creates a new dictionary entry.
    #[must_use]
    pub fn new(name: impl Into<String>, ticker: impl Into<Ticker>) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
        }
    }
}

/// An ordered entity dictionary.
///
/// Loaded once and never mutated. Entries keep their declaration order
/// because first-match-per-ticker depends on it.
#[derive(Debug, Clone)]
pub struct EntityDictionary {
    entries: Vec<DictionaryEntry>,
    indicators: Vec<String>,
}

impl EntityDictionary {
    /// Creates a dictionary from explicit entries and indicator keywords.
    #[must_use]
    pub fn new(entries: Vec<DictionaryEntry>, indicators: Vec<String>) -> Self {
        Self {
            entries,
            indicators,
        }
    }

    /// Returns the built-in dictionary of well-known companies, aliases,
    /// subsidiaries and executives.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES
                .iter()
                .map(|(name, ticker)| DictionaryEntry::new(*name, *ticker))
                .collect(),
            indicators: BUILTIN_INDICATORS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns the entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Returns the indicator keywords.
    #[must_use]
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
