#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/stockinsights/insights/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Dictionary-driven company entity matcher.
//!
//! # Example
//!
//! ```
//! use insights_match::EntityMatcher;
//!
//! let matcher = EntityMatcher::with_builtin_dictionary();
//! let entities = matcher.detect("Google announced new earnings today.");
//!
//! assert_eq!(entities[0].ticker.as_str(), "GOOG");
//! assert_eq!(entities[0].confidence, 1.0);
//! ```

/// Static company/alias/executive dictionary.
pub mod dictionary;
/// The two-pass entity matcher.
pub mod matcher;

pub use dictionary::{DictionaryEntry, EntityDictionary, PRIVATE_TICKER};
pub use matcher::EntityMatcher;
