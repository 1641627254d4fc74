//! Text Matching Core
//!
//! Composable recognizers over narrow, wide, UTF-8 and SGML-encoded text,
//! plus ready-made grammars for bank account numbers, payment references and
//! HTTP requests. Every match is reported as offsets into the caller's buffer.
//!
//! # Architecture
//!
//! - **span.rs** - Span type, `NPOS` sentinel, `Spanned` trait
//! - **source.rs** - `Source` trait over code units, `Glyph`, `Sgml` source
//! - **classify.rs** - Character classes and case folding per grammar
//! - **matcher.rs** - `Recognizer` trait, `MatchFlags`, `Match` results
//! - **grammar.rs** - Node arena with primitives and combinators
//! - **sgml.rs** - Entity comparator, decoding and encoding
//! - **entities.rs** - Entity tables (generated)
//! - **mapping.rs** - Offset mapping between source and decoded text
//! - **iban.rs**, **creditor_reference.rs**, **si_reference.rs** - Validating grammars
//! - **http.rs** - HTTP request line, headers and their elements
//! - **weighted.rs** - q-weighted `Accept-*` lists
//! - **error.rs** - Contract violation errors

pub mod classify;
pub mod creditor_reference;
mod entities;
pub mod error;
pub mod grammar;
pub mod http;
pub mod iban;
pub mod mapping;
pub mod matcher;
pub mod sgml;
pub mod si_reference;
pub mod source;
pub mod span;
pub mod weighted;

pub use classify::{AsciiClassifier, Classifier, DefaultClassifier};
pub use creditor_reference::{CreditorReference, CreditorReferenceMatch};
pub use error::{Error, ErrorCode};
pub use grammar::{Grammar, Node, NodeId, Rule};
pub use iban::{GroupSeparator, Iban, IbanMatch};
pub use mapping::Mapping;
pub use matcher::{Match, MatchFlags, Recognizer};
pub use sgml::Escape;
pub use si_reference::{SiPart, SiReference, SiReferenceMatch};
pub use source::{Glyph, Sgml, Source};
pub use span::{Span, Spanned, NPOS};
pub use weighted::{Weight, WeightedCollection, WeightedValue};
