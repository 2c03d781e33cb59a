//! Token plumbing and the locale-agnostic query engine.
//!
//! Extracting anything from text is a one-way pipeline:
//!
//! ```text
//! text ── Tokenizer::tokenize ──> Vec<Token>        (tokenizer.rs)
//!          (locale Lexicon)          │
//!                                    v
//!                           Query::new(tokens, f)   (query.rs)
//!                                    │  f: "parse one value at the cursor"
//!                                    │     built from a locale grammar
//!                                    v
//!           ┌────────────────────────┼─────────────────────────┐
//!      first()              mixed_with_text()         possible_intervals()
//!   slide until f       alternate text and values    every start, every
//!   succeeds                                         shorter stream limit
//! ```
//!
//! Every grammar walks a [`TokenStream`] (stream.rs), a cursor that the
//! grammar moves forward and rewinds by saving and restoring its position.
//! The one invariant everything relies on: a grammar function that fails
//! leaves the cursor where it found it.
//!
//! ## Debugging
//!
//! Each query mode emits a `tracing` event at `debug` level and the
//! tokenizer one at `trace`; the command-line front end prints them when
//! `RUST_LOG=numerus=trace` is set.

#[path = "engine/query.rs"]
mod query;
#[path = "engine/stream.rs"]
mod stream;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub use query::{MatchedRange, Query, Segment, Span};
pub use stream::TokenStream;
pub use tokenizer::Tokenizer;
