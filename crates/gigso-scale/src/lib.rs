//! Gigso Scale - Deterministic Hand-Pan Scale Engine
//!
//! This crate computes the pad layouts of Gigso's hand-pan instrument and
//! translates song keys and scales into the vocabulary the instrument plays.
//! Every function is pure: the same input always produces the same output.
//! The engine and mapper never fail on bad input; only the `try_` and
//! transposition helpers, which parse strictly, return errors.
//!
//! # Layers
//!
//! - **Scale engine**: [`generate_scale_notes`], [`note_frequency`],
//!   [`validate_key_and_scale`], [`all_keys`], [`all_scale_types`], [`scale_info`]
//! - **Key/scale mapper**: [`map_external_key`], [`map_external_scale`]
//! - **Extras**: [`KeySignature`] for accidentals and relative keys,
//!   [`chord_suggestions`] for diatonic triads, [`transpose_notes`] for
//!   moving notes between keys, [`HandPanState`] for the instrument's
//!   current layout
//!
//! # Fallbacks
//!
//! Unknown keys become `D` and unknown scale types become `minor`. Each
//! substitution emits a `tracing` warning with target `gigso_scale::fallback`;
//! install a subscriber to see them. The diagnostics never change results.
//!
//! # Example
//!
//! ```
//! use gigso_scale::{generate_scale_notes, map_external_key, map_external_scale};
//!
//! let key = map_external_key("Bb");
//! let scale = map_external_scale("dorian");
//! let layout = generate_scale_notes(key.as_str(), scale.as_str());
//!
//! assert_eq!(layout.notes()[0].to_string(), "A#4");
//! assert_eq!(layout.len(), 8);
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: pitch classes and keys
//! - [`scale`]: scale types and pad patterns
//! - [`note`]: notes and equal-tempered frequencies
//! - [`layout`]: 8-pad layouts
//! - [`engine`]: string-facing engine entry points
//! - [`mapper`]: external key/scale mapping
//! - [`signature`]: key signatures
//! - [`chords`]: diatonic triads and chord qualities
//! - [`instrument`]: hand-pan session state

pub mod chords;
pub mod engine;
pub mod error;
pub mod instrument;
pub mod layout;
pub mod mapper;
pub mod note;
pub mod pitch;
pub mod scale;
pub mod signature;

pub use chords::{chord_quality, chord_suggestions, diatonic_triads, ChordQuality, Triad};
pub use engine::{all_keys, all_scale_types, scale_info, validate_key_and_scale, ScaleInfo};
pub use error::ScaleError;
pub use instrument::{HandPanState, KeyChange, KeyChanged};
pub use layout::{generate_scale_notes, scale_degrees, HandPanLayout};
pub use mapper::{map_external_key, map_external_scale, InstrumentScale};
pub use note::{note_frequency, transpose_notes, try_note_frequency, Note};
pub use pitch::{Key, PitchClass};
pub use scale::{ScalePattern, ScaleType};
pub use signature::{KeySignature, KeySignatureInfo};
