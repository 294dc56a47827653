//! # chord_bank
//!
//! Spell musical chords from a root note name and a chord-type symbol,
//! with correct sharp/flat (enharmonic) choices throughout.
//!
//! ## Example
//! ```rust
//! use chord_bank::ChordBank;
//!
//! fn run() -> Result<(), chord_bank::ChordError> {
//!     let bank = ChordBank::new();
//!
//!     // Spell an Eb minor seventh
//!     let chord = bank.create("Eb", "m7")?;
//!     assert_eq!(chord.note_names(), ["Eb", "Gb", "Bb", "Db"]);
//!
//!     // Shift a C major triad up a whole step
//!     let mut chord = bank.create("C", "M")?;
//!     chord.transpose("2")?;
//!     assert_eq!(chord.note_names(), ["D", "F#", "A"]);
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// High-level chord construction API.
pub use chord::{Chord, ChordBank, ChordError, ChordRequest};

/// Interval parsing and calculation.
pub use interval::{note_at_interval, Alteration, IntervalError, IntervalSpec, Quality};

/// Pitch-class catalog.
pub use note::{Accidental, Note, Spelling};

/// Pitch-class catalog module.
pub mod note;

/// Interval engine module.
pub mod interval;

/// Chord construction module.
pub mod chord;
