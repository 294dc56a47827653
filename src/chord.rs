//! Chord Builder
//!
//! Static chord-type library, chord construction from a root and a
//! recipe of interval specifiers, and the request-facing entry point.

use std::fmt::Display;

use thiserror::Error;

use crate::interval::{note_at_interval, IntervalError};
use crate::note::Note;

/// Chord-type symbol and the intervals stacked above its root. The
/// root itself is implicit and never listed in a recipe.
const CHORD_LIBRARY: &[(&str, &[&str])] = &[
    ("M", &["3", "5"]),
    ("m", &["b3", "5"]),
    ("dim", &["b3", "bb5"]),
    ("aug", &["3", "##5"]),
    ("dim7", &["b3", "bb5", "bb7"]),
    ("m7b5", &["b3", "bb5", "b7"]),
    ("m7", &["b3", "5", "b7"]),
    ("mM7", &["b3", "5", "7"]),
    ("7", &["3", "5", "b7"]),
    ("M7", &["3", "5", "7"]),
    ("aug7", &["3", "##5", "b7"]),
    // augM7 shares aug7's recipe in the source data; kept verbatim.
    ("augM7", &["3", "##5", "b7"]),
];

/// Errors when building or requesting chords.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChordError {
    /// The chord-type symbol is not in the library.
    #[error("unknown chord type `{symbol}`")]
    UnknownType {
        /// The symbol as received.
        symbol: String,
    },

    /// A creation request arrived without its required fields.
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields {
        /// Names of the absent fields, in declaration order.
        fields: Vec<&'static str>,
    },

    /// Root resolution or interval calculation failed.
    #[error(transparent)]
    Interval(#[from] IntervalError),
}

/// A spelled chord: root, type symbol and the full note sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: Note,
    symbol: String,
    recipe: Vec<String>,
    notes: Vec<Note>,
}

impl Chord {
    /// Build a chord from a root name and a recipe of interval
    /// specifiers.
    ///
    /// The root resolves first, so an unknown root fails before any
    /// interval work. The note sequence is the root followed by one
    /// note per recipe entry, in recipe order; any bad entry aborts
    /// the whole build and no partial chord is returned.
    pub fn build<S: AsRef<str>>(
        root: &str,
        symbol: &str,
        recipe: &[S],
    ) -> Result<Chord, ChordError> {
        let root_note = Note::by_name(root).ok_or_else(|| IntervalError::InvalidRoot {
            name: root.to_string(),
        })?;

        let mut notes = Vec::with_capacity(recipe.len() + 1);
        notes.push(root_note);
        for spec in recipe {
            notes.push(note_at_interval(root_note.name(), spec.as_ref())?);
        }

        Ok(Chord {
            root: root_note,
            symbol: symbol.to_string(),
            recipe: recipe.iter().map(|s| s.as_ref().to_string()).collect(),
            notes,
        })
    }

    /// The root note.
    pub fn root(&self) -> Note {
        self.root
    }

    /// The chord-type symbol, e.g. `"m7"`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The recipe this chord was built from.
    pub fn recipe(&self) -> &[String] {
        &self.recipe
    }

    /// The spelled notes, root first, in recipe order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The spelled note names, root first, in recipe order.
    pub fn note_names(&self) -> Vec<&'static str> {
        self.notes.iter().map(Note::name).collect()
    }

    /// Move the whole chord by an interval, respelling every note.
    ///
    /// The new root is the note at `interval` above the current root,
    /// and the notes are rebuilt from the stored recipe. All or
    /// nothing: on any error the chord is left exactly as it was.
    pub fn transpose(&mut self, interval: &str) -> Result<(), ChordError> {
        let new_root = note_at_interval(self.root.name(), interval)?;
        let rebuilt = Chord::build(new_root.name(), &self.symbol, &self.recipe)?;
        *self = rebuilt;
        Ok(())
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root.name(), self.symbol)
    }
}

/// Entry point over the static chord-type library.
pub struct ChordBank {
    library: &'static [(&'static str, &'static [&'static str])],
}

impl ChordBank {
    /// A bank over the built-in chord-type library.
    pub fn new() -> Self {
        ChordBank {
            library: CHORD_LIBRARY,
        }
    }

    /// Look up a chord type's recipe.
    pub fn pattern(&self, symbol: &str) -> Option<&'static [&'static str]> {
        self.library
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map(|&(_, recipe)| recipe)
    }

    /// The known chord-type symbols, in library order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.library.iter().map(|&(sym, _)| sym)
    }

    /// Create a chord from a root name and a chord-type symbol.
    pub fn create(&self, root: &str, symbol: &str) -> Result<Chord, ChordError> {
        let recipe = self
            .pattern(symbol)
            .ok_or_else(|| ChordError::UnknownType {
                symbol: symbol.to_string(),
            })?;
        Chord::build(root, symbol, recipe)
    }

    /// Validate and fulfill a raw creation request.
    ///
    /// The failures a caller usually surfaces as warnings (missing
    /// fields, unknown chord type) are logged at warn level before the
    /// error is returned; the calculation itself never logs.
    pub fn create_from_request(&self, request: ChordRequest) -> Result<Chord, ChordError> {
        let (root, symbol) = request.validate()?;
        match self.create(&root, &symbol) {
            Err(err @ ChordError::UnknownType { .. }) => {
                log::warn!("no matching chord type `{symbol}`");
                Err(err)
            }
            result => result,
        }
    }
}

impl Default for ChordBank {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw chord-creation request, fields as received from a caller.
#[derive(Debug, Default, Clone)]
pub struct ChordRequest {
    /// Root note name, e.g. `"Eb"`.
    pub root: Option<String>,
    /// Chord-type symbol, e.g. `"m7"`.
    pub kind: Option<String>,
}

impl ChordRequest {
    /// Check that both required fields are present and non-empty.
    ///
    /// Every absent field is reported at once, and a single warning
    /// naming them is logged. An empty string counts as missing.
    pub fn validate(self) -> Result<(String, String), ChordError> {
        let root = self.root.filter(|s| !s.is_empty());
        let kind = self.kind.filter(|s| !s.is_empty());

        let mut missing = Vec::new();
        if root.is_none() {
            missing.push("root");
        }
        if kind.is_none() {
            missing.push("type");
        }

        match (root, kind) {
            (Some(root), Some(kind)) => Ok((root, kind)),
            _ => {
                log::warn!("the following fields are required: {}", missing.join(", "));
                Err(ChordError::MissingFields { fields: missing })
            }
        }
    }
}
