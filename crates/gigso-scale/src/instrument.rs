//! Hand-pan session state.
//!
//! The instrument keeps a single current key, scale and layout. Changes never
//! mutate that value: [`HandPanState::apply_key_change`] returns a new state
//! together with the [`KeyChanged`] record that listeners are told about, and
//! the caller replaces its state by assignment.

use serde::{Deserialize, Serialize};

use crate::layout::HandPanLayout;
use crate::mapper::{map_external_key, map_external_scale, InstrumentScale};
use crate::note::Note;
use crate::pitch::{Key, DEFAULT_KEY};

/// Current key, scale and pad layout of the instrument.
///
/// Deserializing reads only `key` and `scale` and rebuilds the layout, so a
/// stored state can never carry pads that disagree with its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StoredState")]
pub struct HandPanState {
    key: Key,
    scale: InstrumentScale,
    layout: HandPanLayout,
}

#[derive(Deserialize)]
struct StoredState {
    key: Key,
    scale: InstrumentScale,
}

impl From<StoredState> for HandPanState {
    fn from(stored: StoredState) -> Self {
        Self::new(stored.key, stored.scale)
    }
}

/// Payload announced after a key change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyChanged {
    pub key: Key,
    pub scale: InstrumentScale,
    pub notes: HandPanLayout,
}

/// Result of applying a key change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChange {
    pub state: HandPanState,
    pub event: KeyChanged,
}

impl Default for HandPanState {
    /// D minor.
    fn default() -> Self {
        Self::new(DEFAULT_KEY, InstrumentScale::Minor)
    }
}

impl HandPanState {
    /// State for `key` in `scale`, with the layout the engine generates.
    pub fn new(key: Key, scale: InstrumentScale) -> Self {
        Self {
            key,
            scale,
            layout: HandPanLayout::new(key, scale.engine_scale()),
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn scale(&self) -> InstrumentScale {
        self.scale
    }

    pub fn layout(&self) -> &HandPanLayout {
        &self.layout
    }

    /// Note on pad `index` (0-7).
    pub fn pad(&self, index: usize) -> Option<Note> {
        self.layout.pad(index)
    }

    /// Layout notes in ascending pitch order.
    pub fn notes_by_pitch(&self) -> Vec<Note> {
        self.layout.by_pitch()
    }

    /// Builds the state for an external key/scale pair.
    ///
    /// Both values go through the mapper, so flats, mode names and
    /// unrecognised input all resolve to something playable.
    pub fn apply_key_change(&self, external_key: &str, external_scale: &str) -> KeyChange {
        let key = map_external_key(external_key);
        let scale = map_external_scale(external_scale);
        let state = Self::new(key, scale);

        tracing::debug!(
            from_key = self.key.as_str(),
            from_scale = self.scale.as_str(),
            to_key = key.as_str(),
            to_scale = scale.as_str(),
            "hand pan key changed"
        );

        KeyChange {
            state,
            event: state.key_changed(),
        }
    }

    /// Announcement describing this state.
    pub fn key_changed(&self) -> KeyChanged {
        KeyChanged {
            key: self.key,
            scale: self.scale,
            notes: self.layout,
        }
    }
}
