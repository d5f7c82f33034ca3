//! String-facing entry points of the scale engine.

use serde::Serialize;

use crate::layout::HandPanLayout;
use crate::pitch::{is_valid_key, resolve_key, CHROMATIC};
use crate::scale::{is_valid_scale, resolve_scale, ScalePattern, ScaleType};

/// Returns `true` iff `key` is one of the twelve sharp spellings and
/// `scale` is a scale type the engine has a pattern for.
///
/// `"pentatonic"` is not accepted here even though the mapper passes it through.
pub fn validate_key_and_scale(key: &str, scale: &str) -> bool {
    is_valid_key(key) && is_valid_scale(scale)
}

/// All keys in chromatic order.
pub fn all_keys() -> [&'static str; 12] {
    CHROMATIC
}

/// All scale types in declaration order.
pub fn all_scale_types() -> [&'static str; 2] {
    ScaleType::ALL.map(|s| s.as_str())
}

/// Display summary of a key/scale request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleInfo {
    /// Key exactly as requested.
    pub key: String,
    /// Scale type exactly as requested.
    pub scale: String,
    /// Layout generated after fallback substitution.
    pub notes: HandPanLayout,
    /// Offsets of the scale type actually used.
    pub pattern: ScalePattern,
    /// `"{key} {scale}"` from the requested strings.
    pub display_name: String,
}

/// Collects the layout, pattern and display name for a key/scale request.
///
/// `key`, `scale` and `display_name` echo the caller's strings unvalidated;
/// `notes` and `pattern` reflect any fallback substitution.
pub fn scale_info(key: &str, scale: &str) -> ScaleInfo {
    let scale_type = resolve_scale(scale);
    let notes = HandPanLayout::new(resolve_key(key), scale_type);
    let pattern = scale_type.pattern();
    ScaleInfo {
        key: key.to_string(),
        scale: scale.to_string(),
        notes,
        pattern,
        display_name: format!("{} {}", key, scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate_scale_notes;
    use crate::scale::{MAJOR_PATTERN, MINOR_PATTERN};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_key_and_scale() {
        assert!(validate_key_and_scale("F#", "major"));
        assert!(validate_key_and_scale("C", "minor"));
        assert!(!validate_key_and_scale("H", "major"));
        assert!(!validate_key_and_scale("C", "pentatonic"));
        assert!(!validate_key_and_scale("Bb", "major"));
    }

    #[test]
    fn test_all_keys_order() {
        assert_eq!(
            all_keys(),
            ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
    }

    #[test]
    fn test_all_scale_types() {
        assert_eq!(all_scale_types(), ["major", "minor"]);
    }

    #[test]
    fn test_scale_info_valid() {
        let info = scale_info("D", "major");
        assert_eq!(info.key, "D");
        assert_eq!(info.scale, "major");
        assert_eq!(info.pattern, MAJOR_PATTERN);
        assert_eq!(info.display_name, "D major");
        assert_eq!(info.notes, generate_scale_notes("D", "major"));
    }

    #[test]
    fn test_scale_info_reports_substituted_pattern() {
        let info = scale_info("H", "blues");
        assert_eq!(info.display_name, "H blues");
        assert_eq!(info.key, "H");
        assert_eq!(info.pattern, MINOR_PATTERN);
        assert_eq!(info.notes, generate_scale_notes("D", "minor"));
    }

    #[test]
    fn test_scale_info_json_shape() {
        let json = serde_json::to_value(scale_info("C", "major")).unwrap();
        assert_eq!(json["display_name"], "C major");
        assert_eq!(json["notes"][0], "C4");
        assert_eq!(json["pattern"][7], 14);
    }
}
