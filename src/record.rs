//! Typed interchange form for version values

use serde::{Deserialize, Serialize};

/// Structured projection of a version value
///
/// Major and minor are required; patch and suffix carry their own presence.
/// Absent optional fields are skipped during serialization, so the JSON form
/// lists keys in major, minor, patch, suffix order with only the populated
/// ones present. Deserializing an object without major or minor fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRecord {
    pub major: String,
    pub minor: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub patch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suffix: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_only_populated_fields() {
        let record = VersionRecord {
            major: "1".to_string(),
            minor: "2".to_string(),
            patch: None,
            suffix: None,
        };

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"major":"1","minor":"2"}"#
        );
    }

    #[test]
    fn serializes_patch_and_suffix_in_declaration_order() {
        let record = VersionRecord {
            major: "2".to_string(),
            minor: "0".to_string(),
            patch: Some("0".to_string()),
            suffix: Some("next".to_string()),
        };

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"major":"2","minor":"0","patch":"0","suffix":"next"}"#
        );
    }

    #[test]
    fn deserializes_missing_optional_fields_as_absent() {
        let record = serde_json::from_value::<VersionRecord>(json!({
            "major": "1",
            "minor": "2"
        }))
        .unwrap();

        assert_eq!(record.patch, None);
        assert_eq!(record.suffix, None);
    }

    #[test]
    fn deserialization_requires_major_and_minor() {
        let missing_minor = serde_json::from_value::<VersionRecord>(json!({
            "major": "1"
        }));
        assert!(missing_minor.is_err());

        let missing_major = serde_json::from_value::<VersionRecord>(json!({
            "minor": "2",
            "patch": "3"
        }));
        assert!(missing_major.is_err());
    }
}
