//! Activity parameter schema.
//!
//! The params schema is the document an activity platform reads to render the
//! configuration form of a ReflexEval activity. It is served verbatim at
//! `/params` and is also the source of every plan's settings.

use crate::error::{ReflexError, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_PARAMS_SCHEMA: &str = include_str!("../assets/params_schema.json");

/// Well-known parameter names.
pub mod names {
    pub const CRITERIA: &str = "criteria";
    pub const SESSIONS_NUMBER: &str = "sessions_number";
    pub const REFLECTION_INTERVAL_DAYS: &str = "reflection_interval_days";
    pub const DEADLINE_UTC: &str = "deadline_utc";
    pub const ALLOW_REVISIONS: &str = "allow_revisions";
    pub const REFLECTION_PROMPTS: &str = "reflection_prompts";
    pub const COMMENT_ENABLED: &str = "comment_enabled";
    pub const LOCALE: &str = "locale";
}

/// The full parameter schema of an activity.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ParamsSchema {
    pub schema_version: String,
    pub activity_type: String,
    pub name: String,
    pub params: Vec<ParamDefinition>,
}

/// One configurable parameter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ParamDefinition {
    pub name: String,
    #[serde(flatten)]
    pub value: ParamValue,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Type-specific body of a parameter, tagged by its `type` field.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamValue {
    List {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        items: Vec<CriterionDefinition>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_type: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        default: Vec<String>,
    },
    Integer {
        default: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Datetime {
        default: String,
    },
    Boolean {
        default: bool,
    },
    #[serde(rename = "string")]
    Text {
        default: String,
    },
}

impl ParamValue {
    /// Name of the `type` tag, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Integer { .. } => "integer",
            Self::Datetime { .. } => "datetime",
            Self::Boolean { .. } => "boolean",
            Self::Text { .. } => "string",
        }
    }
}

/// A self-assessment criterion listed under the `criteria` parameter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CriterionDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub levels: Vec<String>,
}

fn default_weight() -> f64 {
    1.0
}

/// Bounds-checked integer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerParam {
    pub default: i64,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntegerParam {
    pub fn contains(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

impl ParamsSchema {
    /// Parses the ReflexEval AP schema bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PARAMS_SCHEMA)
    }

    /// Parses a schema from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Finds a parameter by name.
    pub fn find(&self, name: &str) -> Option<&ParamDefinition> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Returns an integer parameter, checking that its default lies within
    /// its own `[min, max]` range.
    pub fn integer(&self, name: &str) -> Result<Option<IntegerParam>> {
        match self.find(name).map(|p| &p.value) {
            None => Ok(None),
            Some(ParamValue::Integer { default, min, max }) => {
                let param = IntegerParam {
                    default: *default,
                    min: *min,
                    max: *max,
                };
                if !param.contains(param.default) {
                    return Err(ReflexError::config(format!(
                        "parameter '{}' default {} is outside [{}, {}]",
                        name,
                        default,
                        min.map_or("-inf".to_string(), |v| v.to_string()),
                        max.map_or("+inf".to_string(), |v| v.to_string()),
                    )));
                }
                Ok(Some(param))
            }
            Some(other) => Err(type_mismatch(name, "integer", other)),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<Option<bool>> {
        match self.find(name).map(|p| &p.value) {
            None => Ok(None),
            Some(ParamValue::Boolean { default }) => Ok(Some(*default)),
            Some(other) => Err(type_mismatch(name, "boolean", other)),
        }
    }

    /// Returns the default of a `string` or `datetime` parameter.
    pub fn text(&self, name: &str) -> Result<Option<&str>> {
        match self.find(name).map(|p| &p.value) {
            None => Ok(None),
            Some(ParamValue::Text { default }) | Some(ParamValue::Datetime { default }) => {
                Ok(Some(default.as_str()))
            }
            Some(other) => Err(type_mismatch(name, "string", other)),
        }
    }

    pub fn string_list(&self, name: &str) -> Result<Option<&[String]>> {
        match self.find(name).map(|p| &p.value) {
            None => Ok(None),
            Some(ParamValue::List { default, .. }) => Ok(Some(default.as_slice())),
            Some(other) => Err(type_mismatch(name, "list", other)),
        }
    }

    /// Returns the self-assessment criteria, or an empty slice when the
    /// schema declares none.
    pub fn criteria(&self) -> Result<&[CriterionDefinition]> {
        match self.find(names::CRITERIA).map(|p| &p.value) {
            None => Ok(&[]),
            Some(ParamValue::List { items, .. }) => Ok(items.as_slice()),
            Some(other) => Err(type_mismatch(names::CRITERIA, "list", other)),
        }
    }
}

fn type_mismatch(name: &str, expected: &str, found: &ParamValue) -> ReflexError {
    ReflexError::config(format!(
        "parameter '{}' must be of type {}, found {}",
        name,
        expected,
        found.type_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schema_parses() {
        let schema = ParamsSchema::builtin().unwrap();
        assert_eq!(schema.activity_type, "reflexeval_ap");
        assert_eq!(schema.params.len(), 9);
    }

    #[test]
    fn test_builtin_criteria() {
        let schema = ParamsSchema::builtin().unwrap();
        let criteria = schema.criteria().unwrap();
        let names: Vec<&str> = criteria.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["empenho", "dominio", "autonomia"]);
        assert_eq!(criteria[1].weight, 0.34);
        assert_eq!(criteria[0].levels.len(), 4);
    }

    #[test]
    fn test_builtin_accessors() {
        let schema = ParamsSchema::builtin().unwrap();
        let sessions = schema.integer(names::SESSIONS_NUMBER).unwrap().unwrap();
        assert_eq!(sessions.default, 3);
        assert_eq!(sessions.min, Some(1));
        assert_eq!(sessions.max, Some(10));
        assert_eq!(schema.boolean(names::ALLOW_REVISIONS).unwrap(), Some(true));
        assert_eq!(schema.text(names::LOCALE).unwrap(), Some("pt-PT"));
        assert_eq!(
            schema.text(names::DEADLINE_UTC).unwrap(),
            Some("2025-12-20T23:59:00Z")
        );
        assert_eq!(
            schema
                .string_list(names::REFLECTION_PROMPTS)
                .unwrap()
                .map(|p| p.len()),
            Some(3)
        );
    }

    #[test]
    fn test_missing_parameter_is_none() {
        let schema = ParamsSchema::builtin().unwrap();
        assert_eq!(schema.integer("unknown").unwrap(), None);
    }

    #[test]
    fn test_type_mismatch_is_config_error() {
        let schema = ParamsSchema::builtin().unwrap();
        let err = schema.integer(names::LOCALE).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("found string"));
    }

    #[test]
    fn test_integer_default_outside_range() {
        let json = r#"{
            "schema_version": "1.0",
            "activity_type": "reflexeval_ap",
            "name": "test",
            "params": [
                {"name": "sessions_number", "type": "integer", "label": "n",
                 "default": 12, "min": 1, "max": 10}
            ]
        }"#;
        let schema = ParamsSchema::from_json(json).unwrap();
        assert!(schema.integer(names::SESSIONS_NUMBER).unwrap_err().is_config());
    }

    #[test]
    fn test_criterion_without_weight_defaults_to_one() {
        let json = r#"{
            "schema_version": "1.0",
            "activity_type": "reflexeval_ap",
            "name": "test",
            "params": [
                {"name": "criteria", "type": "list", "label": "c",
                 "items": [{"name": "empenho", "type": "ordinal", "label": "Empenho"}]}
            ]
        }"#;
        let schema = ParamsSchema::from_json(json).unwrap();
        assert_eq!(schema.criteria().unwrap()[0].weight, 1.0);
    }

    #[test]
    fn test_serializes_type_tag() {
        let schema = ParamsSchema::builtin().unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["params"][1]["type"], "integer");
        assert_eq!(value["params"][8]["type"], "string");
        assert_eq!(value["params"][0]["items"][0]["type"], "ordinal");
    }
}
