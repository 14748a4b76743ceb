//! Variables declared in `vars:` and `env:` blocks
//!
//! A variable is either a static value or an `sh:` expression that the
//! execution engine evaluates later. Nothing here expands either form.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered mapping of variable name to value, in declaration order
pub type Vars = IndexMap<String, Var>;

/// A single variable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Var {
    /// A literal value
    Static(String),
    /// A shell expression, evaluated by the execution engine
    Sh { sh: String },
}

impl Var {
    /// Creates a static variable
    pub fn new_static(value: impl Into<String>) -> Self {
        Var::Static(value.into())
    }

    /// Returns the static value, if this is not a shell expression
    pub fn as_static(&self) -> Option<&str> {
        match self {
            Var::Static(value) => Some(value),
            Var::Sh { .. } => None,
        }
    }
}

impl<'de> Deserialize<'de> for Var {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        use serde_yaml::Value;

        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Var::Static(String::new())),
            Value::Bool(b) => Ok(Var::Static(b.to_string())),
            Value::Number(n) => Ok(Var::Static(n.to_string())),
            Value::String(s) => Ok(Var::Static(s)),
            Value::Mapping(map) => match map.get("sh") {
                Some(Value::String(sh)) => Ok(Var::Sh { sh: sh.clone() }),
                _ => Err(D::Error::custom(
                    "variable mapping must contain a string `sh` key",
                )),
            },
            Value::Sequence(_) => Err(D::Error::custom("variables cannot be sequences")),
            Value::Tagged(_) => Err(D::Error::custom("variables cannot be tagged values")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_become_static_strings() {
        let yaml = r#"
NAME: app
PORT: 8080
DEBUG: true
EMPTY:
"#;
        let vars: Vars = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(vars["NAME"], Var::new_static("app"));
        assert_eq!(vars["PORT"], Var::new_static("8080"));
        assert_eq!(vars["DEBUG"], Var::new_static("true"));
        assert_eq!(vars["EMPTY"], Var::new_static(""));
    }

    #[test]
    fn sh_mapping_is_kept_unevaluated() {
        let vars: Vars = serde_yaml::from_str("GIT_COMMIT: { sh: git rev-parse HEAD }").unwrap();

        assert_eq!(
            vars["GIT_COMMIT"],
            Var::Sh {
                sh: "git rev-parse HEAD".to_string()
            }
        );
        assert_eq!(vars["GIT_COMMIT"].as_static(), None);
    }

    #[test]
    fn declaration_order_is_preserved() {
        let vars: Vars = serde_yaml::from_str("Z: 1\nA: 2\nM: 3").unwrap();
        let keys: Vec<_> = vars.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn mapping_without_sh_is_rejected() {
        let result: Result<Vars, _> = serde_yaml::from_str("BAD: { cmd: ls }");
        assert!(result.is_err());
    }
}
