// src/models/profile.rs

use serde::{Deserialize, Serialize};

/// Faculty profile as returned by `viewProfile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyProfile {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "facultyUsername", default)]
    pub username: String,

    #[serde(default)]
    pub branch: String,

    /// Free-form; the backend stores either a string or a list here.
    #[serde(default)]
    pub subject: serde_json::Value,
}

impl FacultyProfile {
    /// Subject rendered for display.
    pub fn subject_label(&self) -> String {
        match &self.subject {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_label_handles_list_and_string() {
        let p: FacultyProfile =
            serde_json::from_str(r#"{"name":"N","subject":["DBMS","OS"]}"#).unwrap();
        assert_eq!(p.subject_label(), "DBMS, OS");
        let p: FacultyProfile = serde_json::from_str(r#"{"subject":"DBMS"}"#).unwrap();
        assert_eq!(p.subject_label(), "DBMS");
        let p: FacultyProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(p.subject_label(), "");
    }
}
