use serde::{Deserialize, Serialize};

use super::{lenient_option, lenient_string};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tribe {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Relation to a tribe: a bare id unless the query expanded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TribeRef {
    Id(i64),
    Expanded(Tribe),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squad {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cohort: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub tribe: Option<TribeRef>,
}

impl Squad {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed squad")
    }

    /// "1G (2425)" style label
    pub fn label(&self) -> String {
        match self.cohort.as_deref() {
            Some(cohort) => format!("{} ({})", self.name(), cohort),
            None => self.name().to_string(),
        }
    }

    pub fn tribe_name(&self) -> Option<&str> {
        match self.tribe.as_ref()? {
            TribeRef::Expanded(tribe) => Some(tribe.name.as_str()),
            TribeRef::Id(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_squad_with_tribe_id() {
        let json = r#"{"id":3,"name":"1G","cohort":"2425","tribe":2}"#;
        let squad: Squad = serde_json::from_str(json).unwrap();
        assert_eq!(squad.label(), "1G (2425)");
        assert_eq!(squad.tribe, Some(TribeRef::Id(2)));
        assert_eq!(squad.tribe_name(), None);
    }

    #[test]
    fn test_parse_squad_with_expanded_tribe() {
        let json = r#"{"id":3,"name":"1H","cohort":"2425","tribe":{"id":2,"name":"FDND Jaar 1"}}"#;
        let squad: Squad = serde_json::from_str(json).unwrap();
        assert_eq!(squad.tribe_name(), Some("FDND Jaar 1"));
    }

    #[test]
    fn test_unparseable_tribe_is_absent() {
        let squad: Squad = serde_json::from_str(r#"{"id":4,"name":"1F","tribe":"FDND"}"#).unwrap();
        assert!(squad.tribe.is_none());
    }

    #[test]
    fn test_numeric_cohort_is_text() {
        let squad: Squad = serde_json::from_str(r#"{"id":4,"name":"1F","cohort":2425}"#).unwrap();
        assert_eq!(squad.label(), "1F (2425)");
    }

    #[test]
    fn test_squad_missing_fields() {
        let squad: Squad = serde_json::from_str(r#"{"id":9}"#).unwrap();
        assert_eq!(squad.label(), "Unnamed squad");
        assert!(squad.tribe.is_none());
    }
}
