use serde::{Deserialize, Serialize};

use super::{lenient_list, lenient_string};

/// Squad fields pulled through `squads.squad_id.*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadRef {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cohort: Option<String>,
}

/// One entry of a person's `squads` relation. Without a `fields` selection
/// Directus returns the junction row id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonSquad {
    Id(i64),
    Expanded {
        #[serde(default)]
        squad_id: Option<SquadRef>,
    },
}

impl PersonSquad {
    pub fn squad(&self) -> Option<&SquadRef> {
        match self {
            PersonSquad::Expanded { squad_id } => squad_id.as_ref(),
            PersonSquad::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub prefix: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nickname: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github_handle: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fav_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub squads: Vec<PersonSquad>,
}

impl Person {
    /// Name with the optional prefix ("van", "de") in front
    pub fn display_name(&self) -> String {
        let name = self.name.as_deref().unwrap_or("Unknown").trim();
        match self.prefix.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            Some(prefix) => format!("{} {}", prefix, name),
            None => name.to_string(),
        }
    }

    /// Labels of the expanded squads this person belongs to
    pub fn squad_labels(&self) -> Vec<String> {
        self.squads
            .iter()
            .filter_map(PersonSquad::squad)
            .filter_map(|squad| {
                let name = squad.name.as_deref()?;
                Some(match squad.cohort.as_deref() {
                    Some(cohort) => format!("{} ({})", name, cohort),
                    None => name.to_string(),
                })
            })
            .collect()
    }

    pub fn github_url(&self) -> Option<String> {
        self.github_handle
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(|h| format!("https://github.com/{}", h.trim_start_matches('@')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_person() {
        let json = r#"{
            "id": 42,
            "name": "Ada Lovelace",
            "nickname": "ada",
            "unknown_field": true,
            "squads": [
                {"squad_id": {"name": "1G", "cohort": "2425"}},
                {"squad_id": null}
            ]
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id, 42);
        assert_eq!(person.squad_labels(), vec!["1G (2425)".to_string()]);
    }

    #[test]
    fn test_parse_detail_person_with_junction_ids() {
        let json = r#"{"id": 1, "name": "Ada", "squads": [11, 12]}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.squads, vec![PersonSquad::Id(11), PersonSquad::Id(12)]);
        assert!(person.squad_labels().is_empty());
    }

    #[test]
    fn test_unexpected_field_types_do_not_reject_the_record() {
        let json = r#"{
            "id": 5,
            "name": "Grace",
            "role": ["student", "mentor"],
            "fav_color": 16711680,
            "nickname": null,
            "bio": {"nl": "Hoi"},
            "website": true,
            "squads": null
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.name.as_deref(), Some("Grace"));
        assert_eq!(person.role, None);
        assert_eq!(person.fav_color.as_deref(), Some("16711680"));
        assert_eq!(person.bio, None);
        assert_eq!(person.website.as_deref(), Some("true"));
        assert!(person.squads.is_empty());
    }

    #[test]
    fn test_listing_survives_one_odd_record() {
        let json = r#"[
            {"id": 1, "name": "Ada", "squads": [{"squad_id": {"name": "1G", "cohort": 2425}}, "junk"]},
            {"id": 2, "name": 42, "squads": {"unexpected": true}}
        ]"#;
        let persons: Vec<Person> = serde_json::from_str(json).unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].squad_labels(), vec!["1G (2425)".to_string()]);
        assert_eq!(persons[1].display_name(), "42");
        assert!(persons[1].squads.is_empty());
    }

    #[test]
    fn test_display_name() {
        let mut person: Person = serde_json::from_str(r#"{"id": 1, "name": "Berg"}"#).unwrap();
        assert_eq!(person.display_name(), "Berg");

        person.prefix = Some("van den".to_string());
        assert_eq!(person.display_name(), "van den Berg");

        person.prefix = Some("  ".to_string());
        person.name = None;
        assert_eq!(person.display_name(), "Unknown");
    }

    #[test]
    fn test_github_url() {
        let mut person: Person = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(person.github_url(), None);

        person.github_handle = Some("@adalovelace".to_string());
        assert_eq!(person.github_url().as_deref(), Some("https://github.com/adalovelace"));
    }
}
