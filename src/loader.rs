//! Loading person collections from JSON.
//!
//! The input is a JSON array of records shaped like
//!
//! ```json
//! {"name": "Emma de Milliano", "sex": "f", "born": 1876, "died": 1956,
//!  "mother": "Sophia van Damme", "father": "Petrus de Milliano"}
//! ```
//!
//! `born` and `died` may be missing or `null`. A record with a sex tag other
//! than `"m"` or `"f"` fails the whole load with
//! [`KinshipError::UnsupportedCategory`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::error::{KinshipError, Result};
use crate::model::{Person, Sex, deserialize_parent};

/// A record as it appears on the wire, before the sex tag is checked.
#[derive(Debug, Deserialize)]
struct RawPerson {
    name: String,
    sex: String,
    #[serde(default)]
    born: Option<i32>,
    #[serde(default)]
    died: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_parent")]
    mother: Option<String>,
    #[serde(default, deserialize_with = "deserialize_parent")]
    father: Option<String>,
}

impl TryFrom<RawPerson> for Person {
    type Error = KinshipError;

    fn try_from(raw: RawPerson) -> Result<Self> {
        let sex = raw.sex.parse::<Sex>().inspect_err(|e| {
            warn!(name = %raw.name, error = %e, "Rejecting person record");
        })?;

        Ok(Person {
            name: raw.name,
            sex,
            born: raw.born,
            died: raw.died,
            mother: raw.mother,
            father: raw.father,
        })
    }
}

fn into_people(records: Vec<RawPerson>) -> Result<Vec<Person>> {
    records.into_iter().map(Person::try_from).collect()
}

/// Parse a collection from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<Person>> {
    into_people(serde_json::from_str(json)?)
}

/// Parse a collection from any reader producing JSON.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Person>> {
    into_people(serde_json::from_reader(reader)?)
}

/// Read and parse a collection from a JSON file.
#[instrument]
pub fn load_file(path: &Path) -> Result<Vec<Person>> {
    let file = File::open(path)?;
    let people = from_reader(BufReader::new(file))?;

    info!(
        count = people.len(),
        women = people.iter().filter(|p| p.sex == Sex::Female).count(),
        missing_years = people
            .iter()
            .filter(|p| p.born.is_none() || p.died.is_none())
            .count(),
        "Person records loaded"
    );

    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{lifespans, names};

    #[test]
    fn test_from_json_str() {
        let people = from_json_str(
            r#"[
                {"name":"A","sex":"f","born":1700,"died":1780,"mother":null,"father":null},
                {"name":"B","sex":"m","born":1720,"died":1800,"mother":"A","father":null}
            ]"#,
        )
        .unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(people[1].mother.as_deref(), Some("A"));
    }

    #[test]
    fn test_unknown_sex_fails_load() {
        let err = from_json_str(r#"[{"name":"A","sex":"?","born":1700,"died":1780}]"#).unwrap_err();

        assert!(matches!(err, KinshipError::UnsupportedCategory(ref tag) if tag == "?"));
        assert_eq!(err.to_string(), "`?` is not a supported sex category");
    }

    #[test]
    fn test_unknown_sex_from_reader() {
        let json = br#"[{"name":"A","sex":"m","born":1700,"died":1780},
                        {"name":"B","sex":"x","born":1700,"died":1780}]"#;
        let err = from_reader(&json[..]).unwrap_err();

        assert!(matches!(err, KinshipError::UnsupportedCategory(ref tag) if tag == "x"));
    }

    #[test]
    fn test_missing_years_load() {
        let people = from_json_str(
            r#"[
                {"name":"A","sex":"f","died":1780},
                {"name":"B","sex":"m","born":1720,"died":1800,"mother":"A"},
                {"name":"C","sex":"m","born":1750,"died":null}
            ]"#,
        )
        .unwrap();

        assert_eq!(names(&people), vec!["A", "B", "C"]);
        assert_eq!(lifespans(&people), vec![None, Some(80), None]);
    }

    #[test]
    fn test_malformed_json() {
        let err = from_json_str(r#"[{"name":"A"}]"#).unwrap_err();
        assert!(matches!(err, KinshipError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, KinshipError::Io(_)));
    }
}
