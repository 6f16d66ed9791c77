//! Data models for Kinship.
//!
//! A [`Person`] is an immutable genealogical record. Every derived view in
//! this crate (enriched records, child lists, sorted copies) is a fresh value
//! built from borrowed input; the original records are never modified.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::KinshipError;

/// Sex of a person, used to pick the parent field when looking up children.
///
/// On the wire this is the single-letter tag `"m"` or `"f"`. Any other tag
/// is rejected with [`KinshipError::UnsupportedCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl FromStr for Sex {
    type Err = KinshipError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "m" => Ok(Sex::Male),
            "f" => Ok(Sex::Female),
            other => Err(KinshipError::UnsupportedCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = KinshipError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// A single genealogical record.
///
/// `name` is assumed to be unique within a collection; lookups by name return
/// the first match. `died >= born` is assumed but not validated. Either year
/// may be missing; everything derived from a missing year is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,

    pub sex: Sex,

    /// Year of birth, if recorded.
    #[serde(default)]
    pub born: Option<i32>,

    /// Year of death, if recorded.
    #[serde(default)]
    pub died: Option<i32>,

    /// Name of the mother, if known. Empty strings are read as absent.
    #[serde(default, deserialize_with = "deserialize_parent")]
    pub mother: Option<String>,

    /// Name of the father, if known. Empty strings are read as absent.
    #[serde(default, deserialize_with = "deserialize_parent")]
    pub father: Option<String>,
}

impl Person {
    /// Years lived, `died - born`. `None` if either year is missing or the
    /// difference does not fit in an `i32`.
    pub fn age(&self) -> Option<i32> {
        self.died?.checked_sub(self.born?)
    }

    /// Century of death, using ceiling division so that 1800 is still the
    /// 18th century and 1801 is the 19th.
    pub fn century(&self) -> Option<i32> {
        let died = i64::from(self.died?);
        Some((died + 99).div_euclid(100) as i32)
    }

    /// The parent field that points at this person from their children:
    /// `mother` for women, `father` for men.
    pub fn parent_name(&self, sex: Sex) -> Option<&str> {
        match sex {
            Sex::Female => self.mother.as_deref(),
            Sex::Male => self.father.as_deref(),
        }
    }
}

pub(crate) fn deserialize_parent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.filter(|n| !n.is_empty()))
}

/// A person together with the number of years they lived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonWithLifeDuration {
    #[serde(flatten)]
    pub person: Person,

    #[serde(rename = "liveDuration")]
    pub live_duration: Option<i32>,
}

/// A person together with the century they died in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonWithCentury {
    #[serde(flatten)]
    pub person: Person,

    pub century: Option<i32>,
}

/// A person together with their children, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonWithChildren {
    #[serde(flatten)]
    pub person: Person,

    pub children: Vec<Person>,
}

/// Query parameters for GET /people/women-died-before.
#[derive(Debug, Deserialize)]
pub struct DiedBeforeQuery {
    /// Exclusive upper bound on the year of death (default: 1800).
    #[serde(default = "default_died_before_year")]
    pub year: i32,
}

fn default_died_before_year() -> i32 {
    crate::analytics::DEFAULT_DIED_BEFORE_YEAR
}

/// Query parameters for GET /people/lived-at-least.
#[derive(Debug, Deserialize)]
pub struct LivedAtLeastQuery {
    /// Minimum age in years, inclusive (default: 65).
    #[serde(default = "default_min_age")]
    pub age: i32,
}

fn default_min_age() -> i32 {
    crate::analytics::DEFAULT_MIN_AGE
}

/// Query parameters for GET /people/sorted.
#[derive(Debug, Deserialize)]
pub struct SortQuery {
    /// Sort key: `name`, `born`, `died` or `age` (default: `born`).
    #[serde(default = "default_sort_key")]
    pub by: String,
}

fn default_sort_key() -> String {
    "born".to_string()
}
