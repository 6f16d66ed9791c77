//! Sorting transforms and the comparator factory.
//!
//! All sorts copy the input first and use a stable sort, so people with equal
//! keys keep their original relative order. People with a missing year sort
//! after everyone whose year is known.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::{KinshipError, Result};
use crate::model::Person;

/// A two-argument ordering function over people.
pub type Comparator = fn(&Person, &Person) -> Ordering;

/// Fields the comparator factory can order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Born,
    Died,
}

impl SortField {
    /// The ordering function for this field.
    pub fn comparator(self) -> Comparator {
        match self {
            SortField::Name => |a, b| compare_names(&a.name, &b.name),
            SortField::Born => |a, b| missing_last(a.born, b.born),
            SortField::Died => |a, b| missing_last(a.died, b.died),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Born => "born",
            SortField::Died => "died",
        }
    }
}

impl FromStr for SortField {
    type Err = KinshipError;

    fn from_str(field: &str) -> Result<Self> {
        match field {
            "name" => Ok(SortField::Name),
            "born" => Ok(SortField::Born),
            "died" => Ok(SortField::Died),
            other => Err(KinshipError::UnsupportedField(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a comparator for the named field.
///
/// Supported fields are `name`, `born` and `died`. Anything else fails with
/// [`KinshipError::UnsupportedField`] carrying the offending name.
pub fn make_comparator(field: &str) -> Result<Comparator> {
    Ok(field.parse::<SortField>()?.comparator())
}

/// Collate two names the way a reader expects a name index to be ordered.
///
/// Levels, each consulted only when the previous one ties:
///
/// 1. base letters, ignoring accents and case (`Émile` sorts with `Emile`)
/// 2. accents, unaccented first (`Emile` before `Émile`)
/// 3. case, lowercase first (`anna` before `Anna`)
/// 4. the exact text, so the order is total
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn with_accents(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

fn case_marks(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

fn missing_last(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A sorted copy of `people`, ordered by `field`.
pub fn sort_by(people: &[Person], field: SortField) -> Vec<Person> {
    sorted_with(people, field.comparator())
}

/// A copy of `people` sorted by year of birth.
pub fn sort_by_born(people: &[Person]) -> Vec<Person> {
    sort_by(people, SortField::Born)
}

/// A copy of `people` sorted by name.
pub fn sort_by_name(people: &[Person]) -> Vec<Person> {
    sort_by(people, SortField::Name)
}

/// A copy of `people` sorted by years lived. Unknown ages sort last.
pub fn sort_by_age(people: &[Person]) -> Vec<Person> {
    sorted_with(people, |a, b| missing_last(a.age(), b.age()))
}

fn sorted_with(people: &[Person], compare: Comparator) -> Vec<Person> {
    let mut sorted = people.to_vec();
    sorted.sort_by(compare);
    sorted
}
