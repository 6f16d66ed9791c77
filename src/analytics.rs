//! Projections, filters, and enrichment over a flat collection of people.
//!
//! Everything in this module is a single pass (or, for the naive children
//! lookup, a pass per person) over borrowed input. Results are always freshly
//! allocated; no input record is modified.

use crate::model::{Person, PersonWithCentury, PersonWithChildren, PersonWithLifeDuration, Sex};

/// Default year bound for [`women_died_before`] when none is given.
pub const DEFAULT_DIED_BEFORE_YEAR: i32 = 1800;

/// Default age threshold for [`lived_at_least`] when none is given.
pub const DEFAULT_MIN_AGE: i32 = 65;

/// Names of all people, in input order.
pub fn names(people: &[Person]) -> Vec<String> {
    people.iter().map(|p| p.name.clone()).collect()
}

/// Years lived (`died - born`) for each person, in input order. `None` where
/// a year is missing.
pub fn lifespans(people: &[Person]) -> Vec<Option<i32>> {
    people.iter().map(Person::age).collect()
}

/// Women whose year of death is strictly before `year`. Women without a
/// recorded death year never match.
pub fn women_died_before(people: &[Person], year: i32) -> Vec<Person> {
    people
        .iter()
        .filter(|p| p.sex == Sex::Female && p.died.is_some_and(|died| died < year))
        .cloned()
        .collect()
}

/// People who lived at least `min_age` years. People with an unknown age
/// never match.
pub fn lived_at_least(people: &[Person], min_age: i32) -> Vec<Person> {
    people
        .iter()
        .filter(|p| p.age().is_some_and(|age| age >= min_age))
        .cloned()
        .collect()
}

/// Build a reusable predicate equivalent to [`lived_at_least`].
///
/// ```
/// use kinship::analytics::make_lived_at_least_filter;
/// # use kinship::model::Person;
/// # let people: Vec<Person> = Vec::new();
/// let old = make_lived_at_least_filter(65);
/// let elders: Vec<&Person> = people.iter().filter(|&p| old(p)).collect();
/// ```
pub fn make_lived_at_least_filter(min_age: i32) -> impl Fn(&Person) -> bool + Copy {
    move |p: &Person| p.age().is_some_and(|age| age >= min_age)
}

/// Copy every person and attach their life duration.
pub fn with_life_duration(people: &[Person]) -> Vec<PersonWithLifeDuration> {
    people
        .iter()
        .map(|p| PersonWithLifeDuration {
            person: p.clone(),
            live_duration: p.age(),
        })
        .collect()
}

/// Copy every person and attach the century they died in.
pub fn with_century(people: &[Person]) -> Vec<PersonWithCentury> {
    people
        .iter()
        .map(|p| PersonWithCentury {
            person: p.clone(),
            century: p.century(),
        })
        .collect()
}

/// Children of `person`, found by scanning the whole collection.
///
/// A woman's children are those whose `mother` is her name, a man's those
/// whose `father` is his name. This is O(n) per call; use
/// [`crate::family::with_children`] for bulk enrichment.
pub fn find_children<'a>(people: &'a [Person], person: &Person) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|child| child.parent_name(person.sex) == Some(person.name.as_str()))
        .collect()
}

/// The first person whose name matches `person.father`, if any.
pub fn find_father<'a>(people: &'a [Person], person: &Person) -> Option<&'a Person> {
    let father = person.father.as_deref()?;
    people.iter().find(|p| p.name == father)
}

/// Enrich every person with their children using [`find_children`].
///
/// Quadratic in the collection size. Kept as the reference the indexed
/// grouping is checked against.
pub fn with_children_naive(people: &[Person]) -> Vec<PersonWithChildren> {
    people
        .iter()
        .map(|p| PersonWithChildren {
            person: p.clone(),
            children: find_children(people, p).into_iter().cloned().collect(),
        })
        .collect()
}
