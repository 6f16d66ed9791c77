//! Indexed children grouping.
//!
//! Looking up children with [`crate::analytics::find_children`] scans the
//! whole collection for every parent, which is quadratic when done for every
//! person. [`ChildIndex`] instead walks the collection once and files each
//! person under their mother's name and their father's name, so the children
//! of any parent are a single map lookup.
//!
//! # Layout
//!
//! ```text
//! ChildIndex
//!   female: mother name -> [child, child, ...]
//!   male:   father name -> [child, child, ...]
//! ```
//!
//! Every person is filed in both branches regardless of their own sex. A
//! person whose mother (or father) is absent goes to that branch's
//! `unresolved` list instead of being keyed under a placeholder name, so an
//! absent parent can never be mistaken for a real one.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Person, PersonWithChildren, Sex};

/// Children of one parent category, keyed by parent name.
#[derive(Debug, Default)]
struct Branch<'a> {
    by_parent: HashMap<&'a str, Vec<&'a Person>>,
    unresolved: Vec<&'a Person>,
}

impl<'a> Branch<'a> {
    fn insert(&mut self, parent: Option<&'a str>, child: &'a Person) {
        match parent {
            Some(name) => self.by_parent.entry(name).or_default().push(child),
            None => self.unresolved.push(child),
        }
    }
}

/// Mapping from (sex, parent name) to that parent's children, built in one pass.
///
/// Children lists keep the order in which the children appear in the input.
#[derive(Debug, Default)]
pub struct ChildIndex<'a> {
    female: Branch<'a>,
    male: Branch<'a>,
}

impl<'a> ChildIndex<'a> {
    /// Index `people` by mother name and father name.
    pub fn build(people: &'a [Person]) -> Self {
        let mut index = Self::default();

        for person in people {
            index.female.insert(person.mother.as_deref(), person);
            index.male.insert(person.father.as_deref(), person);
        }

        debug!(
            people = people.len(),
            mothers = index.female.by_parent.len(),
            fathers = index.male.by_parent.len(),
            "Child index built"
        );

        index
    }

    fn branch(&self, sex: Sex) -> &Branch<'a> {
        match sex {
            Sex::Female => &self.female,
            Sex::Male => &self.male,
        }
    }

    /// Children whose `mother` (for [`Sex::Female`]) or `father`
    /// (for [`Sex::Male`]) is `name`. Empty if there are none.
    pub fn children(&self, sex: Sex, name: &str) -> &[&'a Person] {
        self.branch(sex)
            .by_parent
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Children of `person`, looked up by their sex and name.
    pub fn children_of(&self, person: &Person) -> &[&'a Person] {
        self.children(person.sex, &person.name)
    }

    /// People whose parent of the given sex is not recorded.
    pub fn unresolved(&self, sex: Sex) -> &[&'a Person] {
        &self.branch(sex).unresolved
    }

    /// Number of distinct parent names recorded for the given sex.
    pub fn parent_count(&self, sex: Sex) -> usize {
        self.branch(sex).by_parent.len()
    }
}

/// Enrich every person with their children, in O(n) total.
///
/// Produces the same children lists as
/// [`crate::analytics::with_children_naive`], in the input's order.
pub fn with_children(people: &[Person]) -> Vec<PersonWithChildren> {
    let index = ChildIndex::build(people);

    people
        .iter()
        .map(|person| PersonWithChildren {
            person: person.clone(),
            children: index
                .children_of(person)
                .iter()
                .map(|&child| child.clone())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{find_children, with_children_naive};

    fn person(name: &str, sex: Sex, mother: Option<&str>, father: Option<&str>) -> Person {
        Person {
            name: name.to_string(),
            sex,
            born: Some(1700),
            died: Some(1780),
            mother: mother.map(str::to_string),
            father: father.map(str::to_string),
        }
    }

    fn names<'p>(people: impl IntoIterator<Item = &'p Person>) -> Vec<&'p str> {
        people.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_two_person_scenario() {
        let people: Vec<Person> = serde_json::from_str(
            r#"[
                {"name":"A","sex":"f","born":1700,"died":1780,"mother":null,"father":null},
                {"name":"B","sex":"m","born":1720,"died":1800,"mother":"A","father":null}
            ]"#,
        )
        .unwrap();

        let enriched = with_children(&people);

        assert_eq!(enriched[0].person.century(), Some(18));
        assert_eq!(enriched[0].children, vec![people[1].clone()]);
        assert!(enriched[1].children.is_empty());
    }

    #[test]
    fn test_children_keep_input_order() {
        let people = vec![
            person("c3", Sex::Male, Some("Mum"), Some("Dad")),
            person("Mum", Sex::Female, None, None),
            person("c1", Sex::Female, Some("Mum"), Some("Dad")),
            person("Dad", Sex::Male, None, None),
            person("c2", Sex::Female, Some("Mum"), Some("Other")),
        ];
        let index = ChildIndex::build(&people);

        assert_eq!(names(index.children(Sex::Female, "Mum").iter().copied()), vec!["c3", "c1", "c2"]);
        assert_eq!(names(index.children(Sex::Male, "Dad").iter().copied()), vec!["c3", "c1"]);
        assert_eq!(index.parent_count(Sex::Male), 2);
    }

    #[test]
    fn test_lookup_is_by_sex() {
        let people = vec![
            person("Sam", Sex::Male, None, None),
            person("Kid", Sex::Female, Some("Sam"), None),
        ];
        let index = ChildIndex::build(&people);

        assert!(index.children_of(&people[0]).is_empty());
        assert_eq!(index.children(Sex::Female, "Sam").len(), 1);
    }

    #[test]
    fn test_absent_parents_do_not_collide() {
        let people = vec![
            person("X", Sex::Female, None, None),
            person("Y", Sex::Male, None, None),
        ];
        let index = ChildIndex::build(&people);

        assert_eq!(index.unresolved(Sex::Female).len(), 2);
        assert_eq!(index.unresolved(Sex::Male).len(), 2);
        assert_eq!(index.parent_count(Sex::Female), 0);
        assert!(with_children(&people).iter().all(|p| p.children.is_empty()));
    }

    #[test]
    fn test_unknown_parent_yields_empty_children() {
        let people = vec![person("Solo", Sex::Female, Some("Ghost"), Some("Ghost"))];
        let enriched = with_children(&people);

        assert!(enriched[0].children.is_empty());
        assert_eq!(ChildIndex::build(&people).children(Sex::Male, "Ghost").len(), 1);
    }

    #[test]
    fn test_matches_naive_lookup() {
        let people = vec![
            person("Emma", Sex::Female, None, None),
            person("Pieter", Sex::Male, None, None),
            person("Anna", Sex::Female, Some("Emma"), Some("Pieter")),
            person("Jan", Sex::Male, Some("Emma"), Some("Pieter")),
            person("Karel", Sex::Male, Some("Anna"), Some("Jan")),
            person("Lotte", Sex::Female, Some("Anna"), Some("Jan")),
            person("Bram", Sex::Male, Some("Lotte"), Some("Karel")),
        ];

        let indexed = with_children(&people);
        let naive = with_children_naive(&people);
        assert_eq!(indexed, naive);

        let index = ChildIndex::build(&people);
        for p in &people {
            assert_eq!(index.children_of(p), find_children(&people, p).as_slice());
        }
    }

    #[test]
    fn test_does_not_mutate_input() {
        let people = vec![
            person("Mum", Sex::Female, None, None),
            person("Kid", Sex::Male, Some("Mum"), None),
        ];
        let snapshot = people.clone();

        let enriched = with_children(&people);

        assert_eq!(people, snapshot);
        assert_eq!(names(enriched.iter().map(|e| &e.person)), vec!["Mum", "Kid"]);
    }

    #[test]
    fn test_empty_collection() {
        let index = ChildIndex::build(&[]);
        assert_eq!(index.parent_count(Sex::Female), 0);
        assert!(with_children(&[]).is_empty());
    }
}
