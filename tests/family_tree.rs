//! Library-level checks over the sample family tree.

use std::path::Path;

use kinship::Sex;
use kinship::analytics::{
    find_children, lived_at_least, make_lived_at_least_filter, with_children_naive,
};
use kinship::family::{ChildIndex, with_children};
use kinship::loader::load_file;
use kinship::model::Person;
use kinship::sorting::sort_by_born;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/people.json");

fn load() -> Vec<Person> {
    load_file(Path::new(FIXTURE)).unwrap()
}

#[test]
fn test_indexed_grouping_matches_naive() {
    let people = load();

    assert_eq!(with_children(&people), with_children_naive(&people));
}

#[test]
fn test_index_lookup_per_person() {
    let people = load();
    let index = ChildIndex::build(&people);

    for person in &people {
        assert_eq!(
            index.children_of(person),
            find_children(&people, person).as_slice(),
            "children of {}",
            person.name
        );
    }

    let lieven: Vec<&str> = index
        .children(Sex::Male, "Lieven Haverbeke")
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(lieven, vec!["Willem Haverbeke", "Daniel Haverbeke", "Jan Haverbeke"]);
}

#[test]
fn test_unresolved_mothers_are_kept_apart() {
    let people = load();
    let index = ChildIndex::build(&people);

    let without_mother = people.iter().filter(|p| p.mother.is_none()).count();
    assert_eq!(index.unresolved(Sex::Female).len(), without_mother);
    assert_eq!(index.unresolved(Sex::Male).len(), 1);
}

#[test]
fn test_filter_factory_pipeline() {
    let people = load();
    let old = make_lived_at_least_filter(65);

    let via_filter: Vec<Person> = people.iter().filter(|&p| old(p)).cloned().collect();

    assert_eq!(via_filter, lived_at_least(&people, 65));
    assert_eq!(via_filter.len(), 17);
}

#[test]
fn test_sort_by_born_idempotent() {
    let people = load();
    let sorted = sort_by_born(&people);

    assert!(sorted.windows(2).all(|w| w[0].born <= w[1].born));
    assert_eq!(sort_by_born(&sorted), sorted);
}
