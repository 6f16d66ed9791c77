//! HTTP API handlers for Kinship.
//!
//! The server holds one immutable collection loaded at startup and exposes
//! every query as a read-only `GET` endpoint. Handlers never modify the
//! collection; each request computes a fresh derived view.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, instrument, warn};

use crate::analytics::{
    find_children, find_father, lifespans, lived_at_least, names, with_century,
    with_life_duration, women_died_before,
};
use crate::family::with_children;
use crate::model::{
    DiedBeforeQuery, LivedAtLeastQuery, Person, PersonWithCentury, PersonWithChildren,
    PersonWithLifeDuration, SortQuery,
};
use crate::sorting::{SortField, sort_by, sort_by_age};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub people: Arc<Vec<Person>>,
}

impl AppState {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: Arc::new(people),
        }
    }
}

/// Build the router with every endpoint mounted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/people", get(get_people))
        .route("/people/names", get(get_names))
        .route("/people/lifespans", get(get_lifespans))
        .route("/people/women-died-before", get(get_women_died_before))
        .route("/people/lived-at-least", get(get_lived_at_least))
        .route("/people/life-durations", get(get_life_durations))
        .route("/people/centuries", get(get_centuries))
        .route("/people/children", get(get_children))
        .route("/people/sorted", get(get_sorted))
        .route("/people/:name/children", get(get_person_children))
        .route("/people/:name/father", get(get_person_father))
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /people - The loaded collection, in input order.
pub async fn get_people(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.people.as_ref().clone())
}

/// GET /people/names - Names of everyone, in input order.
pub async fn get_names(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(names(&state.people))
}

/// GET /people/lifespans - Years lived per person, in input order. `null`
/// where a year is missing.
pub async fn get_lifespans(State(state): State<AppState>) -> Json<Vec<Option<i32>>> {
    Json(lifespans(&state.people))
}

/// GET /people/women-died-before - Women who died before a given year.
///
/// # Query Parameters
///
/// - `year` (optional): Exclusive bound on the year of death (default: 1800)
#[instrument(skip(state))]
pub async fn get_women_died_before(
    State(state): State<AppState>,
    Query(query): Query<DiedBeforeQuery>,
) -> Json<Vec<Person>> {
    let women = women_died_before(&state.people, query.year);
    info!(year = query.year, count = women.len(), "Women died before queried");
    Json(women)
}

/// GET /people/lived-at-least - People who lived at least a given number of years.
///
/// # Query Parameters
///
/// - `age` (optional): Minimum age, inclusive (default: 65)
#[instrument(skip(state))]
pub async fn get_lived_at_least(
    State(state): State<AppState>,
    Query(query): Query<LivedAtLeastQuery>,
) -> Json<Vec<Person>> {
    let people = lived_at_least(&state.people, query.age);
    info!(age = query.age, count = people.len(), "Lived at least queried");
    Json(people)
}

/// GET /people/life-durations - Everyone with a `liveDuration` field.
pub async fn get_life_durations(
    State(state): State<AppState>,
) -> Json<Vec<PersonWithLifeDuration>> {
    Json(with_life_duration(&state.people))
}

/// GET /people/centuries - Everyone with the `century` they died in.
pub async fn get_centuries(State(state): State<AppState>) -> Json<Vec<PersonWithCentury>> {
    Json(with_century(&state.people))
}

/// GET /people/children - Everyone with their `children`.
///
/// Uses the one-pass child index.
#[instrument(skip(state))]
pub async fn get_children(State(state): State<AppState>) -> Json<Vec<PersonWithChildren>> {
    let enriched = with_children(&state.people);
    info!(count = enriched.len(), "Children grouping queried");
    Json(enriched)
}

/// GET /people/sorted - A sorted copy of the collection.
///
/// # Query Parameters
///
/// - `by` (optional): `name`, `born`, `died` or `age` (default: `born`)
///
/// Returns `400 Bad Request` with the error message for any other key.
#[instrument(skip(state))]
pub async fn get_sorted(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<Person>>, (StatusCode, String)> {
    if query.by == "age" {
        info!(field = "age", "Sorted collection queried");
        return Ok(Json(sort_by_age(&state.people)));
    }

    match query.by.parse::<SortField>() {
        Ok(field) => {
            info!(%field, "Sorted collection queried");
            Ok(Json(sort_by(&state.people, field)))
        }
        Err(e) => {
            warn!(by = %query.by, error = %e, "Invalid sort field");
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

/// GET /people/:name/children - Children of one person.
///
/// Returns `404 Not Found` if no one has that name.
#[instrument(skip(state))]
pub async fn get_person_children(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Person>>, StatusCode> {
    let person = lookup(&state.people, &name)?;
    let children = find_children(&state.people, person)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(children))
}

/// GET /people/:name/father - Father of one person.
///
/// Returns `404 Not Found` if the person, or their father, is not in the
/// collection.
#[instrument(skip(state))]
pub async fn get_person_father(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Person>, StatusCode> {
    let person = lookup(&state.people, &name)?;

    find_father(&state.people, person)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

fn lookup<'a>(people: &'a [Person], name: &str) -> Result<&'a Person, StatusCode> {
    people.iter().find(|p| p.name == name).ok_or_else(|| {
        warn!(name = %name, "Person not found");
        StatusCode::NOT_FOUND
    })
}
