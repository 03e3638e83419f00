use super::format::{round_to, to_fixed};
use super::frequency::distinct_values;
use super::selector::{FieldSelector, FilmField};
use crate::catalog::Film;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Largest possible distance between two viewer ratings.
const RATING_SPAN: f64 = 5.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

fn average_rating_sum(films: &[Film]) -> f64 {
    films
        .iter()
        .map(|f| f.average_rating.unwrap_or_default())
        .sum()
}

/// Mean community rating, one decimal.
pub fn global_average_rating(films: &[Film]) -> String {
    if films.is_empty() {
        return "0.0".to_owned();
    }
    to_fixed(average_rating_sum(films) / films.len() as f64, 1)
}

/// Sum of community ratings, two decimals.
pub fn global_rating_sum(films: &[Film]) -> String {
    to_fixed(average_rating_sum(films), 2)
}

pub fn unique_count<S: FieldSelector + ?Sized>(films: &[Film], selector: &S) -> usize {
    let mut seen = HashSet::new();
    for film in films {
        seen.extend(distinct_values(selector, film));
    }
    seen.len()
}

pub fn total_hours(films: &[Film]) -> f64 {
    let minutes: u64 = films.iter().map(|f| f.runtime.unwrap_or(0) as u64).sum();
    minutes as f64 / 60.0
}

pub fn total_days(films: &[Film]) -> f64 {
    total_hours(films) / 24.0
}

pub fn viewer_rating_sums(films: &[Film]) -> (f64, f64) {
    films
        .iter()
        .fold((0.0, 0.0), |(a, b), f| (a + f.rating_a, b + f.rating_b))
}

/// How closely the two viewers agree, as a percentage with two decimals.
pub fn compatibility(films: &[Film]) -> f64 {
    if films.is_empty() {
        return 0.0;
    }
    let agreement: f64 = films
        .iter()
        .map(|f| 1.0 - (f.rating_a - f.rating_b).abs() / RATING_SPAN)
        .sum();
    round_to(agreement / films.len() as f64 * 100.0, 2)
}

/// Average spacing between films since midnight UTC of `since`, in days, one
/// decimal. A started day counts as a whole one.
pub fn days_per_film(since: NaiveDate, now: DateTime<Utc>, film_count: usize) -> String {
    if film_count == 0 {
        return "0.0".to_owned();
    }
    let start = since.and_time(NaiveTime::MIN).and_utc();
    let elapsed = (now - start).num_milliseconds().max(0) as f64 / MILLIS_PER_DAY;
    to_fixed(elapsed.ceil() / film_count as f64, 1)
}

pub fn highest_rated(films: &[Film], limit: usize) -> Vec<&Film> {
    let mut sorted: Vec<&Film> = films.iter().collect();
    sorted.sort_by(|a, b| b.viewer_average().total_cmp(&a.viewer_average()));
    sorted.truncate(limit);
    sorted
}

/// Newest release first, undated films last.
pub fn most_recent(films: &[Film], limit: usize) -> Vec<&Film> {
    let mut sorted: Vec<&Film> = films.iter().collect();
    sorted.sort_by(|a, b| {
        b.release_year
            .cmp(&a.release_year)
            .then_with(|| b.id.cmp(&a.id))
    });
    sorted.truncate(limit);
    sorted
}

pub fn all_films_newest_first(films: &[Film]) -> Vec<&Film> {
    let mut sorted: Vec<&Film> = films.iter().collect();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub films: usize,
    pub total_hours: f64,
    pub total_days: f64,
    pub unique_directors: usize,
    pub unique_countries: usize,
    pub unique_languages: usize,
    pub global_rating_sum: String,
    pub global_average_rating: String,
    pub rating_sum_a: f64,
    pub rating_sum_b: f64,
    pub compatibility: f64,
    pub days_per_film: String,
}

impl Summary {
    pub fn build(films: &[Film], since: NaiveDate, now: DateTime<Utc>) -> Summary {
        let (rating_sum_a, rating_sum_b) = viewer_rating_sums(films);
        Summary {
            films: films.len(),
            total_hours: total_hours(films),
            total_days: total_days(films),
            unique_directors: unique_count(films, &FilmField::Director),
            unique_countries: unique_count(films, &FilmField::Countries),
            unique_languages: unique_count(films, &FilmField::SpokenLanguages),
            global_rating_sum: global_rating_sum(films),
            global_average_rating: global_average_rating(films),
            rating_sum_a,
            rating_sum_b,
            compatibility: compatibility(films),
            days_per_film: days_per_film(since, now, films.len()),
        }
    }
}
