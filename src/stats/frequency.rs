use super::selector::{FieldSelector, FilmField, PrimaryTags};
use super::tally::Tally;
use crate::catalog::Film;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrequencyItem {
    pub name: String,
    pub count: usize,
    /// Count relative to the largest count in the ranked set, 0 to 100.
    pub percentage: f64,
}

/// Distinct values of `selector` for one film, in their listed order.
pub(super) fn distinct_values<'a, S: FieldSelector + ?Sized>(
    selector: &S,
    film: &'a Film,
) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    selector
        .values(film)
        .into_iter()
        .filter(|value| seen.insert(*value))
        .collect()
}

fn with_percentages(ranked: Vec<(String, usize)>) -> Vec<FrequencyItem> {
    let max = ranked.first().map(|(_, count)| *count).filter(|c| *c > 0).unwrap_or(1);
    ranked
        .into_iter()
        .map(|(name, count)| FrequencyItem {
            name,
            count,
            percentage: count as f64 / max as f64 * 100.0,
        })
        .collect()
}

/// Ranks the values yielded by `selector`, each value counted once per film.
pub fn rank_by_field<S: FieldSelector + ?Sized>(
    films: &[Film],
    selector: &S,
    limit: usize,
) -> Vec<FrequencyItem> {
    let mut tally = Tally::<usize>::new();
    for film in films {
        for value in distinct_values(selector, film) {
            *tally.entry(value) += 1;
        }
    }
    let mut ranked = tally.into_ranked();
    ranked.truncate(limit);
    with_percentages(ranked)
}

/// Like [`rank_by_field`], keeping only tags of at most three words.
pub fn rank_all_genre_like<S: FieldSelector>(
    films: &[Film],
    selector: S,
    limit: usize,
) -> Vec<FrequencyItem> {
    rank_by_field(films, &PrimaryTags(selector), limit)
}

pub fn rank_primary_genres(films: &[Film], limit: usize) -> Vec<FrequencyItem> {
    rank_all_genre_like(films, FilmField::Genres, limit)
}

/// Counts for every country under its world-map name.
pub fn country_map(films: &[Film]) -> Vec<FrequencyItem> {
    rank_by_field(films, &FilmField::MapCountries, usize::MAX)
}

pub fn films_in_map_country<'a>(films: &'a [Film], map_name: &str) -> Vec<&'a Film> {
    films
        .iter()
        .filter(|film| FilmField::MapCountries.values(film).contains(&map_name))
        .collect()
}
