use super::frequency::distinct_values;
use super::selector::{FieldSelector, FilmField};
use super::tally::Tally;
use crate::catalog::Film;
use serde::Serialize;

/// Categories seen in fewer films than this are left out of rated rankings.
pub const MIN_RATED_SAMPLE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatedCategory {
    pub name: String,
    pub avg_a: f64,
    pub avg_b: f64,
}

impl RatedCategory {
    fn combined(&self) -> f64 {
        (self.avg_a + self.avg_b) / 2.0
    }
}

#[derive(Debug, Default)]
struct RatingSums {
    sum_a: f64,
    sum_b: f64,
    count: usize,
}

/// Ranks categories by the mean of the two viewer averages. Categories below
/// `min_sample_size` films are discarded before truncation.
pub fn rate_categories<S: FieldSelector + ?Sized>(
    films: &[Film],
    selector: &S,
    min_sample_size: usize,
    limit: usize,
) -> Vec<RatedCategory> {
    let mut tally = Tally::<RatingSums>::new();
    for film in films {
        for value in distinct_values(selector, film) {
            let sums = tally.entry(value);
            sums.sum_a += film.rating_a;
            sums.sum_b += film.rating_b;
            sums.count += 1;
        }
    }

    let mut rated: Vec<RatedCategory> = tally
        .into_entries()
        .into_iter()
        .filter(|(_, sums)| sums.count > 0 && sums.count >= min_sample_size)
        .map(|(name, sums)| RatedCategory {
            name,
            avg_a: sums.sum_a / sums.count as f64,
            avg_b: sums.sum_b / sums.count as f64,
        })
        .collect();
    rated.sort_by(|a, b| b.combined().total_cmp(&a.combined()));
    rated.truncate(limit);
    rated
}

pub fn rate_primary_genres(films: &[Film], limit: usize) -> Vec<RatedCategory> {
    rate_categories(
        films,
        &FilmField::PrimaryGenres,
        MIN_RATED_SAMPLE_SIZE,
        limit,
    )
}
