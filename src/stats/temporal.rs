use super::tally::Tally;
use crate::catalog::Film;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecadeBucket {
    pub decade: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: i32,
    pub count: usize,
    pub avg_rating: f64,
}

pub fn decade_label(year: i32) -> String {
    format!("{}s", year.div_euclid(10) * 10)
}

/// Films per decade, ordered by the decade label as text. Undated films are
/// left out.
pub fn decade_distribution(films: &[Film]) -> Vec<DecadeBucket> {
    let mut tally = Tally::<usize>::new();
    for year in films.iter().filter_map(|f| f.release_year) {
        *tally.entry(&decade_label(year)) += 1;
    }
    let mut buckets: Vec<DecadeBucket> = tally
        .into_entries()
        .into_iter()
        .map(|(decade, count)| DecadeBucket { decade, count })
        .collect();
    buckets.sort_by(|a, b| a.decade.cmp(&b.decade));
    buckets
}

/// One point per year between the earliest and latest release year, with the
/// years nobody watched filled in as zeros.
pub fn year_series(films: &[Film]) -> Vec<YearPoint> {
    let mut by_year: BTreeMap<i32, (usize, f64)> = BTreeMap::new();
    for film in films {
        let Some(year) = film.release_year else {
            continue;
        };
        let entry = by_year.entry(year).or_default();
        entry.0 += 1;
        entry.1 += film.viewer_average();
    }

    let (first, last) = match (by_year.keys().next(), by_year.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return vec![],
    };

    (first..=last)
        .map(|year| {
            let (count, rating_sum) = by_year.get(&year).copied().unwrap_or((0, 0.0));
            YearPoint {
                year,
                count,
                avg_rating: if count == 0 {
                    0.0
                } else {
                    rating_sum / count as f64
                },
            }
        })
        .collect()
}
