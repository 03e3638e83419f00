use super::frequency::{country_map, rank_by_field, rank_primary_genres, FrequencyItem};
use super::keywords::{extract_keywords, KeywordItem};
use super::rated::{rate_categories, RatedCategory, MIN_RATED_SAMPLE_SIZE};
use super::selector::FilmField;
use super::summary::{highest_rated, most_recent, Summary};
use super::temporal::{decade_distribution, year_series, DecadeBucket, YearPoint};
use crate::catalog::{Film, FilmDataset, GeneralInfo};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date from which the days-per-film figure is computed when none is set.
pub const DEFAULT_WATCHING_SINCE: &str = "2024-03-23";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DashboardLimits {
    pub genres: usize,
    pub rated_genres: usize,
    pub themes: usize,
    pub nanogenres: usize,
    pub countries: usize,
    pub directors: usize,
    pub actors: usize,
    pub languages: usize,
    pub highest_rated: usize,
    pub recent: usize,
    pub keywords: usize,
    pub min_rated_samples: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        DashboardLimits {
            genres: 10,
            rated_genres: 8,
            themes: 10,
            nanogenres: 10,
            countries: 10,
            directors: 8,
            actors: 10,
            languages: 10,
            highest_rated: 12,
            recent: 12,
            keywords: 25,
            min_rated_samples: MIN_RATED_SAMPLE_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSettings {
    pub limits: DashboardLimits,
    pub watching_since: NaiveDate,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings {
            limits: DashboardLimits::default(),
            watching_since: NaiveDate::parse_from_str(DEFAULT_WATCHING_SINCE, "%Y-%m-%d")
                .unwrap_or_default(),
        }
    }
}

/// Every view of the dashboard page in one document.
#[derive(Debug, Serialize)]
pub struct Dashboard<'a> {
    pub general_info: Option<&'a GeneralInfo>,
    pub summary: Summary,
    pub genres: Vec<FrequencyItem>,
    pub rated_genres: Vec<RatedCategory>,
    pub themes: Vec<FrequencyItem>,
    pub nanogenres: Vec<FrequencyItem>,
    pub countries: Vec<FrequencyItem>,
    pub country_map: Vec<FrequencyItem>,
    pub directors: Vec<FrequencyItem>,
    pub actors: Vec<FrequencyItem>,
    pub languages: Vec<FrequencyItem>,
    pub decades: Vec<DecadeBucket>,
    pub years: Vec<YearPoint>,
    pub keywords: Vec<KeywordItem>,
    pub highest_rated: Vec<&'a Film>,
    pub recent: Vec<&'a Film>,
}

impl<'a> Dashboard<'a> {
    pub fn build(
        dataset: &'a FilmDataset,
        settings: &DashboardSettings,
        now: DateTime<Utc>,
    ) -> Dashboard<'a> {
        let films = dataset.films();
        let limits = &settings.limits;
        Dashboard {
            general_info: dataset.general_info(),
            summary: Summary::build(films, settings.watching_since, now),
            genres: rank_primary_genres(films, limits.genres),
            rated_genres: rate_categories(
                films,
                &FilmField::PrimaryGenres,
                limits.min_rated_samples,
                limits.rated_genres,
            ),
            themes: rank_by_field(films, &FilmField::Themes, limits.themes),
            nanogenres: rank_by_field(films, &FilmField::Nanogenres, limits.nanogenres),
            countries: rank_by_field(films, &FilmField::Countries, limits.countries),
            country_map: country_map(films),
            directors: rank_by_field(films, &FilmField::Director, limits.directors),
            actors: rank_by_field(films, &FilmField::Cast, limits.actors),
            languages: rank_by_field(films, &FilmField::SpokenLanguages, limits.languages),
            decades: decade_distribution(films),
            years: year_series(films),
            keywords: extract_keywords(films, limits.keywords),
            highest_rated: highest_rated(films, limits.highest_rated),
            recent: most_recent(films, limits.recent),
        }
    }
}
