//! Field selectors: extract one or many strings from a film.

use crate::catalog::Film;
use serde::Serialize;
use std::str::FromStr;

/// Genre tags with more words than this are descriptive, not primary genres.
pub const PRIMARY_TAG_MAX_WORDS: usize = 3;

pub trait FieldSelector {
    fn values<'a>(&self, film: &'a Film) -> Vec<&'a str>;
}

impl<F> FieldSelector for F
where
    F: for<'a> Fn(&'a Film) -> Vec<&'a str>,
{
    fn values<'a>(&self, film: &'a Film) -> Vec<&'a str> {
        self(film)
    }
}

pub fn is_primary_tag(tag: &str) -> bool {
    tag.split(' ').count() <= PRIMARY_TAG_MAX_WORDS
}

/// Name used on the world map for a dataset country.
pub fn map_country_name(country: &str) -> &str {
    match country {
        "USA" => "United States of America",
        "UK" => "United Kingdom",
        other => other,
    }
}

/// Keeps only the short tags yielded by the wrapped selector.
pub struct PrimaryTags<S>(pub S);

impl<S: FieldSelector> FieldSelector for PrimaryTags<S> {
    fn values<'a>(&self, film: &'a Film) -> Vec<&'a str> {
        self.0
            .values(film)
            .into_iter()
            .filter(|tag| is_primary_tag(tag))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilmField {
    Director,
    Cast,
    /// Every genre tag, descriptive ones included.
    Genres,
    PrimaryGenres,
    Themes,
    Nanogenres,
    Countries,
    MapCountries,
    OriginalLanguage,
    SpokenLanguages,
    Studios,
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// A missing single-valued field is stored as "" and yields no value.
fn single(value: &str) -> Vec<&str> {
    if value.is_empty() {
        vec![]
    } else {
        vec![value]
    }
}

impl FieldSelector for FilmField {
    fn values<'a>(&self, film: &'a Film) -> Vec<&'a str> {
        match self {
            FilmField::Director => single(&film.director),
            FilmField::Cast => as_strs(&film.cast),
            FilmField::Genres => as_strs(&film.genres),
            FilmField::PrimaryGenres => PrimaryTags(FilmField::Genres).values(film),
            FilmField::Themes => as_strs(&film.themes),
            FilmField::Nanogenres => as_strs(&film.nanogenres),
            FilmField::Countries => as_strs(&film.countries),
            FilmField::MapCountries => film
                .countries
                .iter()
                .map(|c| map_country_name(c))
                .collect(),
            FilmField::OriginalLanguage => single(&film.original_language),
            FilmField::SpokenLanguages => as_strs(&film.spoken_languages),
            FilmField::Studios => as_strs(&film.studios),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl std::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown film field \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownFieldError {}

impl FromStr for FilmField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directors" => Ok(FilmField::Director),
            "actors" => Ok(FilmField::Cast),
            "genres" => Ok(FilmField::PrimaryGenres),
            "all-genres" => Ok(FilmField::Genres),
            "themes" => Ok(FilmField::Themes),
            "nanogenres" => Ok(FilmField::Nanogenres),
            "countries" => Ok(FilmField::Countries),
            "map-countries" => Ok(FilmField::MapCountries),
            "languages" => Ok(FilmField::SpokenLanguages),
            "original-languages" => Ok(FilmField::OriginalLanguage),
            "studios" => Ok(FilmField::Studios),
            other => Err(UnknownFieldError(other.to_owned())),
        }
    }
}
