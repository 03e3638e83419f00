use serde::{Deserialize, Deserializer, Serialize};

/// A viewer average at or above this gets the "top rated" badge.
pub const TOP_RATED_THRESHOLD: f64 = 4.5;

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct Film {
    pub id: u64,

    #[serde(rename = "Film_title", default, deserialize_with = "null_as_empty_string")]
    pub title: String,

    #[serde(rename = "Poster_Movie", default, deserialize_with = "null_as_empty_string")]
    pub poster_url: String,

    #[serde(rename = "Release_year", default)]
    pub release_year: Option<i32>,

    #[serde(rename = "Director", default, deserialize_with = "null_as_empty_string")]
    pub director: String,

    #[serde(rename = "Cast", default, deserialize_with = "null_as_empty")]
    pub cast: Vec<String>,

    #[serde(rename = "Average_rating", default)]
    pub average_rating: Option<f64>,

    #[serde(rename = "Genres", default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,

    #[serde(rename = "Themes", default, deserialize_with = "null_as_empty")]
    pub themes: Vec<String>,

    #[serde(rename = "Nanogenres", default, deserialize_with = "null_as_empty")]
    pub nanogenres: Vec<String>,

    /// Minutes.
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<u32>,

    #[serde(rename = "Countries", default, deserialize_with = "null_as_empty")]
    pub countries: Vec<String>,

    #[serde(rename = "Original_language", default, deserialize_with = "null_as_empty_string")]
    pub original_language: String,

    #[serde(rename = "Spoken_languages", default, deserialize_with = "null_as_empty")]
    pub spoken_languages: Vec<String>,

    #[serde(rename = "Description", default, deserialize_with = "null_as_empty_string")]
    pub description: String,

    #[serde(rename = "Studios", default, deserialize_with = "null_as_empty")]
    pub studios: Vec<String>,

    #[serde(rename = "Film_URL", default, deserialize_with = "null_as_empty_string")]
    pub url: String,

    #[serde(rename = "Rating_Igor", default, deserialize_with = "null_as_zero")]
    pub rating_a: f64,

    #[serde(rename = "Rating_Valeria", default, deserialize_with = "null_as_zero")]
    pub rating_b: f64,
}

impl Film {
    /// Mean of the two viewer ratings.
    pub fn viewer_average(&self) -> f64 {
        (self.rating_a + self.rating_b) / 2.0
    }

    pub fn is_top_rated(&self) -> bool {
        self.viewer_average() >= TOP_RATED_THRESHOLD
    }

    /// The slug is the last path segment of the canonical film url.
    pub fn slug(&self) -> Option<&str> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty() && !s.contains(':'))
    }

    #[cfg(test)]
    pub fn dummy(id: u64, release_year: i32) -> Film {
        Film {
            id,
            title: format!("Film {}", id),
            poster_url: String::new(),
            release_year: Some(release_year),
            director: String::new(),
            cast: vec![],
            average_rating: None,
            genres: vec![],
            themes: vec![],
            nanogenres: vec![],
            runtime: None,
            countries: vec![],
            original_language: String::new(),
            spoken_languages: vec![],
            description: String::new(),
            studios: vec![],
            url: String::new(),
            rating_a: 0.0,
            rating_b: 0.0,
        }
    }
}
