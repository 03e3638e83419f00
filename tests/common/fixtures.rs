//! Test fixture creation for the film dataset

use super::constants::*;
use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(clippy::too_many_arguments)]
fn film(
    id: u64,
    title: &str,
    year: i32,
    director: &str,
    genres: &[&str],
    countries: &[&str],
    average_rating: Option<f64>,
    ratings: (f64, f64),
    description: &str,
) -> Value {
    json!({
        "id": id,
        "Film_title": title,
        "Poster_Movie": format!("https://images.example.com/{}.jpg", id),
        "Release_year": year,
        "Director": director,
        "Cast": ["Tony Leung", format!("Actor {}", id)],
        "Average_rating": average_rating,
        "Genres": genres,
        "Themes": ["Crime, drugs and gangsters"],
        "Nanogenres": [],
        "Runtime": 120,
        "Countries": countries,
        "Original_language": "English",
        "Spoken_languages": ["English"],
        "Description": description,
        "Studios": [],
        "Film_URL": format!("https://letterboxd.com/film/film-{}/", id),
        "Rating_Igor": ratings.0,
        "Rating_Valeria": ratings.1,
    })
}

/// Creates a temporary dataset file with 8 films spread over 1994 to 2022.
/// Returns (temp_dir, dataset_path)
pub fn create_test_dataset() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;

    let films = vec![
        film(1, FILM_1_TITLE, 1994, "Wong Kar-wai", &[RATED_GENRE, UNRATED_GENRE], &["Hong Kong"],
            Some(4.0), (4.0, 3.5), "Two lovesick policemen in the great city"),
        film(2, "2046", 2005, "Wong Kar-wai", &[RATED_GENRE], &["Hong Kong", "France"],
            Some(3.5), (3.5, 4.0), "A writer and the women of his past"),
        film(3, "Parasite", 2019, TOP_DIRECTOR, &[RATED_GENRE, UNRATED_GENRE], &["South Korea"],
            None, (5.0, 5.0), "A poor family plans an escape from poverty"),
        film(4, "Memories of Murder", 2019, TOP_DIRECTOR, &[RATED_GENRE, UNRATED_GENRE],
            &["South Korea"], None, (4.5, 4.0), "Two detectives chase a killer"),
        film(5, "Mickey 17", 2022, TOP_DIRECTOR, &[RATED_GENRE, UNRATED_GENRE], &["USA"],
            None, (3.0, 3.5), "A young hero on a frozen planet"),
        film(6, "Triangle of Sadness", 2022, "Ruben Östlund", &["Comedy"], &["Sweden", "UK"],
            None, (3.5, 3.0), "A cruise for the rich"),
        film(7, "The Banshees of Inisherin", 2022, "Martin McDonagh", &["Comedy"], &["UK"],
            None, (4.0, 4.5), "A great friendship ends"),
        film(8, "Knives Out", 2019, "Rian Johnson", &["Comedy"], &["USA"],
            None, (4.0, 4.0), "The escape plan of a young hero"),
    ];

    let dataset = json!({
        "General_Info": [{
            "Total_Movies": FILM_COUNT,
            "Compatibility": 91.25,
            "Sum_Rating_Igor": 31.5,
            "Sum_Rating_Valeria": 31.5,
            "Avatar_Igor": "",
            "Avatar_Valeria": "",
        }],
        "Movies_Info": films,
    });

    let dataset_path = dir.path().join("films_stats.json");
    fs::write(&dataset_path, serde_json::to_string_pretty(&dataset)?)?;

    Ok((dir, dataset_path))
}
