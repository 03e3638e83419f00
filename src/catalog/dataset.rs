use super::{Film, GeneralInfo};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const MAX_VIEWER_RATING: f64 = 5.0;

#[derive(Debug, PartialEq)]
pub enum Problem {
    InvalidFile(String),
    DuplicateId(u64),
    RatingOutOfRange { id: u64, value: f64 },
    MissingReleaseYear { id: u64 },
    MissingGeneralInfo,
    TotalMoviesMismatch { declared: usize, actual: usize },
}

pub struct BuildResult {
    pub dataset: Option<FilmDataset>,
    pub problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct DatasetFile {
    #[serde(rename = "General_Info", default)]
    general_info: Vec<GeneralInfo>,
    #[serde(rename = "Movies_Info", default)]
    movies: Vec<Film>,
}

/// The loaded film collection. Never mutated after construction.
#[derive(Debug, Default)]
pub struct FilmDataset {
    general_info: Option<GeneralInfo>,
    films: Vec<Film>,
}

fn check_films(films: &[Film]) -> Vec<Problem> {
    let mut problems = vec![];
    let mut seen_ids = HashSet::new();
    for film in films {
        if !seen_ids.insert(film.id) {
            problems.push(Problem::DuplicateId(film.id));
        }
        for value in [film.rating_a, film.rating_b] {
            if !(0.0..=MAX_VIEWER_RATING).contains(&value) {
                problems.push(Problem::RatingOutOfRange { id: film.id, value });
            }
        }
        if film.release_year.is_none() {
            problems.push(Problem::MissingReleaseYear { id: film.id });
        }
    }
    problems
}

impl FilmDataset {
    pub fn new(general_info: Option<GeneralInfo>, films: Vec<Film>) -> FilmDataset {
        FilmDataset {
            general_info,
            films,
        }
    }

    pub fn from_json_str(text: &str) -> BuildResult {
        let file: DatasetFile = match serde_json::from_str(text) {
            Ok(file) => file,
            Err(err) => {
                return BuildResult {
                    dataset: None,
                    problems: vec![Problem::InvalidFile(format!("{}", err))],
                }
            }
        };

        let mut problems = check_films(&file.movies);
        let general_info = file.general_info.into_iter().next();
        match &general_info {
            None => problems.push(Problem::MissingGeneralInfo),
            Some(info) if info.total_movies != file.movies.len() => {
                problems.push(Problem::TotalMoviesMismatch {
                    declared: info.total_movies,
                    actual: file.movies.len(),
                })
            }
            Some(_) => {}
        }

        BuildResult {
            dataset: Some(FilmDataset::new(general_info, file.movies)),
            problems,
        }
    }

    pub fn build(path: &Path) -> BuildResult {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(err) => BuildResult {
                dataset: None,
                problems: vec![Problem::InvalidFile(format!(
                    "{}: {}",
                    path.display(),
                    err
                ))],
            },
        }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn films_count(&self) -> usize {
        self.films.len()
    }

    pub fn get_film(&self, id: u64) -> Option<&Film> {
        self.films.iter().find(|f| f.id == id)
    }

    pub fn general_info(&self) -> Option<&GeneralInfo> {
        self.general_info.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"
    {
        "General_Info": [{
            "Total_Movies": 2,
            "Compatibility": 90.0,
            "Sum_Rating_Igor": 8.0,
            "Sum_Rating_Valeria": 7.5,
            "Avatar_Igor": "a.jpg",
            "Avatar_Valeria": "b.jpg"
        }],
        "Movies_Info": [
            {"id": 1, "Film_title": "One", "Release_year": 2019, "Director": "D1",
             "Rating_Igor": 4.0, "Rating_Valeria": 3.5},
            {"id": 2, "Film_title": "Two", "Release_year": 2022, "Director": "D2",
             "Rating_Igor": 4.0, "Rating_Valeria": 4.0}
        ]
    }
    "#;

    #[test]
    fn builds_clean_dataset() {
        let result = FilmDataset::from_json_str(DATASET);
        assert!(result.problems.is_empty(), "{:?}", result.problems);
        let dataset = result.dataset.unwrap();
        assert_eq!(dataset.films_count(), 2);
        assert_eq!(dataset.get_film(2).map(|f| f.title.as_str()), Some("Two"));
        assert!(dataset.get_film(3).is_none());
        assert_eq!(dataset.general_info().unwrap().avatar_b, "b.jpg");
    }

    #[test]
    fn reports_non_fatal_problems() {
        let text = r#"
        {
            "General_Info": [],
            "Movies_Info": [
                {"id": 1, "Release_year": 2000, "Rating_Igor": 6.0, "Rating_Valeria": 1.0},
                {"id": 1, "Release_year": 2001}
            ]
        }
        "#;
        let result = FilmDataset::from_json_str(text);
        assert!(result.dataset.is_some());
        assert_eq!(
            result.problems,
            vec![
                Problem::RatingOutOfRange { id: 1, value: 6.0 },
                Problem::DuplicateId(1),
                Problem::MissingGeneralInfo,
            ]
        );
    }

    #[test]
    fn null_release_year_keeps_the_dataset() {
        let text = DATASET.replace(
            "\"Release_year\": 2022",
            "\"Release_year\": null, \"Runtime\": null",
        );
        let result = FilmDataset::from_json_str(&text);
        assert_eq!(result.problems, vec![Problem::MissingReleaseYear { id: 2 }]);
        let dataset = result.dataset.unwrap();
        assert_eq!(dataset.films_count(), 2);
        let film = dataset.get_film(2).unwrap();
        assert_eq!(film.release_year, None);
        assert_eq!(film.runtime, None);
    }

    #[test]
    fn reports_total_movies_mismatch() {
        let text = DATASET.replace("\"Total_Movies\": 2", "\"Total_Movies\": 5");
        let result = FilmDataset::from_json_str(&text);
        assert_eq!(
            result.problems,
            vec![Problem::TotalMoviesMismatch {
                declared: 5,
                actual: 2
            }]
        );
    }

    #[test]
    fn invalid_json_is_fatal() {
        let result = FilmDataset::from_json_str("{ not json");
        assert!(result.dataset.is_none());
        assert!(matches!(result.problems[0], Problem::InvalidFile(_)));
    }

    #[test]
    fn builds_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();
        let result = FilmDataset::build(file.path());
        assert_eq!(result.dataset.unwrap().films_count(), 2);

        let missing = FilmDataset::build(Path::new("/nonexistent/films_stats.json"));
        assert!(missing.dataset.is_none());
    }
}
