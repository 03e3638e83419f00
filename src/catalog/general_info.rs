use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct GeneralInfo {
    #[serde(rename = "Total_Movies", default)]
    pub total_movies: usize,

    /// Percentage, 0 to 100.
    #[serde(rename = "Compatibility", default)]
    pub compatibility: f64,

    #[serde(rename = "Sum_Rating_Igor", default)]
    pub rating_sum_a: f64,

    #[serde(rename = "Sum_Rating_Valeria", default)]
    pub rating_sum_b: f64,

    #[serde(rename = "Avatar_Igor", default)]
    pub avatar_a: String,

    #[serde(rename = "Avatar_Valeria", default)]
    pub avatar_b: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_general_info() {
        let s = r#"
        {
            "Total_Movies": 312,
            "Compatibility": 87.45,
            "Sum_Rating_Igor": 1120.5,
            "Sum_Rating_Valeria": 1098.0,
            "Avatar_Igor": "https://a.ltrbxd.com/avatar/a.jpg",
            "Avatar_Valeria": "https://a.ltrbxd.com/avatar/b.jpg"
        }
        "#;
        let expected = GeneralInfo {
            total_movies: 312,
            compatibility: 87.45,
            rating_sum_a: 1120.5,
            rating_sum_b: 1098.0,
            avatar_a: "https://a.ltrbxd.com/avatar/a.jpg".to_owned(),
            avatar_b: "https://a.ltrbxd.com/avatar/b.jpg".to_owned(),
        };
        match serde_json::from_str::<GeneralInfo>(s) {
            Ok(x) => assert_eq!(x, expected),
            Err(_) => assert!(false, "Did not parse json string."),
        }
    }
}
