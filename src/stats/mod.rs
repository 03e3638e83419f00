//! Aggregations over the film collection. Every function here is pure and
//! total: empty input gives empty or zero output.

mod dashboard;
mod format;
mod frequency;
mod keywords;
mod rated;
mod selector;
mod summary;
mod tally;
mod temporal;

pub use dashboard::{Dashboard, DashboardLimits, DashboardSettings, DEFAULT_WATCHING_SINCE};
pub use format::{round_to, to_fixed};
pub use frequency::{
    country_map, films_in_map_country, rank_all_genre_like, rank_by_field, rank_primary_genres,
    FrequencyItem,
};
pub use keywords::{extract_keywords, is_stop_word, tokenize, KeywordItem};
pub use rated::{rate_categories, rate_primary_genres, RatedCategory, MIN_RATED_SAMPLE_SIZE};
pub use selector::{
    is_primary_tag, map_country_name, FieldSelector, FilmField, PrimaryTags, UnknownFieldError,
    PRIMARY_TAG_MAX_WORDS,
};
pub use summary::{
    all_films_newest_first, compatibility, days_per_film, global_average_rating,
    global_rating_sum, highest_rated, most_recent, total_days, total_hours, unique_count,
    viewer_rating_sums, Summary,
};
pub use temporal::{decade_distribution, decade_label, year_series, DecadeBucket, YearPoint};
