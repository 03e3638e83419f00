mod dataset;
mod film;
mod general_info;
mod load;

pub use dataset::{BuildResult, FilmDataset, Problem as LoadDatasetProblem};
pub use film::{Film, TOP_RATED_THRESHOLD};
pub use general_info::GeneralInfo;
pub use load::load_dataset;
