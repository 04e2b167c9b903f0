pub mod loader;
pub mod movie;
pub mod title;

pub use loader::{load_movies, DatasetError};
pub use movie::Movie;
