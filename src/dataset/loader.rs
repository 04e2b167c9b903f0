use std::path::Path;

use super::movie::{parse_genres, Movie};

const MOVIE_ID_COLUMN: &str = "movieId";
const TITLE_COLUMN: &str = "title";
const GENRES_COLUMN: &str = "genres";

/// Load the movies dataset from a CSV file with a
/// `movieId,title,genres` header. Column order is not assumed.
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<Movie>, DatasetError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DatasetError::Open(path.display().to_string(), e))?;

    let headers = reader.headers()?.clone();
    let movie_id_col = column_index(&headers, MOVIE_ID_COLUMN)?;
    let title_col = column_index(&headers, TITLE_COLUMN)?;
    let genres_col = column_index(&headers, GENRES_COLUMN)?;

    let mut movies = Vec::new();
    for record in reader.records() {
        let record = record?;

        let movie_id = record
            .get(movie_id_col)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let title = record.get(title_col).unwrap_or_default().to_string();
        let genres = parse_genres(record.get(genres_col).unwrap_or_default());

        movies.push(Movie {
            movie_id,
            title,
            genres,
        });
    }

    Ok(movies)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DatasetError::MissingColumn(name))
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {0}: {1}")]
    Open(String, csv::Error),
    #[error("Failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset is missing the '{0}' column")]
    MissingColumn(&'static str),
}
