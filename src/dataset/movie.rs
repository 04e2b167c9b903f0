/// A single entry from the movies dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub movie_id: u32,
    pub title: String,
    pub genres: Vec<String>,
}

impl Movie {
    pub fn new(movie_id: u32, title: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genres,
        }
    }

    /// The genre text this movie contributes to the similarity model.
    pub fn genre_text(&self) -> String {
        self.genres.join(" ")
    }
}

/// Split a `|`-separated genres cell into individual genres.
/// An empty cell yields no genres.
pub fn parse_genres(cell: &str) -> Vec<String> {
    cell.split('|')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}
