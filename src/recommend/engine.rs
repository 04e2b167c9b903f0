use std::cmp::Ordering;

use tracing::debug;

use crate::dataset::title;
use crate::dataset::Movie;

use super::tfidf::TfidfModel;

/// Genre-similarity recommender over an in-memory movie set.
///
/// Built once at startup: fits a TF-IDF model over each movie's genre text
/// and answers queries by ranking every other movie against the matched one.
pub struct RecommendEngine {
    movies: Vec<Movie>,
    titles_lower: Vec<String>,
    model: TfidfModel,
}

impl RecommendEngine {
    pub fn new(movies: Vec<Movie>) -> Self {
        let documents: Vec<String> = movies.iter().map(Movie::genre_text).collect();
        let model = TfidfModel::fit(&documents);
        let titles_lower = movies.iter().map(|m| title::normalize(&m.title)).collect();

        debug!(
            movies = movies.len(),
            vocabulary = model.vocabulary_size(),
            "Recommendation engine built"
        );

        Self {
            movies,
            titles_lower,
            model,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Find the first movie, in dataset order, whose title contains the
    /// query (case-insensitive). An empty query matches nothing.
    pub fn find_title(&self, query: &str) -> Option<usize> {
        let query = title::normalize(query);
        if query.is_empty() {
            return None;
        }
        self.titles_lower
            .iter()
            .position(|t| title::title_matches(t, &query))
    }

    /// Titles most similar to the movie matching `query`, best first,
    /// at most `limit` of them and never the matched movie itself.
    /// `None` when no title matches the query.
    pub fn recommend(&self, query: &str, limit: usize) -> Option<Vec<String>> {
        let matched = self.find_title(query)?;

        let mut scored: Vec<(usize, f64)> = (0..self.movies.len())
            .filter(|&i| i != matched)
            .map(|i| (i, self.model.cosine(matched, i)))
            .collect();

        // Descending by similarity, ties broken by dataset order.
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        Some(
            scored
                .into_iter()
                .take(limit)
                .map(|(i, _)| self.movies[i].title.clone())
                .collect(),
        )
    }
}
