use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// English stop words dropped during tokenization. Genre text is short, so
/// only filler words from placeholder cells like "(no genres listed)" matter.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

// Tokens are runs of two or more word characters.
fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").unwrap())
}

/// Lowercase a document and split it into stop-word-filtered tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    token_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

/// A fitted TF-IDF model over a fixed document set.
///
/// Term frequency is the raw in-document count, inverse document frequency
/// is smoothed as ln((1 + n) / (1 + df)) + 1, and every document vector is
/// L2-normalized, so cosine similarity reduces to a sparse dot product.
pub struct TfidfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    // Per document: (term id, weight) pairs sorted by term id.
    vectors: Vec<Vec<(usize, f64)>>,
}

impl TfidfModel {
    pub fn fit(documents: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        let mut vocabulary = BTreeMap::new();
        for doc in &tokenized {
            for token in doc {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.clone(), 0);
                }
            }
        }
        for (next_id, id) in vocabulary.values_mut().enumerate() {
            *id = next_id;
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for doc in &tokenized {
            let mut seen = vec![false; vocabulary.len()];
            for token in doc {
                let id = vocabulary[token];
                if !seen[id] {
                    seen[id] = true;
                    document_frequency[id] += 1;
                }
            }
        }

        let n = documents.len();
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1 + n) as f64 / (1 + df) as f64).ln() + 1.0)
            .collect();

        let vectors = tokenized
            .iter()
            .map(|doc| {
                let mut counts: HashMap<usize, usize> = HashMap::new();
                for token in doc {
                    *counts.entry(vocabulary[token]).or_insert(0) += 1;
                }

                let mut vector: Vec<(usize, f64)> = counts
                    .into_iter()
                    .map(|(id, count)| (id, count as f64 * idf[id]))
                    .collect();
                vector.sort_by_key(|&(id, _)| id);

                let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut vector {
                        *w /= norm;
                    }
                }
                vector
            })
            .collect();

        Self {
            vocabulary,
            idf,
            vectors,
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Cosine similarity between two fitted documents. Vectors are
    /// normalized at fit time, so this is a merge-walk dot product.
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        let (va, vb) = (&self.vectors[a], &self.vectors[b]);

        let mut dot = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < va.len() && j < vb.len() {
            let (ida, wa) = va[i];
            let (idb, wb) = vb[j];
            match ida.cmp(&idb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// The fitted inverse document frequency of a term, if in vocabulary.
    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&id| self.idf[id])
    }
}
