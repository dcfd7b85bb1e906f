use std::fmt::{self, Debug, Display};

use log::debug;
use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::math::vector::{dot, norm};

/// Added to the cosine denominator so zero-norm vectors score 0 instead of NaN
pub const COSINE_EPSILON: f64 = 1e-12;

/// Cosine similarity
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b|| + ε)
///
/// # Errors
/// `Error::DimensionMismatch` if the slices differ in length
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> Result<f64>
where
    N: Float,
{
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(dot(a, b) / (norm(a) * norm(b) + COSINE_EPSILON))
}

/// Score every document against `query` and sort descending.
/// Documents with equal scores keep corpus order. Nothing is filtered out;
/// use [`Hits::top_k`] to truncate.
///
/// # Arguments
/// * `query` - query vector
/// * `docs` - document vectors, position is the document id
///
/// # Errors
/// `Error::DimensionMismatch` if any document differs from the query in
/// length; no partial result is returned
pub fn rank<N, V>(query: &[N], docs: &[V]) -> Result<Hits>
where
    N: Float + Send + Sync,
    V: AsRef<[N]> + Sync,
{
    let list = docs
        .par_iter()
        .enumerate()
        .map(|(doc_id, doc)| {
            cosine_similarity(query, doc.as_ref()).map(|score| HitEntry { doc_id, score })
        })
        .collect::<Result<Vec<HitEntry>>>()?;
    let mut hits = Hits::new(list);
    hits.sort_by_score_desc();
    debug!("ranked {} documents", hits.len());
    Ok(hits)
}

/// One ranked document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEntry {
    /// position of the document in its corpus
    pub doc_id: usize,
    /// cosine similarity to the query
    pub score: f64,
}

/// Structure to store search results
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score.
    /// Stable, so equal scores keep their current relative order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep the first `k` entries
    pub fn top_k(mut self, k: usize) -> Self {
        self.list.truncate(k);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry> {
        self.list.iter()
    }

    /// Document ids in ranked order
    pub fn doc_ids(&self) -> Vec<usize> {
        self.list.iter().map(|hit| hit.doc_id).collect()
    }
}

impl IntoIterator for Hits {
    type Item = HitEntry;
    type IntoIter = std::vec::IntoIter<HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hits {
    type Item = &'a HitEntry;
    type IntoIter = std::slice::Iter<'a, HitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {}: {:.6}", hit.doc_id, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.list {
            writeln!(f, "Doc {} -> {:.4}", hit.doc_id, hit.score)?;
        }
        Ok(())
    }
}
