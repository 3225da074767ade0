//! Bounded-size chunking of input sequences.
//!
//! The service limits each batch request to a fixed number of names, so the
//! client partitions its input into ordered groups of at most that size.
//! Concatenating the groups in order reconstructs the input exactly.

use crate::{Error, Result};

/// Partition `items` into ordered groups of at most `limit` elements.
///
/// Groups are produced lazily, one at a time; the source is consumed in a
/// single pass and never buffered beyond the current group. Every group has
/// exactly `limit` elements except possibly the last, which holds the
/// remainder. An empty source yields zero groups.
///
/// Returns [`Error::InvalidArgument`] when `limit` is zero.
pub fn chunks<I>(items: I, limit: usize) -> Result<Chunks<I::IntoIter>>
where
    I: IntoIterator,
{
    if limit == 0 {
        return Err(Error::InvalidArgument(
            "chunk limit must be a positive integer".to_string(),
        ));
    }
    Ok(Chunks {
        source: items.into_iter(),
        limit,
    })
}

/// Lazy iterator of bounded-size groups, created by [`chunks`].
pub struct Chunks<I> {
    source: I,
    limit: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // Termination is decided by the source reporting exhaustion.
        let mut group = Vec::with_capacity(self.limit);
        while group.len() < self.limit {
            match self.source.next() {
                Some(item) => group.push(item),
                None => break,
            }
        }
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }
}
