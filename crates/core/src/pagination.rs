//! Fixed-size, 1-indexed pagination.
//!
//! Callers must reset the page number to 1 whenever the page size or the
//! query changes, otherwise they may ask for a page that no longer exists.
//! Such a request is not an error: it yields an empty page.

use serde::Serialize;

use crate::error::ContestError;

/// One page of a sequence plus the metadata needed to navigate it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// Number of pages needed for `total_items`, never less than 1
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

/// Calculate slice bounds for a page, clipped to `total_items`
///
/// Returns (start_index, end_index). A page past the end gives an empty
/// range at `total_items`.
pub fn page_bounds(total_items: usize, page_size: usize, page_number: usize) -> (usize, usize) {
    let start = page_number
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    (start, end)
}

/// Slice `sequence` into the requested page
///
/// `page_size` and `page_number` must both be at least 1.
pub fn page<T: Clone>(
    sequence: &[T],
    page_size: usize,
    page_number: usize,
) -> Result<Page<T>, ContestError> {
    if page_size == 0 {
        return Err(ContestError::InvalidArgument(
            "Page size must be greater than zero".to_string(),
        ));
    }
    if page_number == 0 {
        return Err(ContestError::InvalidArgument(
            "Page number is 1-indexed".to_string(),
        ));
    }

    let total_items = sequence.len();
    let (start, end) = page_bounds(total_items, page_size, page_number);

    Ok(Page {
        items: sequence[start..end].to_vec(),
        page_number,
        page_size,
        total_pages: total_pages(total_items, page_size),
        total_items,
    })
}
