// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page-range expression resolver.
//
// Turns a human expression like "1-3, 5" into a concrete set of zero-based
// page indices bounded by the document length. Pure function of its inputs.

use std::collections::BTreeSet;

use presslauf_core::error::{PresslaufError, Result};
use presslauf_core::types::PageSelection;
use tracing::debug;

/// Resolve a page-range expression against a document of `total_pages`
/// pages.
///
/// The expression is a comma-separated list of tokens, each a 1-based page
/// number or an inclusive `start-end` range. Tokens are trimmed before
/// parsing. A token that is not a valid number or range, or whose pages all
/// fall outside `[1, total_pages]`, is dropped without error; partially
/// out-of-range ranges contribute their in-bounds pages.
///
/// An empty or whitespace-only expression means "no constraint" — the full
/// document. A non-empty expression that resolves to zero pages is an
/// error: silently printing nothing would be worse than reporting the
/// mistake.
pub fn resolve(expr: &str, total_pages: usize) -> Result<PageSelection> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Ok(PageSelection::NoConstraint);
    }

    let mut indices = BTreeSet::new();
    for token in trimmed.split(',') {
        let token = token.trim();
        match parse_token(token) {
            Some((start, end)) => {
                // Clamp before iterating so an absurd upper bound cannot
                // turn into an absurd loop.
                for page in start.max(1)..=end.min(total_pages) {
                    indices.insert(page - 1);
                }
            }
            None => debug!(token, "dropping unparseable range token"),
        }
    }

    if indices.is_empty() {
        return Err(PresslaufError::MalformedRangeExpression {
            expr: trimmed.to_string(),
            total_pages,
        });
    }

    Ok(PageSelection::Pages(indices.into_iter().collect()))
}

/// Parse one token into an inclusive 1-based `(start, end)` pair.
///
/// A plain number is the degenerate range `(n, n)`. A reversed range like
/// `"5-3"` denotes no pages and falls out naturally as an empty loop.
fn parse_token(token: &str) -> Option<(usize, usize)> {
    match token.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse().ok()?;
            let end = end.trim().parse().ok()?;
            Some((start, end))
        }
        None => {
            let page: usize = token.parse().ok()?;
            Some((page, page))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(selection: PageSelection) -> Vec<usize> {
        match selection {
            PageSelection::Pages(indices) => indices,
            PageSelection::NoConstraint => panic!("expected a constrained selection"),
        }
    }

    #[test]
    fn ranges_and_singles_combine() {
        assert_eq!(pages(resolve("1-3, 5", 10).unwrap()), vec![0, 1, 2, 4]);
    }

    #[test]
    fn out_of_range_single_is_dropped() {
        // "5" falls outside a 3-page document; the rest survives.
        assert_eq!(pages(resolve("1-3, 5", 3).unwrap()), vec![0, 1, 2]);
    }

    #[test]
    fn partially_out_of_range_range_is_clamped() {
        assert_eq!(pages(resolve("2-99", 4).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn duplicates_and_order_are_normalised() {
        assert_eq!(pages(resolve("5, 1, 3-5, 1", 10).unwrap()), vec![0, 2, 3, 4]);
    }

    #[test]
    fn garbage_tokens_are_dropped_silently() {
        assert_eq!(pages(resolve("x, 2, 1-y, --", 10).unwrap()), vec![1]);
    }

    #[test]
    fn reversed_range_denotes_no_pages() {
        assert_eq!(pages(resolve("5-3, 1", 10).unwrap()), vec![0]);
    }

    #[test]
    fn empty_expression_means_no_constraint() {
        assert_eq!(resolve("", 10).unwrap(), PageSelection::NoConstraint);
        assert_eq!(resolve("   ", 10).unwrap(), PageSelection::NoConstraint);
    }

    #[test]
    fn fully_out_of_range_expression_is_an_error() {
        let err = resolve("999", 10).unwrap_err();
        assert!(matches!(
            err,
            PresslaufError::MalformedRangeExpression { total_pages: 10, .. }
        ));
    }

    #[test]
    fn all_garbage_expression_is_an_error() {
        assert!(resolve("a, b, c", 10).is_err());
        assert!(resolve(",,,", 10).is_err());
    }

    #[test]
    fn zero_page_number_is_out_of_bounds() {
        // Pages are 1-based; "0" alone selects nothing.
        assert!(resolve("0", 10).is_err());
        assert_eq!(pages(resolve("0-2", 10).unwrap()), vec![0, 1]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = resolve("2-4, 7", 8).unwrap();
        let second = resolve("2-4, 7", 8).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn indices_are_strictly_ascending_and_in_bounds() {
        let indices = pages(resolve("8, 3-5, 1, 5-9", 9).unwrap());
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(indices.iter().all(|&idx| idx < 9));
    }
}
