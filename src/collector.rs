//! Validation pass producing the final heading sequence.
//!
//! A heading without an anchor id, or with an empty trimmed title, cannot
//! participate in the table of contents or the scrollspy. Such headings are
//! skipped with a warning and collection continues; nothing here is fatal.

use crate::heading::{Heading, RawHeading};

/// Validate raw headings into the immutable collected sequence.
///
/// Survivors keep document order and are numbered with contiguous `order`
/// values. Returns an empty sequence when no heading is eligible.
#[must_use]
pub fn collect(raw: Vec<RawHeading>) -> Vec<Heading> {
    let mut headings: Vec<Heading> = Vec::new();
    for heading in raw {
        let text = heading.title.trim();
        if text.is_empty() {
            log::warn!(
                "skipping heading with empty title on line {}",
                heading.source_line + 1
            );
            continue;
        }
        let Some(id) = heading.id else {
            log::warn!(
                "skipping heading without an anchor: {text:?} (line {})",
                heading.source_line + 1
            );
            continue;
        };
        headings.push(Heading {
            id,
            text: text.to_string(),
            level: heading.level,
            order: headings.len(),
            source_line: heading.source_line,
        });
    }
    headings
}

#[cfg(test)]
#[path = "tests/collector.rs"]
mod tests;
