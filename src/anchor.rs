//! Anchor id assignment for scanned headings.
//!
//! Two passes over the raw heading sequence, in document order. The first
//! records ids declared inline with the `{#custom-id}` suffix convention,
//! stripping the marker from the title. The second derives slugs for the
//! remaining headings when auto-anchoring is enabled, deduplicating against
//! every id already taken. A heading that ends both passes without an id is
//! dropped later by the collector.

use crate::heading::RawHeading;
use std::collections::HashSet;

/// Base for ids of headings whose title yields no usable slug.
const FALLBACK_BASE: &str = "section";

/// Assign unique anchor ids to `headings` in place.
///
/// Explicit `{#id}` declarations always win; the first declaration of an id
/// keeps it and later duplicates are treated as undeclared. With `auto`
/// disabled, undeclared headings keep no id.
pub fn assign_anchors(headings: &mut [RawHeading], auto: bool) {
    let mut used: HashSet<String> = HashSet::new();

    for heading in headings.iter_mut() {
        if let Some((title, id)) = split_explicit_anchor(&heading.title) {
            heading.title = title;
            if id.is_empty() {
                continue;
            }
            if used.contains(&id) {
                log::warn!(
                    "duplicate anchor {id:?} on line {}, treating as undeclared",
                    heading.source_line + 1
                );
                continue;
            }
            used.insert(id.clone());
            heading.id = Some(id);
        }
    }

    if !auto {
        return;
    }

    let mut counter = 1usize;
    for heading in headings.iter_mut() {
        if heading.id.is_some() {
            continue;
        }
        let base = slug::slugify(heading.title.trim());
        let id = if base.is_empty() {
            numbered_fallback(&mut counter, &used)
        } else {
            deduplicate(base, &used)
        };
        used.insert(id.clone());
        heading.id = Some(id);
    }
}

/// Split a trailing `{#id}` declaration off a title.
///
/// Returns the title without the marker and the declared id (possibly
/// empty). `None` when the title carries no declaration.
fn split_explicit_anchor(title: &str) -> Option<(String, String)> {
    let trimmed = title.trim_end();
    if !trimmed.ends_with('}') {
        return None;
    }
    let open = trimmed.rfind("{#")?;
    let id = trimmed[open + 2..trimmed.len() - 1].trim().to_string();
    let rest = trimmed[..open].trim_end().to_string();
    Some((rest, id))
}

fn deduplicate(base: String, used: &HashSet<String>) -> String {
    if !used.contains(&base) {
        return base;
    }
    let mut suffix = 1usize;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !used.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

fn numbered_fallback(counter: &mut usize, used: &HashSet<String>) -> String {
    loop {
        let candidate = format!("{FALLBACK_BASE}-{counter}");
        *counter += 1;
        if !used.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
#[path = "tests/anchor.rs"]
mod tests;
