//! Viewport tracking: which heading is currently being read.
//!
//! A fixed read-line offset below the viewport top stands in for the sticky
//! chrome above the content. On every evaluation the tracker scans the
//! heading sequence in document order and picks the first heading whose box
//! top has reached the read line while its bottom is still meaningfully
//! below the viewport top. Scanning stops at the first match, so the
//! earlier heading wins when boxes overlap the band; only one heading may
//! be active at a time.
//!
//! The tracker owns its active state and reports transitions explicitly, so
//! it is constructible and testable with synthetic viewport geometry. The
//! thresholds are named configuration values with documented defaults; the
//! selection semantics themselves are fixed.

use crate::heading::Heading;

/// Default read-line offset, in viewport rows.
///
/// At this scale the slack bound divides down to zero, so a one-row heading
/// counts as read while any part of it is still below the viewport top.
pub const DEFAULT_READ_OFFSET: i64 = 2;

/// Default divisor applied to the read offset to form the lower bound a
/// heading's box bottom must clear. The generous bound keeps very short
/// boxes from flickering in and out of the selection.
pub const DEFAULT_SLACK_DIVISOR: i64 = 3;

/// Named thresholds for the selection heuristic.
#[derive(Clone, Copy, Debug)]
pub struct SpyConfig {
    /// Rows between the viewport top and the read line.
    pub read_offset: i64,
    /// Divisor forming the lower bound `read_offset / slack_divisor`.
    pub slack_divisor: i64,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            read_offset: DEFAULT_READ_OFFSET,
            slack_divisor: DEFAULT_SLACK_DIVISOR,
        }
    }
}

/// A heading's bounding box in viewport-relative rows.
///
/// `top` is negative once the heading has scrolled above the viewport;
/// `bottom` is exclusive, so a one-row heading at the viewport top has
/// `top == 0, bottom == 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadingBox {
    /// First row of the box, relative to the viewport top.
    pub top: i64,
    /// Row just past the box, relative to the viewport top.
    pub bottom: i64,
}

/// Live scroll state handed to one evaluation: the absolute scroll offset
/// plus one box per heading, in sequence order.
#[derive(Clone, Debug, Default)]
pub struct ViewportSample {
    /// Absolute scroll offset; zero means the document top is visible.
    pub scroll_top: i64,
    /// Heading boxes, parallel to the tracked heading sequence.
    pub boxes: Vec<HeadingBox>,
}

/// What one evaluation did to the highlight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpyOutcome {
    /// No highlight change; repeated evaluations at the same position land
    /// here.
    Unchanged,
    /// The highlight moved: clear `previous` (if any) and mark `current`.
    Moved {
        /// Heading id losing the highlight.
        previous: Option<String>,
        /// Heading id gaining the highlight.
        current: String,
    },
}

/// Tracks the currently read heading across scroll events.
pub struct ScrollSpy {
    config: SpyConfig,
    ids: Vec<String>,
    active: Option<String>,
}

impl ScrollSpy {
    /// Build a tracker over the collected heading sequence.
    #[must_use]
    pub fn new(headings: &[Heading], config: SpyConfig) -> Self {
        Self {
            config,
            ids: headings.iter().map(|h| h.id.clone()).collect(),
            active: None,
        }
    }

    /// The id currently holding the highlight, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute the active heading for `sample` and commit the transition.
    ///
    /// `resolve` reports whether the sidebar has a row for a candidate id; a
    /// candidate it cannot map is a no-op that leaves prior state and
    /// highlight untouched, as is a candidate equal to the current id.
    pub fn evaluate<F>(&mut self, sample: &ViewportSample, resolve: F) -> SpyOutcome
    where
        F: Fn(&str) -> bool,
    {
        debug_assert_eq!(sample.boxes.len(), self.ids.len());

        let Some(candidate) = self.select(sample).map(ToString::to_string) else {
            return SpyOutcome::Unchanged;
        };
        if self.active.as_deref() == Some(candidate.as_str()) {
            return SpyOutcome::Unchanged;
        }
        if !resolve(&candidate) {
            log::debug!("no sidebar row for {candidate:?}, keeping previous highlight");
            return SpyOutcome::Unchanged;
        }
        let previous = self.active.replace(candidate.clone());
        log::debug!("active heading {previous:?} -> {candidate:?}");
        SpyOutcome::Moved {
            previous,
            current: candidate,
        }
    }

    /// First heading in the read band, else the boundary rules.
    fn select(&self, sample: &ViewportSample) -> Option<&str> {
        let offset = self.config.read_offset;
        let slack = offset / self.config.slack_divisor.max(1);

        for (id, heading_box) in self.ids.iter().zip(&sample.boxes) {
            if heading_box.top <= offset && heading_box.bottom > slack {
                return Some(id.as_str());
            }
        }

        if sample.scroll_top > 0 {
            // Reading the tail: once the last heading has fully passed the
            // read line it stays selected. Anywhere else between headings,
            // the previous selection is retained by not selecting at all.
            if let Some(last_box) = sample.boxes.last() {
                if last_box.bottom < offset {
                    return self.ids.last().map(String::as_str);
                }
            }
            return None;
        }

        // At the very top of the document the first heading is selected so
        // the sidebar shows a highlight immediately on load.
        self.ids.first().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "tests/scrollspy.rs"]
mod tests;
