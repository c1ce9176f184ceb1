//! Virtual concatenation of multiple paths.
//!
//! The high-level operations treat an ordered list of path strings as one
//! continuous segment stream: `absolute` walks `[base, path]`, `join`
//! walks all its inputs, `relative` walks two single-path streams in
//! lockstep. [`JoinedSegments`] provides that stream without ever
//! materializing the concatenation.
//!
//! Only the first path in a list is root-aware; every later path is
//! consumed rootless, in both stepping directions. No compatibility check
//! is made between the roots of later paths and the first one: the first
//! path's root governs.
//!
//! This module also decides *visibility*: whether a segment survives
//! normalization. `.` never survives. `..` survives only when the stream
//! is relative and no earlier normal segment cancels it. A normal segment
//! survives unless a later `..` consumes it. The scans run over a copy of
//! the cursor, so a visibility query never disturbs the caller's position.

use crate::segment::{Segment, SegmentKind};
use crate::style::PathStyle;

/// A segment cursor over an ordered list of paths.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JoinedSegments<'p, 'l> {
    paths: &'l [&'p str],
    style: PathStyle,
    index: usize,
    pub(crate) segment: Segment<'p>,
}

impl<'p, 'l> JoinedSegments<'p, 'l> {
    /// Positions a cursor on the first segment contributed by any path in
    /// the list. Returns `None` when no path yields a segment.
    pub(crate) fn first(paths: &'l [&'p str], style: PathStyle) -> Option<Self> {
        for (index, &path) in paths.iter().enumerate() {
            let segment = if index == 0 {
                Segment::first(path, style)
            } else {
                Segment::first_unrooted(path, style)
            };
            if let Some(segment) = segment {
                return Some(Self {
                    paths,
                    style,
                    index,
                    segment,
                });
            }
        }
        None
    }

    /// Advances to the next segment, crossing path boundaries as needed.
    pub(crate) fn move_next(&mut self) -> bool {
        if self.segment.move_next() {
            return true;
        }
        while self.index + 1 < self.paths.len() {
            self.index += 1;
            if let Some(segment) = Segment::first_unrooted(self.paths[self.index], self.style) {
                self.segment = segment;
                return true;
            }
        }
        false
    }

    /// Steps back to the previous segment, crossing path boundaries as
    /// needed.
    pub(crate) fn move_prev(&mut self) -> bool {
        if self.segment.move_prev() {
            return true;
        }
        while self.index > 0 {
            self.index -= 1;
            let path = self.paths[self.index];
            let segment = if self.index == 0 {
                Segment::last(path, self.style)
            } else {
                Segment::last_unrooted(path, self.style)
            };
            if let Some(segment) = segment {
                self.segment = segment;
                return true;
            }
        }
        false
    }

    /// Whether a `..` at the current position is cancelled by an earlier
    /// normal segment.
    ///
    /// The counter rises on prior normal segments and falls on prior back
    /// segments; going positive means some normal segment is still
    /// unconsumed and swallows this one.
    fn back_is_eliminated(&self) -> bool {
        let mut cursor = *self;
        let mut counter: i32 = 0;
        while cursor.move_prev() {
            match cursor.segment.kind() {
                SegmentKind::Normal => {
                    counter += 1;
                    if counter > 0 {
                        return true;
                    }
                }
                SegmentKind::Back => counter -= 1,
                SegmentKind::Current => {}
            }
        }
        false
    }

    /// Whether a normal segment at the current position is consumed by a
    /// later `..`.
    fn normal_is_eliminated(&self) -> bool {
        let mut cursor = *self;
        let mut counter: i32 = 0;
        while cursor.move_next() {
            match cursor.segment.kind() {
                SegmentKind::Normal => counter += 1,
                SegmentKind::Back => {
                    counter -= 1;
                    if counter < 0 {
                        return true;
                    }
                }
                SegmentKind::Current => {}
            }
        }
        false
    }

    /// Whether the current segment is dropped by normalization.
    ///
    /// `absolute` describes the first path's root: above an absolute root
    /// there is nothing to go back to, so every `..` is dropped.
    pub(crate) fn is_eliminated(&self, absolute: bool) -> bool {
        match self.segment.kind() {
            SegmentKind::Current => true,
            SegmentKind::Back => absolute || self.back_is_eliminated(),
            SegmentKind::Normal => self.normal_is_eliminated(),
        }
    }

    /// Advances past eliminated segments. Returns `false` when the stream
    /// ends before a surviving segment is found.
    pub(crate) fn skip_invisible(&mut self, absolute: bool) -> bool {
        while self.is_eliminated(absolute) {
            if !self.move_next() {
                return false;
            }
        }
        true
    }
}

/// Walks two streams in lockstep until their visible segments diverge or
/// one stream ends. Returns whether each side still has a visible segment
/// at the divergence point.
pub(crate) fn skip_until_diverge(
    base: &mut JoinedSegments<'_, '_>,
    other: &mut JoinedSegments<'_, '_>,
    style: PathStyle,
    absolute: bool,
) -> (bool, bool) {
    let mut base_left;
    let mut other_left;

    loop {
        base_left = base.skip_invisible(absolute);
        other_left = other.skip_invisible(absolute);
        if !base_left || !other_left {
            break;
        }

        // Divergence requires full textual equality; a segment never
        // matches a longer segment it happens to prefix.
        if !style.bytes_equal(
            base.segment.text().as_bytes(),
            other.segment.text().as_bytes(),
        ) {
            break;
        }

        base_left = base.move_next();
        other_left = other.move_next();
        if !base_left || !other_left {
            break;
        }
    }

    (base_left, other_left)
}
