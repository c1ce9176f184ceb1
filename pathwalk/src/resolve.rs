//! Normalization, joining, and path relations.
//!
//! All operations here drive the same engine: build a virtual path list,
//! stream its visible segments, and write them separated by the style's
//! primary separator. The root of the first path is copied verbatim and
//! decides absoluteness; a relative stream that normalizes to nothing
//! produces `"."`.
//!
//! Every operation follows the buffer contract: the result is truncated
//! to the buffer and NUL-terminated within it (capacity zero leaves the
//! buffer untouched), and the return value is the length the full result
//! would have.

use crate::context::PathContext;
use crate::joined::{skip_until_diverge, JoinedSegments};
use crate::output::Output;
use crate::root::{is_root_absolute, root_length};

impl PathContext {
    /// The engine shared by `normalize`, `join` and `absolute`: streams
    /// the visible segments of a path list into the output.
    fn join_and_normalize(&self, paths: &[&str], buffer: &mut [u8]) -> usize {
        let style = self.style;
        let mut out = Output::new(buffer);

        let first = paths.first().copied().unwrap_or("");
        let root_len = root_length(first, style);
        let absolute = is_root_absolute(first, root_len, style);

        // The root passes through untouched, whichever separators it uses.
        out.write(&first.as_bytes()[..root_len]);

        let mut has_output = false;
        if let Some(mut stream) = JoinedSegments::first(paths, style) {
            loop {
                if !stream.is_eliminated(absolute) {
                    // Separators go between survivors only; the last one
                    // must not carry a trailing separator.
                    if has_output {
                        out.write(&[style.separator()]);
                    }
                    has_output = true;
                    out.write(stream.segment.text().as_bytes());
                }
                if !stream.move_next() {
                    break;
                }
            }
        }

        // A relative path whose segments all vanish still names the
        // current directory. An absolute one keeps its root.
        if !has_output && root_len == 0 {
            out.write(b".");
        }

        out.finish()
    }

    /// Normalizes a path: resolves `..`, drops `.`, collapses repeated
    /// separators, and removes trailing ones.
    ///
    /// Returns the length of the full normalized path; the buffer receives
    /// as much of it as fits, NUL-terminated.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// let mut buf = [0u8; 32];
    ///
    /// let len = ctx.normalize("a/./b/../c", &mut buf);
    /// assert_eq!(&buf[..len], b"a/c");
    ///
    /// // Leading back segments of a relative path have nothing to cancel.
    /// let len = ctx.normalize("../../a", &mut buf);
    /// assert_eq!(&buf[..len], b"../../a");
    /// ```
    pub fn normalize(&self, path: &str, buffer: &mut [u8]) -> usize {
        self.join_and_normalize(&[path], buffer)
    }

    /// Joins two paths and normalizes the result.
    ///
    /// Both inputs may be relative; no root-compatibility check is made,
    /// and the first path's root governs the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// let mut buf = [0u8; 32];
    /// let len = ctx.join("/usr", "local/bin", &mut buf);
    /// assert_eq!(&buf[..len], b"/usr/local/bin");
    /// ```
    pub fn join(&self, path_a: &str, path_b: &str, buffer: &mut [u8]) -> usize {
        self.join_and_normalize(&[path_a, path_b], buffer)
    }

    /// Joins any number of paths and normalizes the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// let mut buf = [0u8; 32];
    /// let len = ctx.join_multiple(&["a", "..", "b", "c"], &mut buf);
    /// assert_eq!(&buf[..len], b"b/c");
    /// ```
    pub fn join_multiple(&self, paths: &[&str], buffer: &mut [u8]) -> usize {
        self.join_and_normalize(paths, buffer)
    }

    /// Resolves `path` against `base` into an absolute, normalized path.
    ///
    /// An absolute `path` overrides `base` entirely. A relative `base` is
    /// anchored with a fabricated single-separator root first, so the
    /// result is absolute in every case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// let mut buf = [0u8; 32];
    ///
    /// let len = ctx.absolute("/usr/local", "../bin", &mut buf);
    /// assert_eq!(&buf[..len], b"/usr/bin");
    ///
    /// let len = ctx.absolute("/usr", "/etc", &mut buf);
    /// assert_eq!(&buf[..len], b"/etc");
    /// ```
    pub fn absolute(&self, base: &str, path: &str, buffer: &mut [u8]) -> usize {
        let fallback = self.style.fallback_root();

        if self.is_absolute(base) {
            if self.is_absolute(path) {
                self.join_and_normalize(&[path], buffer)
            } else {
                self.join_and_normalize(&[base, path], buffer)
            }
        } else if self.is_absolute(path) {
            self.join_and_normalize(&[fallback, path], buffer)
        } else {
            self.join_and_normalize(&[fallback, base, path], buffer)
        }
    }

    /// Produces the relative path that leads from `base` to `path`.
    ///
    /// Fails with an empty result when the two roots differ in length or
    /// content (per the style's case rule): there is no way to travel
    /// between different roots. Equivalent paths produce `"."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// let mut buf = [0u8; 32];
    ///
    /// let len = ctx.relative("/a/b/c", "/a/b/d/e", &mut buf);
    /// assert_eq!(&buf[..len], b"../d/e");
    ///
    /// // Mixed absolute and relative inputs have no common root.
    /// assert_eq!(ctx.relative("/a", "a", &mut buf), 0);
    /// ```
    pub fn relative(&self, base: &str, path: &str, buffer: &mut [u8]) -> usize {
        let style = self.style;
        let mut out = Output::new(buffer);

        let base_root = root_length(base, style);
        let path_root = root_length(path, style);
        if base_root != path_root || !style.prefix_equal(base, path, base_root) {
            return out.finish();
        }

        // Absoluteness lets the visibility scans drop every back segment;
        // checking the base suffices since the roots are equal.
        let absolute = is_root_absolute(base, base_root, style);

        let base_list = [base];
        let other_list = [path];
        let mut base_stream = JoinedSegments::first(&base_list, style);
        let mut other_stream = JoinedSegments::first(&other_list, style);

        // Walk the common prefix; whatever is left on the base side must
        // be climbed out of, whatever is left on the other side must be
        // descended into.
        let (base_left, other_left) = match (base_stream.as_mut(), other_stream.as_mut()) {
            (Some(b), Some(o)) => skip_until_diverge(b, o, style, absolute),
            (Some(b), None) => (b.skip_invisible(absolute), false),
            (None, Some(o)) => (false, o.skip_invisible(absolute)),
            (None, None) => (false, false),
        };

        let mut has_output = false;

        if base_left {
            if let Some(stream) = base_stream.as_mut() {
                loop {
                    if !stream.skip_invisible(absolute) {
                        break;
                    }
                    has_output = true;
                    out.write(b"..");
                    out.write(&[style.separator()]);
                    if !stream.move_next() {
                        break;
                    }
                }
            }
        }

        if other_left {
            if let Some(stream) = other_stream.as_mut() {
                loop {
                    if !stream.skip_invisible(absolute) {
                        break;
                    }
                    has_output = true;
                    out.write(stream.segment.text().as_bytes());
                    out.write(&[style.separator()]);
                    if !stream.move_next() {
                        break;
                    }
                }
            }
        }

        // Every emission above appended a separator; the last one has to
        // go. No output at all means the paths are equivalent.
        if has_output {
            out.retract(1);
        } else {
            out.write(b".");
        }

        out.finish()
    }

    /// Returns the length of the prefix of `base` shared with `other`.
    ///
    /// Both paths are compared by their visible segments, so `/a/./b` and
    /// `/a/c/../b` intersect over all of `/a/./b`. Roots that differ make
    /// the intersection zero; a path without segments intersects over the
    /// root alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// assert_eq!(ctx.intersection("/a/b/c", "/a/b/x"), "/a/b".len());
    /// assert_eq!(ctx.intersection("/a", "b"), 0);
    /// ```
    #[must_use]
    pub fn intersection(&self, base: &str, other: &str) -> usize {
        let style = self.style;

        let base_root = root_length(base, style);
        let other_root = root_length(other, style);
        if base_root != other_root || !style.prefix_equal(base, other, base_root) {
            return 0;
        }

        let base_list = [base];
        let other_list = [other];
        let (Some(mut base_stream), Some(mut other_stream)) = (
            JoinedSegments::first(&base_list, style),
            JoinedSegments::first(&other_list, style),
        ) else {
            return base_root;
        };

        let absolute = is_root_absolute(base, base_root, style);

        // Tracks the end of the last segment that matched on both sides;
        // the root matches by construction.
        let mut end = base_root;
        loop {
            if !base_stream.skip_invisible(absolute) || !other_stream.skip_invisible(absolute) {
                break;
            }
            if !style.bytes_equal(
                base_stream.segment.text().as_bytes(),
                other_stream.segment.text().as_bytes(),
            ) {
                break;
            }
            end = base_stream.segment.end();
            if !(base_stream.move_next() && other_stream.move_next()) {
                break;
            }
        }
        end
    }
}

#[cfg(test)]
mod tests {
    use crate::context::PathContext;
    use crate::style::PathStyle;

    fn run(f: impl Fn(&mut [u8]) -> usize) -> (String, usize) {
        let mut buf = [0u8; 256];
        let len = f(&mut buf);
        let text = std::str::from_utf8(&buf[..len.min(255)]).unwrap().to_string();
        (text, len)
    }

    #[test]
    fn test_normalize_mixed_segments() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, len) = run(|buf| ctx.normalize("a/./b/../c", buf));
        assert_eq!(text, "a/c");
        assert_eq!(len, 3);
    }

    #[test]
    fn test_normalize_preserves_uncancelled_backs() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.normalize("../../a", buf));
        assert_eq!(text, "../../a");
    }

    #[test]
    fn test_normalize_absolute_drops_backs() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.normalize("/../../a", buf));
        assert_eq!(text, "/a");
    }

    #[test]
    fn test_normalize_collapses_separators_and_trailers() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.normalize("/a//b///c//", buf));
        assert_eq!(text, "/a/b/c");
    }

    #[test]
    fn test_normalize_root_only() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.normalize("/", buf));
        assert_eq!(text, "/");
    }

    #[test]
    fn test_normalize_nothing_left_yields_current() {
        let ctx = PathContext::new(PathStyle::Unix);
        assert_eq!(run(|buf| ctx.normalize(".", buf)).0, ".");
        assert_eq!(run(|buf| ctx.normalize("./", buf)).0, ".");
        assert_eq!(run(|buf| ctx.normalize("a/..", buf)).0, ".");
        assert_eq!(run(|buf| ctx.normalize("", buf)).0, ".");
    }

    #[test]
    fn test_normalize_windows_keeps_root_verbatim() {
        let ctx = PathContext::new(PathStyle::Windows);
        // The root passes through untouched, slash included; generated
        // separators use the backslash.
        let (text, _) = run(|buf| ctx.normalize("C:/temp//..\\second\\third", buf));
        assert_eq!(text, "C:/second\\third");
    }

    #[test]
    fn test_normalize_windows_drive_relative() {
        let ctx = PathContext::new(PathStyle::Windows);
        // "C:" is a relative root, so the back segment survives.
        let (text, _) = run(|buf| ctx.normalize("C:..\\file", buf));
        assert_eq!(text, "C:..\\file");
    }

    #[test]
    fn test_join_basic() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.join("/usr", "local/bin", buf));
        assert_eq!(text, "/usr/local/bin");
    }

    #[test]
    fn test_join_back_crosses_inputs() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.join("/usr/lib", "../bin", buf));
        assert_eq!(text, "/usr/bin");
    }

    #[test]
    fn test_join_second_root_is_content() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.join("a", "/b", buf));
        assert_eq!(text, "a/b");
    }

    #[test]
    fn test_join_multiple() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.join_multiple(&["/one", "two", "..", "three"], buf));
        assert_eq!(text, "/one/three");
    }

    #[test]
    fn test_join_multiple_empty_list() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.join_multiple(&[], buf));
        assert_eq!(text, ".");
    }

    #[test]
    fn test_absolute_relative_path_on_base() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.absolute("/hello/there", "../world", buf));
        assert_eq!(text, "/hello/world");
    }

    #[test]
    fn test_absolute_path_overrides_base() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.absolute("/hello/there", "/world", buf));
        assert_eq!(text, "/world");
    }

    #[test]
    fn test_absolute_fabricates_root_for_relative_base() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.absolute("hello", "world", buf));
        assert_eq!(text, "/hello/world");
    }

    #[test]
    fn test_absolute_windows_fallback_root() {
        let ctx = PathContext::new(PathStyle::Windows);
        let (text, _) = run(|buf| ctx.absolute("hello", "world", buf));
        assert_eq!(text, "\\hello\\world");
    }

    #[test]
    fn test_relative_sibling_descent() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.relative("/a/b/c", "/a/b/d/e", buf));
        assert_eq!(text, "../d/e");
    }

    #[test]
    fn test_relative_equivalent_paths() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.relative("/a/b", "/a/b", buf));
        assert_eq!(text, ".");
        let (text, _) = run(|buf| ctx.relative("/a/./b", "/a/x/../b", buf));
        assert_eq!(text, ".");
    }

    #[test]
    fn test_relative_target_above_base() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.relative("/a/b/c", "/a", buf));
        assert_eq!(text, "../..");
    }

    #[test]
    fn test_relative_root_mismatch_is_empty() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, len) = run(|buf| ctx.relative("/a", "a", buf));
        assert_eq!(len, 0);
        assert_eq!(text, "");
    }

    #[test]
    fn test_relative_windows_drive_mismatch() {
        let ctx = PathContext::new(PathStyle::Windows);
        let mut buf = [0u8; 64];
        assert_eq!(ctx.relative("C:\\a", "D:\\b", &mut buf), 0);
        // Case differences alone do not separate Windows drives.
        let len = ctx.relative("C:\\a", "c:\\a\\b", &mut buf);
        assert_eq!(&buf[..len], b"b");
    }

    #[test]
    fn test_relative_from_relative_bases() {
        let ctx = PathContext::new(PathStyle::Unix);
        let (text, _) = run(|buf| ctx.relative("a/b", "a/c", buf));
        assert_eq!(text, "../c");
    }

    #[test]
    fn test_intersection_shared_prefix() {
        let ctx = PathContext::new(PathStyle::Unix);
        assert_eq!(ctx.intersection("/a/b/c", "/a/b/x"), 4);
        assert_eq!(ctx.intersection("/a/b/c", "/a/b/c"), 6);
    }

    #[test]
    fn test_intersection_respects_visibility() {
        let ctx = PathContext::new(PathStyle::Unix);
        // Both reduce to /a/b, and the base's matching content ends at
        // the end of its "b" segment.
        assert_eq!(ctx.intersection("/a/./b", "/a/x/../b"), 6);
    }

    #[test]
    fn test_intersection_root_only() {
        let ctx = PathContext::new(PathStyle::Unix);
        assert_eq!(ctx.intersection("/", "/a"), 1);
        assert_eq!(ctx.intersection("/first", "/second"), 1);
    }

    #[test]
    fn test_intersection_mismatched_roots() {
        let ctx = PathContext::new(PathStyle::Unix);
        assert_eq!(ctx.intersection("/a", "a"), 0);
    }

    #[test]
    fn test_intersection_relative_paths() {
        let ctx = PathContext::new(PathStyle::Unix);
        assert_eq!(ctx.intersection("a/b/c", "a/b"), 3);
    }

    // Property tests for the engine invariants the rest of the crate
    // leans on.
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                3 => "[a-z0-9]{1,8}".prop_map(|s| s),
                1 => Just(".".to_string()),
                1 => Just("..".to_string()),
            ]
        }

        fn path_strategy() -> impl Strategy<Value = String> {
            (
                prop::bool::ANY,
                prop::collection::vec(segment_strategy(), 0..8),
            )
                .prop_map(|(absolute, parts)| {
                    let body = parts.join("/");
                    if absolute {
                        format!("/{body}")
                    } else {
                        body
                    }
                })
        }

        proptest! {
            /// Normalization is idempotent.
            #[test]
            fn normalize_idempotent(path in path_strategy()) {
                let ctx = PathContext::new(PathStyle::Unix);
                let mut buf1 = [0u8; 256];
                let len1 = ctx.normalize(&path, &mut buf1);
                let once = std::str::from_utf8(&buf1[..len1]).unwrap();

                let mut buf2 = [0u8; 256];
                let len2 = ctx.normalize(once, &mut buf2);
                prop_assert_eq!(once.as_bytes(), &buf2[..len2]);
            }

            /// The root of the input survives normalization verbatim.
            #[test]
            fn normalize_preserves_root(path in path_strategy()) {
                let ctx = PathContext::new(PathStyle::Unix);
                let root = ctx.root(&path).to_string();
                let mut buf = [0u8; 256];
                let len = ctx.normalize(&path, &mut buf);
                prop_assert!(len >= root.len());
                prop_assert_eq!(&buf[..root.len()], root.as_bytes());
            }

            /// Normalized output never contains "." segments or doubled
            /// separators.
            #[test]
            fn normalize_output_is_clean(path in path_strategy()) {
                let ctx = PathContext::new(PathStyle::Unix);
                let mut buf = [0u8; 256];
                let len = ctx.normalize(&path, &mut buf);
                let text = std::str::from_utf8(&buf[..len]).unwrap();
                prop_assert!(!text.contains("//"));
                prop_assert!(!text.contains("/./"));
                prop_assert!(!text.ends_with("/.") || text == "/.");
                if text.len() > 1 {
                    prop_assert!(!text.ends_with('/'));
                }
            }

            /// Joining equals normalizing the separator-glued inputs.
            #[test]
            fn join_matches_glued_normalize(a in path_strategy(), b in path_strategy()) {
                prop_assume!(!a.is_empty() && !b.is_empty());
                let ctx = PathContext::new(PathStyle::Unix);

                let mut joined = [0u8; 256];
                let joined_len = ctx.join(&a, &b, &mut joined);

                let glued = format!("{a}/{b}");
                let mut normalized = [0u8; 512];
                let normalized_len = ctx.normalize(&glued, &mut normalized);

                prop_assert_eq!(&joined[..joined_len], &normalized[..normalized_len]);
            }

            /// Resolving a relative result against its base gets back to
            /// the normalized target.
            #[test]
            fn relative_then_absolute_round_trips(
                base in path_strategy(),
                target in path_strategy(),
            ) {
                let ctx = PathContext::new(PathStyle::Unix);
                prop_assume!(ctx.is_absolute(&base) && ctx.is_absolute(&target));

                let mut rel = [0u8; 256];
                let rel_len = ctx.relative(&base, &target, &mut rel);
                let rel = std::str::from_utf8(&rel[..rel_len]).unwrap().to_string();

                let mut abs = [0u8; 512];
                let abs_len = ctx.absolute(&base, &rel, &mut abs);

                let mut expected = [0u8; 256];
                let expected_len = ctx.normalize(&target, &mut expected);

                prop_assert_eq!(&abs[..abs_len], &expected[..expected_len]);
            }

            /// The intersection offset stays inside the base path, and
            /// swapping the arguments names the same place: both prefixes
            /// normalize to the same path.
            #[test]
            fn intersection_is_symmetric_up_to_normalization(
                a in path_strategy(),
                b in path_strategy(),
            ) {
                let ctx = PathContext::new(PathStyle::Unix);
                let n = ctx.intersection(&a, &b);
                let m = ctx.intersection(&b, &a);
                prop_assert!(n <= a.len());
                prop_assert!(m <= b.len());

                let mut from_a = [0u8; 256];
                let a_len = ctx.normalize(&a[..n], &mut from_a);
                let mut from_b = [0u8; 256];
                let b_len = ctx.normalize(&b[..m], &mut from_b);
                prop_assert_eq!(&from_a[..a_len], &from_b[..b_len]);
            }
        }
    }
}
