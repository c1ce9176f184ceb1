//! Property-based tests across operations.
//!
//! Note: The resolve module already has property tests for the engine
//! invariants. This module focuses on the buffer contract and the cursor
//! symmetry guarantees that every operation leans on.

use proptest::prelude::*;

use crate::context::PathContext;
use crate::segment::Segment;
use crate::style::PathStyle;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z0-9_-]{1,10}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn unix_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::bool::ANY,
        prop::collection::vec(segment_strategy(), 0..8),
        prop::bool::ANY,
    )
        .prop_map(|(absolute, parts, trailing)| {
            let mut path = String::new();
            if absolute {
                path.push('/');
            }
            path.push_str(&parts.join("/"));
            if trailing && !parts.is_empty() {
                path.push('/');
            }
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Truncation never changes the reported length, and the buffer holds
    // a NUL-terminated prefix of the full result.
    #[test]
    fn truncation_is_a_prefix(path in unix_path_strategy(), capacity in 0usize..64) {
        let ctx = PathContext::new(PathStyle::Unix);

        let mut full = [0u8; 512];
        let full_len = ctx.normalize(&path, &mut full);

        let mut buf = vec![0xffu8; capacity];
        let len = ctx.normalize(&path, &mut buf);

        prop_assert_eq!(len, full_len);
        if capacity > 0 {
            let written = full_len.min(capacity - 1);
            prop_assert_eq!(&buf[..written], &full[..written]);
            prop_assert_eq!(buf[written], 0);
        }
    }

    // The same contract holds for the splicing operations.
    #[test]
    fn truncation_is_a_prefix_for_splices(
        path in unix_path_strategy(),
        value in "[a-z]{1,12}",
        capacity in 0usize..32,
    ) {
        let ctx = PathContext::new(PathStyle::Unix);

        let mut full = [0u8; 512];
        let full_len = ctx.change_basename(&path, &value, &mut full);

        let mut buf = vec![0xffu8; capacity];
        let len = ctx.change_basename(&path, &value, &mut buf);

        prop_assert_eq!(len, full_len);
        if capacity > 0 {
            let written = full_len.min(capacity - 1);
            prop_assert_eq!(&buf[..written], &full[..written]);
            prop_assert_eq!(buf[written], 0);
        }
    }

    // Walking forward to the last segment and back recovers the first:
    // the two stepping directions agree on every boundary.
    #[test]
    fn cursor_directions_are_symmetric(path in unix_path_strategy()) {
        let mut forward = Vec::new();
        if let Some(mut seg) = Segment::first(&path, PathStyle::Unix) {
            forward.push(seg.text().to_string());
            while seg.move_next() {
                forward.push(seg.text().to_string());
            }

            let mut backward = vec![seg.text().to_string()];
            while seg.move_prev() {
                backward.push(seg.text().to_string());
            }
            backward.reverse();

            prop_assert_eq!(forward, backward);
        }
    }

    // last() is first() advanced to exhaustion.
    #[test]
    fn last_agrees_with_forward_walk(path in unix_path_strategy()) {
        let last = Segment::last(&path, PathStyle::Unix);
        let mut walked = Segment::first(&path, PathStyle::Unix);
        if let Some(seg) = walked.as_mut() {
            while seg.move_next() {}
        }
        match (last, walked) {
            (Some(a), Some(b)) => {
                prop_assert_eq!(a.begin(), b.begin());
                prop_assert_eq!(a.end(), b.end());
            }
            (None, None) => {}
            (a, b) => prop_assert!(false, "last {:?} != walked {:?}", a, b),
        }
    }

    // Normalizing is stable under a second pass even through a truncated
    // buffer large enough to hold the result.
    #[test]
    fn normalize_exact_capacity_round_trip(path in unix_path_strategy()) {
        let ctx = PathContext::new(PathStyle::Unix);

        let mut probe = [0u8; 512];
        let needed = ctx.normalize(&path, &mut probe);

        // A buffer of exactly needed + 1 holds the result and terminator.
        let mut exact = vec![0u8; needed + 1];
        let len = ctx.normalize(&path, &mut exact);
        prop_assert_eq!(len, needed);
        prop_assert_eq!(exact[needed], 0);
        prop_assert_eq!(&exact[..needed], &probe[..needed]);
    }

    // The dirname and basename partition the path around the last
    // segment.
    #[test]
    fn dirname_basename_partition(path in unix_path_strategy()) {
        let ctx = PathContext::new(PathStyle::Unix);
        if let Some(basename) = ctx.basename(&path) {
            let dirname = ctx.dirname(&path);
            prop_assert!(path.starts_with(dirname));
            prop_assert_eq!(&path[dirname.len()..dirname.len() + basename.len()], basename);
        } else {
            prop_assert_eq!(ctx.dirname(&path), "");
        }
    }
}
