//! Basename, dirname, extension, and root editing.
//!
//! Component accessors borrow from the inspected path; the mutating
//! operations write a whole new path through the buffer contract, using
//! the tail-before-head ordering so a growing replacement never destroys
//! bytes it still has to copy.

use crate::context::PathContext;
use crate::output::Output;
use crate::root::root_length;
use crate::segment::{trim_separators, Segment};

impl PathContext {
    /// The last segment of `path`, or `None` when the path has no
    /// segments. Trailing separators are not part of the basename.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// assert_eq!(ctx.basename("/var/log/app.log"), Some("app.log"));
    /// assert_eq!(ctx.basename("/var/log/"), Some("log"));
    /// assert_eq!(ctx.basename("/"), None);
    /// ```
    #[must_use]
    pub fn basename<'p>(&self, path: &'p str) -> Option<&'p str> {
        Segment::last(path, self.style).map(|seg| seg.text())
    }

    /// The prefix of `path` up to (and including the separator before)
    /// its last segment. Empty when the path has no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// assert_eq!(ctx.dirname("/var/log/app.log"), "/var/log/");
    /// assert_eq!(ctx.dirname("app.log"), "");
    /// ```
    #[must_use]
    pub fn dirname<'p>(&self, path: &'p str) -> &'p str {
        match Segment::last(path, self.style) {
            Some(seg) => &path[..seg.begin()],
            None => "",
        }
    }

    /// The extension of the last segment, dot included, found by scanning
    /// the segment backward for its last dot. `None` when the path has no
    /// segments or the last segment has no dot.
    ///
    /// A leading dot counts: the extension of `.profile` is the whole
    /// name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// assert_eq!(ctx.extension("archive.tar.gz"), Some(".gz"));
    /// assert_eq!(ctx.extension("/a.d/readme"), None);
    /// ```
    #[must_use]
    pub fn extension<'p>(&self, path: &'p str) -> Option<&'p str> {
        let seg = Segment::last(path, self.style)?;
        let bytes = path.as_bytes();
        (seg.begin()..seg.end())
            .rev()
            .find(|&i| bytes[i] == b'.')
            .map(|i| &path[i..seg.end()])
    }

    /// Whether the last segment of `path` carries an extension.
    #[must_use]
    pub fn has_extension(&self, path: &str) -> bool {
        self.extension(path).is_some()
    }

    /// Replaces the basename of `path`, writing the new path into
    /// `buffer`. Separators around `new_basename` are trimmed. A path
    /// without segments gains the basename after its root. Returns the
    /// untruncated length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// let mut buf = [0u8; 32];
    /// let len = ctx.change_basename("/var/log/app.log", "error.log", &mut buf);
    /// assert_eq!(&buf[..len], b"/var/log/error.log");
    /// ```
    pub fn change_basename(&self, path: &str, new_basename: &str, buffer: &mut [u8]) -> usize {
        match Segment::last(path, self.style) {
            Some(seg) => seg.replace(new_basename, buffer),
            None => {
                // Only a root (or nothing): the new basename becomes the
                // first segment.
                let mut out = Output::new(buffer);
                let root_len = root_length(path, self.style);
                let name = trim_separators(new_basename, self.style);
                out.write(&path.as_bytes()[..root_len]);
                out.write(name.as_bytes());
                out.finish()
            }
        }
    }

    /// Replaces the extension of `path`'s last segment, writing the new
    /// path into `buffer`.
    ///
    /// Exactly one dot is emitted before the new extension whether or not
    /// `new_extension` brings its own; a segment without an extension
    /// gains one; a path without segments gets `.ext` as its basename.
    /// Anything after the old extension (such as trailing separators)
    /// survives, and is written tail-first. Returns the untruncated
    /// length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Unix);
    /// let mut buf = [0u8; 32];
    ///
    /// let len = ctx.change_extension("archive.tar.gz", "zip", &mut buf);
    /// assert_eq!(&buf[..len], b"archive.tar.zip");
    ///
    /// let len = ctx.change_extension("noext", "txt", &mut buf);
    /// assert_eq!(&buf[..len], b"noext.txt");
    /// ```
    pub fn change_extension(&self, path: &str, new_extension: &str, buffer: &mut [u8]) -> usize {
        let mut out = Output::new(buffer);
        let bytes = path.as_bytes();

        let Some(seg) = Segment::last(path, self.style) else {
            let root_len = root_length(path, self.style);
            let mut pos = out.write_at(0, &bytes[..root_len]);
            if !new_extension.starts_with('.') {
                pos += out.write_at(pos, b".");
            }
            pos += out.write_at(pos, new_extension.as_bytes());
            out.advance(pos);
            return out.finish();
        };

        // The splice point is the last dot of the segment, or its end
        // when it has none.
        let dot = (seg.begin()..seg.end())
            .rev()
            .find(|&i| bytes[i] == b'.')
            .unwrap_or(seg.end());

        let mut pos = out.write_at(0, &bytes[..dot]);

        let ext = new_extension.strip_prefix('.').unwrap_or(new_extension);
        let ext_len = ext.len() + 1;

        // Tail first; the replacement may be longer than the old
        // extension.
        let trail = out.write_at(pos + ext_len, &bytes[seg.end()..]);
        pos += out.write_at(pos, b".");
        pos += out.write_at(pos, ext.as_bytes());
        pos += trail;

        out.advance(pos);
        out.finish()
    }

    /// Replaces the root of `path` with `new_root`, writing the new path
    /// into `buffer`. The result is not normalized, and `new_root` is not
    /// validated against the style's root grammar. Returns the
    /// untruncated length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwalk::{PathContext, PathStyle};
    ///
    /// let ctx = PathContext::new(PathStyle::Windows);
    /// let mut buf = [0u8; 32];
    /// let len = ctx.change_root("C:\\dir\\file.txt", "D:\\", &mut buf);
    /// assert_eq!(&buf[..len], b"D:\\dir\\file.txt");
    /// ```
    pub fn change_root(&self, path: &str, new_root: &str, buffer: &mut [u8]) -> usize {
        let mut out = Output::new(buffer);
        let root_len = root_length(path, self.style);
        let tail = &path.as_bytes()[root_len..];

        // Tail before root, in case the new root is longer than the old.
        let tail_len = out.write_at(new_root.len(), tail);
        let new_root_len = out.write_at(0, new_root.as_bytes());

        out.advance(new_root_len + tail_len);
        out.finish()
    }
}
