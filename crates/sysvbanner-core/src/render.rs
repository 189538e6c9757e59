//! # Banner Renderer
//!
//! Turns a string into [`BANNER_HEIGHT`] lines of block letters and writes
//! them to any [`std::io::Write`] sink.
//!
//! Output is the pixel rows of every glyph laid side by side, followed by
//! the font's trailing blank lines. Lines are separated by `\n` and the
//! last line has no terminator, so splitting the output on `\n` always
//! gives exactly [`BANNER_HEIGHT`] lines.

use crate::error::{BannerError, Result};
use crate::glyph::{self, Glyph, BANNER_HEIGHT, GLYPH_WIDTH};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// What to do with characters the font has no glyph for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Draw an empty cell of the usual width
    #[default]
    Blank,
    /// Fail the whole render before writing anything
    Error,
}

impl UnsupportedPolicy {
    /// Get all policies
    pub fn all() -> &'static [UnsupportedPolicy] {
        &[UnsupportedPolicy::Blank, UnsupportedPolicy::Error]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            UnsupportedPolicy::Blank => "blank",
            UnsupportedPolicy::Error => "error",
        }
    }
}

/// Banner renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Banner {
    policy: UnsupportedPolicy,
}

impl Banner {
    /// Create a renderer that blanks unsupported characters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with an explicit unsupported-character policy
    pub fn with_policy(policy: UnsupportedPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnsupportedPolicy {
        self.policy
    }

    /// Render `text` into `sink`, one `write_all` per line.
    ///
    /// Every character is resolved before the first write, so with
    /// [`UnsupportedPolicy::Error`] a bad character leaves the sink
    /// untouched. A failed write is returned immediately and the remaining
    /// lines are dropped.
    pub fn render<W: Write + ?Sized>(&self, text: &str, sink: &mut W) -> Result<()> {
        let lines = self.lines(text)?;
        let last = lines.len() - 1;

        for (i, mut line) in lines.into_iter().enumerate() {
            if i < last {
                line.push('\n');
            }
            sink.write_all(line.as_bytes())?;
        }

        Ok(())
    }

    /// Render `text` into a `String`
    pub fn render_to_string(&self, text: &str) -> Result<String> {
        Ok(self.lines(text)?.join("\n"))
    }

    /// Build the [`BANNER_HEIGHT`] output lines for `text`, without separators
    pub fn lines(&self, text: &str) -> Result<Vec<String>> {
        let glyphs = self.resolve(text)?;
        tracing::debug!(
            chars = glyphs.len(),
            policy = self.policy.name(),
            "Rendering banner"
        );

        let width = glyphs.len() * GLYPH_WIDTH;
        let lines = (0..BANNER_HEIGHT)
            .map(|row| {
                let mut line = String::with_capacity(width + 1);
                for glyph in &glyphs {
                    line.push_str(glyph.row(row));
                }
                line
            })
            .collect();

        Ok(lines)
    }

    fn resolve(&self, text: &str) -> Result<Vec<Glyph>> {
        text.chars()
            .enumerate()
            .map(|(index, ch)| match glyph::lookup(ch) {
                Some(glyph) => Ok(glyph),
                None => match self.policy {
                    UnsupportedPolicy::Blank => {
                        tracing::debug!(?ch, index, "No glyph, substituting blank");
                        Ok(Glyph::BLANK)
                    }
                    UnsupportedPolicy::Error => Err(BannerError::UnsupportedChar { ch, index }),
                },
            })
            .collect()
    }
}

/// Render `text` into `sink`, blanking unsupported characters
pub fn render<W: Write + ?Sized>(text: &str, sink: &mut W) -> Result<()> {
    Banner::new().render(text, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{lookup, GLYPH_ROWS};
    use pretty_assertions::assert_eq;
    use std::io;

    const FIXTURES: &[(&str, [&str; BANNER_HEIGHT])] = &[
        (
            "ABCDEFGH",
            [
                " ###  ####   ###  ####  ##### #####  #### #   # ",
                "#   # #   # #   # #   # #     #     #     #   # ",
                "##### ####  #     #   # ###   ###   #  ## ##### ",
                "#   # #   # #     #   # #     #     #   # #   # ",
                "#   # #   # #     #   # #     #     #   # #   # ",
                "#   # #   # #   # #   # #     #     #   # #   # ",
                "#   # ####   ###  ####  ##### #      ###  #   # ",
                "                                                ",
                "",
                "",
            ],
        ),
        (
            "IJKLMNOP",
            [
                " ###      # #   # #     #   # #   #  ###  ####  ",
                "  #       # #  #  #     ## ## ##  # #   # #   # ",
                "  #       # ###   #     # # # # # # #   # ####  ",
                "  #       # #  #  #     #   # #  ## #   # #     ",
                "  #       # #   # #     #   # #   # #   # #     ",
                "  #   #   # #   # #     #   # #   # #   # #     ",
                " ###   ###  #   # ##### #   # #   #  ###  #     ",
                "                                                ",
                "",
                "",
            ],
        ),
        (
            "QRSTUVWX",
            [
                " ###  ####   #### ##### #   # #   # #   # #   # ",
                "#   # #   # #       #   #   # #   # #   #  # #  ",
                "#   # ####   ###    #   #   # #   # #   #   #   ",
                "#   # #   #     #   #   #   # #   # #   #  # #  ",
                "# # # #   #     #   #   #   #  # #  # # # #   # ",
                "#  #  #   # #   #   #   #   #  # #  ## ## #   # ",
                " ## # #   #  ###    #    ###    #   #   # #   # ",
                "                                                ",
                "",
                "",
            ],
        ),
        (
            "YZabcdef",
            [
                "#   # #####       #               #          ## ",
                " # #      #       #               #         #   ",
                "  #      #   ###  # ##   ###   ## #  ###   #### ",
                "  #     #       # ##  # #   # #  ## #   #   #   ",
                "  #    #     #### #   # #     #   # #####   #   ",
                "  #   #     #   # #   # #   # #   # #       #   ",
                "  #   #####  #### ####   ###   ####  ####   #   ",
                "                                                ",
                "",
                "",
            ],
        ),
        (
            "ghijklmn",
            [
                "      #       #       # #      ##               ",
                "      #                 #       #               ",
                " #### # ##   ##       # #  #    #   ## #  ####  ",
                "#   # ##  #   #       # # #     #   # # # #   # ",
                "#   # #   #   #       # ##      #   # # # #   # ",
                " #### #   #   #   #   # # #     #   #   # #   # ",
                "    # #   #    ## #   # #  #     ## #   # #   # ",
                "####               ###                          ",
                "",
                "",
            ],
        ),
        (
            "opqrstuv",
            [
                "                                                ",
                "                                #               ",
                " ###  # ##   ## # # ##   ####  ###  #   # #   # ",
                "#   # ##  # #  ## ##  # #       #   #   # #   # ",
                "#   # #   # #   # #      ###    #   #   # #   # ",
                "#   # ####   #### #         #   #   #   #  # #  ",
                " ###  #         # #     ####     ##  ####   #   ",
                "      #         #                               ",
                "",
                "",
            ],
        ),
        (
            "wxyz0123",
            [
                "                         ###    #    ###   ###  ",
                "                        #   #  ##   #   # #   # ",
                "#   # #   # #   # ##### #  ##   #       #     # ",
                "#   #  # #  #   #    #  # # #   #     ##    ##  ",
                "# # #   #   #   #   #   ##  #   #    #        # ",
                "# # #  # #   ####  #    #   #   #   #   # #   # ",
                " #### #   #     # #####  ###  ##### #####  ###  ",
                "            ####                                ",
                "",
                "",
            ],
        ),
        (
            "56789[|]",
            [
                "#####   ##  #####  ###   ###   ###    #    ###  ",
                "#      #    #   # #   # #   #  #      #      #  ",
                "####  #         # #   # #   #  #      #      #  ",
                "    # ####     #   ###   ####  #      #      #  ",
                "    # #   #   #   #   #     #  #      #      #  ",
                "#   # #   #   #   #   #    #   #      #      #  ",
                " ###   ###    #    ###   ##    ###    #    ###  ",
                "                                                ",
                "",
                "",
            ],
        ),
    ];

    fn render_bytes(text: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        render(text, &mut buf).unwrap();
        buf
    }

    fn split_lines(buf: &[u8]) -> Vec<&str> {
        std::str::from_utf8(buf).unwrap().split('\n').collect()
    }

    /// Accepts `limit` writes, then fails every write after that
    struct FailingSink {
        limit: usize,
        writes: usize,
        data: Vec<u8>,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes == self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.writes += 1;
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_fixtures() {
        for (text, expected) in FIXTURES {
            let buf = render_bytes(text);
            assert_eq!(split_lines(&buf), expected.to_vec(), "{text}");
        }
    }

    #[test]
    fn test_first_fixture_trailing_rows() {
        let buf = render_bytes("ABCDEFGH");
        let lines = split_lines(&buf);
        assert_eq!(lines.len(), BANNER_HEIGHT);
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "");
        assert!(buf.ends_with(b" \n\n"));
    }

    #[test]
    fn test_line_count_and_width() {
        for text in ["", "A", "Hello", "a b c", "0123456789", "[|]", "wide text here!"] {
            let buf = render_bytes(text);
            let lines = split_lines(&buf);
            assert_eq!(lines.len(), BANNER_HEIGHT, "{text:?}");

            let width = text.chars().count() * GLYPH_WIDTH;
            for line in &lines[..GLYPH_ROWS] {
                assert_eq!(line.len(), width, "{text:?}");
            }
            for line in &lines[GLYPH_ROWS..] {
                assert!(line.is_empty(), "{text:?}");
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let buf = render_bytes("");
        assert_eq!(buf, b"\n".repeat(BANNER_HEIGHT - 1));
        assert_eq!(split_lines(&buf), vec![""; BANNER_HEIGHT]);
    }

    #[test]
    fn test_idempotent() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        render("Rust 2024", &mut first).unwrap();
        render("Rust 2024", &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_to_string_matches_render() {
        let banner = Banner::new();
        let text = "IJKLMNOP";
        let string = banner.render_to_string(text).unwrap();
        assert_eq!(string.as_bytes(), render_bytes(text).as_slice());
    }

    #[test]
    fn test_unsupported_char_blank() {
        let lines = Banner::new().lines("1!").unwrap();
        let one = lookup('1').unwrap();
        for (row, line) in lines.iter().take(GLYPH_ROWS).enumerate() {
            assert_eq!(line, &format!("{}      ", one.row(row)));
        }
    }

    #[test]
    fn test_space_keeps_alignment() {
        let lines = Banner::new().lines("A B").unwrap();
        let a = lookup('A').unwrap();
        let b = lookup('B').unwrap();
        assert_eq!(lines[0], format!("{}      {}", a.row(0), b.row(0)));
        assert_eq!(lines[0].len(), 3 * GLYPH_WIDTH);
    }

    #[test]
    fn test_non_ascii_blank() {
        let lines = Banner::new().lines("é日").unwrap();
        assert!(lines[..GLYPH_ROWS]
            .iter()
            .all(|line| line.len() == 2 * GLYPH_WIDTH && line.trim().is_empty()));
    }

    #[test]
    fn test_unsupported_char_error() {
        let banner = Banner::with_policy(UnsupportedPolicy::Error);
        let mut buf = Vec::new();
        let err = banner.render("9?", &mut buf).unwrap_err();

        assert!(matches!(err, BannerError::UnsupportedChar { ch: '?', index: 1 }));
        assert_eq!(err.to_string(), "unsupported character '?' at position 1");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_error_policy_accepts_supported_text() {
        let banner = Banner::with_policy(UnsupportedPolicy::Error);
        assert_eq!(banner.policy(), UnsupportedPolicy::Error);
        assert!(banner.render_to_string("56789[|]").is_ok());
    }

    #[test]
    fn test_sink_failure_stops_output() {
        let mut sink = FailingSink {
            limit: 2,
            writes: 0,
            data: Vec::new(),
        };
        let err = render("AB", &mut sink).unwrap_err();

        assert!(matches!(err, BannerError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(sink.writes, 2);

        let expected = render_bytes("AB");
        let two_lines: Vec<u8> = expected
            .split_inclusive(|b| *b == b'\n')
            .take(2)
            .flatten()
            .copied()
            .collect();
        assert_eq!(sink.data, two_lines);
    }

    #[test]
    fn test_dyn_sink() {
        let mut buf = Vec::new();
        let sink: &mut dyn Write = &mut buf;
        render("Z", sink).unwrap();
        assert_eq!(split_lines(&buf).len(), BANNER_HEIGHT);
    }

    #[test]
    fn test_policy_names() {
        let names: Vec<_> = UnsupportedPolicy::all().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["blank", "error"]);
        assert_eq!(UnsupportedPolicy::default(), UnsupportedPolicy::Blank);
    }
}
