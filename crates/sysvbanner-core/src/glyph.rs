//! # Glyph Table
//!
//! The fixed banner font: one 6×8 bitmap per supported character, drawn
//! with `#` for lit pixels and spaces for dark ones.
//!
//! ```text
//!  ###  ####   ###
//! #   # #   # #   #
//! ##### ####  #
//! #   # #   # #
//! #   # #   # #
//! #   # #   # #   #
//! #   # ####   ###
//! ```
//!
//! Every glyph shares the same dimensions, so rows from different glyphs at
//! the same index can be concatenated without padding.

/// Columns per glyph, including the blank gap column on the right
pub const GLYPH_WIDTH: usize = 6;

/// Pixel rows per glyph, including the descender row
pub const GLYPH_ROWS: usize = 8;

/// Empty lines the font emits below the pixel rows
pub const TRAILING_BLANK_LINES: usize = 2;

/// Total number of output lines in one banner
pub const BANNER_HEIGHT: usize = GLYPH_ROWS + TRAILING_BLANK_LINES;

/// Every character the font can draw, in table order
pub const SUPPORTED_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789[|]";

type Bitmap = [&'static str; GLYPH_ROWS];

const BLANK_BITMAP: Bitmap = ["      "; GLYPH_ROWS];

/// One drawable character of the banner font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    ch: char,
    rows: &'static Bitmap,
}

impl Glyph {
    /// All-space glyph used in place of characters the font cannot draw
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        rows: &BLANK_BITMAP,
    };

    /// The character this glyph draws
    pub fn ch(&self) -> char {
        self.ch
    }

    /// The pixel rows, top to bottom
    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Row `index` of the glyph as it appears in a banner.
    ///
    /// Indices past the pixel rows fall in the trailing blank lines and
    /// yield an empty string.
    pub fn row(&self, index: usize) -> &'static str {
        self.rows.get(index).copied().unwrap_or("")
    }

    /// Whether this is the blank substitution glyph
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.trim().is_empty())
    }
}

/// Look up the glyph for `ch`.
///
/// Returns `None` for characters outside [`SUPPORTED_CHARS`]. Lookup is
/// case-sensitive.
pub fn lookup(ch: char) -> Option<Glyph> {
    bitmap(ch).map(|rows| Glyph { ch, rows })
}

/// Whether the font has a glyph for `ch`
pub fn is_supported(ch: char) -> bool {
    bitmap(ch).is_some()
}

fn bitmap(ch: char) -> Option<&'static Bitmap> {
    let rows: &'static Bitmap = match ch {
        'A' => &[
            " ###  ", "#   # ", "##### ", "#   # ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'B' => &[
            "####  ", "#   # ", "####  ", "#   # ", "#   # ", "#   # ", "####  ", "      ",
        ],
        'C' => &[
            " ###  ", "#   # ", "#     ", "#     ", "#     ", "#   # ", " ###  ", "      ",
        ],
        'D' => &[
            "####  ", "#   # ", "#   # ", "#   # ", "#   # ", "#   # ", "####  ", "      ",
        ],
        'E' => &[
            "##### ", "#     ", "###   ", "#     ", "#     ", "#     ", "##### ", "      ",
        ],
        'F' => &[
            "##### ", "#     ", "###   ", "#     ", "#     ", "#     ", "#     ", "      ",
        ],
        'G' => &[
            " #### ", "#     ", "#  ## ", "#   # ", "#   # ", "#   # ", " ###  ", "      ",
        ],
        'H' => &[
            "#   # ", "#   # ", "##### ", "#   # ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'I' => &[
            " ###  ", "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", " ###  ", "      ",
        ],
        'J' => &[
            "    # ", "    # ", "    # ", "    # ", "    # ", "#   # ", " ###  ", "      ",
        ],
        'K' => &[
            "#   # ", "#  #  ", "###   ", "#  #  ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'L' => &[
            "#     ", "#     ", "#     ", "#     ", "#     ", "#     ", "##### ", "      ",
        ],
        'M' => &[
            "#   # ", "## ## ", "# # # ", "#   # ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'N' => &[
            "#   # ", "##  # ", "# # # ", "#  ## ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'O' => &[
            " ###  ", "#   # ", "#   # ", "#   # ", "#   # ", "#   # ", " ###  ", "      ",
        ],
        'P' => &[
            "####  ", "#   # ", "####  ", "#     ", "#     ", "#     ", "#     ", "      ",
        ],
        'Q' => &[
            " ###  ", "#   # ", "#   # ", "#   # ", "# # # ", "#  #  ", " ## # ", "      ",
        ],
        'R' => &[
            "####  ", "#   # ", "####  ", "#   # ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'S' => &[
            " #### ", "#     ", " ###  ", "    # ", "    # ", "#   # ", " ###  ", "      ",
        ],
        'T' => &[
            "##### ", "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "      ",
        ],
        'U' => &[
            "#   # ", "#   # ", "#   # ", "#   # ", "#   # ", "#   # ", " ###  ", "      ",
        ],
        'V' => &[
            "#   # ", "#   # ", "#   # ", "#   # ", " # #  ", " # #  ", "  #   ", "      ",
        ],
        'W' => &[
            "#   # ", "#   # ", "#   # ", "#   # ", "# # # ", "## ## ", "#   # ", "      ",
        ],
        'X' => &[
            "#   # ", " # #  ", "  #   ", " # #  ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'Y' => &[
            "#   # ", " # #  ", "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "      ",
        ],
        'Z' => &[
            "##### ", "    # ", "   #  ", "  #   ", " #    ", "#     ", "##### ", "      ",
        ],
        'a' => &[
            "      ", "      ", " ###  ", "    # ", " #### ", "#   # ", " #### ", "      ",
        ],
        'b' => &[
            "#     ", "#     ", "# ##  ", "##  # ", "#   # ", "#   # ", "####  ", "      ",
        ],
        'c' => &[
            "      ", "      ", " ###  ", "#   # ", "#     ", "#   # ", " ###  ", "      ",
        ],
        'd' => &[
            "    # ", "    # ", " ## # ", "#  ## ", "#   # ", "#   # ", " #### ", "      ",
        ],
        'e' => &[
            "      ", "      ", " ###  ", "#   # ", "##### ", "#     ", " #### ", "      ",
        ],
        'f' => &[
            "   ## ", "  #   ", " #### ", "  #   ", "  #   ", "  #   ", "  #   ", "      ",
        ],
        'g' => &[
            "      ", "      ", " #### ", "#   # ", "#   # ", " #### ", "    # ", "####  ",
        ],
        'h' => &[
            "#     ", "#     ", "# ##  ", "##  # ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'i' => &[
            "  #   ", "      ", " ##   ", "  #   ", "  #   ", "  #   ", "   ## ", "      ",
        ],
        'j' => &[
            "    # ", "      ", "    # ", "    # ", "    # ", "#   # ", "#   # ", " ###  ",
        ],
        'k' => &[
            "#     ", "#     ", "#  #  ", "# #   ", "##    ", "# #   ", "#  #  ", "      ",
        ],
        'l' => &[
            " ##   ", "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "   ## ", "      ",
        ],
        'm' => &[
            "      ", "      ", "## #  ", "# # # ", "# # # ", "#   # ", "#   # ", "      ",
        ],
        'n' => &[
            "      ", "      ", "####  ", "#   # ", "#   # ", "#   # ", "#   # ", "      ",
        ],
        'o' => &[
            "      ", "      ", " ###  ", "#   # ", "#   # ", "#   # ", " ###  ", "      ",
        ],
        'p' => &[
            "      ", "      ", "# ##  ", "##  # ", "#   # ", "####  ", "#     ", "#     ",
        ],
        'q' => &[
            "      ", "      ", " ## # ", "#  ## ", "#   # ", " #### ", "    # ", "    # ",
        ],
        'r' => &[
            "      ", "      ", "# ##  ", "##  # ", "#     ", "#     ", "#     ", "      ",
        ],
        's' => &[
            "      ", "      ", " #### ", "#     ", " ###  ", "    # ", "####  ", "      ",
        ],
        't' => &[
            "      ", "  #   ", " ###  ", "  #   ", "  #   ", "  #   ", "   ## ", "      ",
        ],
        'u' => &[
            "      ", "      ", "#   # ", "#   # ", "#   # ", "#   # ", " #### ", "      ",
        ],
        'v' => &[
            "      ", "      ", "#   # ", "#   # ", "#   # ", " # #  ", "  #   ", "      ",
        ],
        'w' => &[
            "      ", "      ", "#   # ", "#   # ", "# # # ", "# # # ", " #### ", "      ",
        ],
        'x' => &[
            "      ", "      ", "#   # ", " # #  ", "  #   ", " # #  ", "#   # ", "      ",
        ],
        'y' => &[
            "      ", "      ", "#   # ", "#   # ", "#   # ", " #### ", "    # ", "####  ",
        ],
        'z' => &[
            "      ", "      ", "##### ", "   #  ", "  #   ", " #    ", "##### ", "      ",
        ],
        '0' => &[
            " ###  ", "#   # ", "#  ## ", "# # # ", "##  # ", "#   # ", " ###  ", "      ",
        ],
        '1' => &[
            "  #   ", " ##   ", "  #   ", "  #   ", "  #   ", "  #   ", "##### ", "      ",
        ],
        '2' => &[
            " ###  ", "#   # ", "    # ", "  ##  ", " #    ", "#   # ", "##### ", "      ",
        ],
        '3' => &[
            " ###  ", "#   # ", "    # ", "  ##  ", "    # ", "#   # ", " ###  ", "      ",
        ],
        '4' => &[
            "   #  ", "  ##  ", " # #  ", "#  #  ", "##### ", "   #  ", "   #  ", "      ",
        ],
        '5' => &[
            "##### ", "#     ", "####  ", "    # ", "    # ", "#   # ", " ###  ", "      ",
        ],
        '6' => &[
            "  ##  ", " #    ", "#     ", "####  ", "#   # ", "#   # ", " ###  ", "      ",
        ],
        '7' => &[
            "##### ", "#   # ", "    # ", "   #  ", "  #   ", "  #   ", "  #   ", "      ",
        ],
        '8' => &[
            " ###  ", "#   # ", "#   # ", " ###  ", "#   # ", "#   # ", " ###  ", "      ",
        ],
        '9' => &[
            " ###  ", "#   # ", "#   # ", " #### ", "    # ", "   #  ", " ##   ", "      ",
        ],
        '[' => &[
            " ###  ", " #    ", " #    ", " #    ", " #    ", " #    ", " ###  ", "      ",
        ],
        '|' => &[
            "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "  #   ", "      ",
        ],
        ']' => &[
            " ###  ", "   #  ", "   #  ", "   #  ", "   #  ", "   #  ", " ###  ", "      ",
        ],
        _ => return None,
    };
    Some(rows)
}
