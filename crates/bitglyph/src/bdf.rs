//! Minimal BDF reader
//!
//! Only the properties needed to place a glyph are read: `STARTCHAR`,
//! `ENCODING`, `BBX`, `BITMAP` and `ENDCHAR`. Everything else is ignored.

use crate::error::{GlyphError, Result};
use crate::glyph::Glyph;

/// One `STARTCHAR` .. `ENDCHAR` block
#[derive(Clone, Debug)]
pub struct BdfChar {
    /// Raw `ENCODING` value; its meaning depends on the font's charset.
    pub encoding: i32,
    pub glyph: Glyph,
}

#[derive(Default)]
struct Pending {
    encoding: i32,
    bbx: (i32, i32, i32, i32),
    rows: Option<Vec<Vec<u8>>>,
}

fn bdf_err(line: usize, msg: impl Into<String>) -> GlyphError {
    GlyphError::Bdf {
        line,
        msg: msg.into(),
    }
}

fn parse_int(line: usize, token: Option<&str>, what: &str) -> Result<i32> {
    let token = token.ok_or_else(|| bdf_err(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|e| bdf_err(line, format!("invalid {what} `{token}`: {e}")))
}

fn parse_hex_row(line: usize, row: &str) -> Result<Vec<u8>> {
    if row.len() % 2 != 0 {
        return Err(bdf_err(line, "bitmap row length must be even"));
    }
    (0..row.len())
        .step_by(2)
        .map(|i| {
            row.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| bdf_err(line, format!("invalid bitmap row `{row}`")))
        })
        .collect()
}

/// Parse every glyph in a BDF document.
pub fn parse(src: &str) -> Result<Vec<BdfChar>> {
    let mut glyphs = Vec::new();
    let mut current: Option<Pending> = None;

    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        if line.starts_with("STARTCHAR") {
            if current.is_some() {
                return Err(bdf_err(line_no, "STARTCHAR before ENDCHAR"));
            }
            current = Some(Pending::default());
            continue;
        }

        let Some(pending) = current.as_mut() else {
            // Header properties
            continue;
        };

        if let Some(rest) = line.strip_prefix("ENCODING ") {
            pending.encoding = parse_int(line_no, rest.split_whitespace().next(), "encoding")?;
        } else if let Some(rest) = line.strip_prefix("BBX ") {
            let mut tokens = rest.split_whitespace();
            let w = parse_int(line_no, tokens.next(), "BBX width")?;
            let h = parse_int(line_no, tokens.next(), "BBX height")?;
            let x = parse_int(line_no, tokens.next(), "BBX x offset")?;
            let y = parse_int(line_no, tokens.next(), "BBX y offset")?;
            pending.bbx = (w, h, x, y);
        } else if line.starts_with("BITMAP") {
            pending.rows = Some(Vec::new());
        } else if line.starts_with("ENDCHAR") {
            let Some(done) = current.take() else {
                continue;
            };
            let (w, h, x, y) = done.bbx;
            let rows = done.rows.unwrap_or_default();
            glyphs.push(BdfChar {
                encoding: done.encoding,
                glyph: Glyph::from_rows(w, h, x, y, &rows),
            });
        } else if let Some(rows) = pending.rows.as_mut() {
            rows.push(parse_hex_row(line_no, line.trim())?);
        }
    }

    if current.is_some() {
        return Err(bdf_err(src.lines().count(), "unterminated STARTCHAR"));
    }

    tracing::trace!("Parsed {} BDF glyphs", glyphs.len());
    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
STARTFONT 2.1
FONT -misc-fixed-medium-r-semicondensed--13-120-75-75-c-60-iso10646-1
SIZE 13 75 75
FONTBOUNDINGBOX 6 13 0 -2
CHARS 2
STARTCHAR space
ENCODING 32
SWIDTH 480 0
DWIDTH 6 0
BBX 6 13 0 -2
BITMAP
00
00
00
00
00
00
00
00
00
00
00
00
00
ENDCHAR
STARTCHAR exclam
ENCODING 33
BBX 1 3 2 0
BITMAP
80
80
00
ENDCHAR
ENDFONT
";

    #[test]
    fn test_parse_sample() {
        let glyphs = parse(SAMPLE).unwrap();
        assert_eq!(glyphs.len(), 2);

        let space = &glyphs[0];
        assert_eq!(space.encoding, 32);
        assert_eq!((space.glyph.width, space.glyph.height), (6, 13));
        assert_eq!((space.glyph.x, space.glyph.y), (0, -2));
        assert!(!space.glyph.has_ink());

        let exclam = &glyphs[1];
        assert_eq!(exclam.encoding, 33);
        assert_eq!((exclam.glyph.x, exclam.glyph.y), (2, 0));
        assert!(exclam.glyph.at(0, 0));
        assert!(exclam.glyph.at(0, 1));
        assert!(!exclam.glyph.at(0, 2));
    }

    #[test]
    fn test_odd_row_is_error() {
        let src = "STARTCHAR a\nENCODING 97\nBBX 4 1 0 0\nBITMAP\n8\nENDCHAR\n";
        match parse(src) {
            Err(GlyphError::Bdf { line, .. }) => assert_eq!(line, 5),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_bad_encoding_is_error() {
        let src = "STARTCHAR a\nENCODING x\nENDCHAR\n";
        assert!(matches!(parse(src), Err(GlyphError::Bdf { line: 2, .. })));
    }

    #[test]
    fn test_unterminated_char_is_error() {
        let src = "STARTCHAR a\nENCODING 97\nBBX 1 1 0 0\nBITMAP\n80\n";
        assert!(parse(src).is_err());
    }
}
