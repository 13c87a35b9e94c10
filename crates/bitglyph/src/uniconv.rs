//! Legacy encoding to Unicode conversion tables
//!
//! Tables are the Unicode consortium's mapping files: a source code and a
//! Unicode scalar per line, `0x` prefixed, with `#` comments.

use rustc_hash::FxHashMap;

use crate::error::{GlyphError, Result};

fn parse_code(line: usize, token: &str) -> Result<u32> {
    let token = token.trim();
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|e| GlyphError::ConversionTable {
        line,
        msg: format!("invalid code `{token}`: {e}"),
    })
}

/// Parse a conversion table whose two columns are separated by `separator`.
///
/// Lines that do not split into exactly two fields are skipped. Entries
/// whose target is not a Unicode scalar value are dropped.
pub fn parse(src: &str, separator: &str) -> Result<FxHashMap<u32, char>> {
    let mut table = FxHashMap::default();
    for (idx, raw) in src.lines().enumerate() {
        let line = match raw.find('#') {
            Some(i) => &raw[..i],
            None => raw,
        }
        .trim();
        let tokens: Vec<&str> = line.split(separator).collect();
        let [from, to] = tokens.as_slice() else {
            continue;
        };
        let from = parse_code(idx + 1, from)?;
        let to = parse_code(idx + 1, to)?;
        if let Some(c) = char::from_u32(to) {
            table.insert(from, c);
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated() {
        let src = "\
#\tName: cp932 to Unicode table
0x20\t0x0020\t#SPACE
0x8160\t0x301C\t#WAVE DASH
0x8740\t0x2460\t#CIRCLED DIGIT ONE

0xFD\t#UNDEFINED
";
        let table = parse(src, "\t").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&0x8160), Some(&'\u{301c}'));
        assert_eq!(table.get(&0x20), Some(&' '));
        assert_eq!(table.get(&0xfd), None);
    }

    #[test]
    fn test_parse_double_space_separated() {
        let src = "0x3021  0xAC00  # HANGUL SYLLABLE GA\n0x3022  0xAC01\n";
        let table = parse(src, "  ").unwrap();
        assert_eq!(table.get(&0x3021), Some(&'가'));
        assert_eq!(table.get(&0x3022), Some(&'각'));
        // a tab separated table read with the wrong separator yields nothing
        assert!(parse("0x20\t0x20\n", "  ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_code_reports_line() {
        let err = parse("0x20\t0x20\n0xZZ\t0x21\n", "\t").unwrap_err();
        assert!(matches!(err, GlyphError::ConversionTable { line: 2, .. }));
    }
}
