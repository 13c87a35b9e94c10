//! Arabic letter presentation forms
//!
//! Each entry maps a letter to its isolated, initial, medial and final
//! presentation forms. Zero means the form does not exist.

/// Sorted by code point
pub(super) const LETTERS: &[(u32, [u32; 4])] = &[
    // ARABIC LETTER HAMZA
    (0x0621, [0xfe80, 0, 0, 0]),
    // ARABIC LETTER ALEF WITH MADDA ABOVE
    (0x0622, [0xfe81, 0, 0, 0xfe82]),
    // ARABIC LETTER ALEF WITH HAMZA ABOVE
    (0x0623, [0xfe83, 0, 0, 0xfe84]),
    // ARABIC LETTER WAW WITH HAMZA ABOVE
    (0x0624, [0xfe85, 0, 0, 0xfe86]),
    // ARABIC LETTER ALEF WITH HAMZA BELOW
    (0x0625, [0xfe87, 0, 0, 0xfe88]),
    // ARABIC LETTER YEH WITH HAMZA ABOVE
    (0x0626, [0xfe89, 0xfe8b, 0xfe8c, 0xfe8a]),
    // ARABIC LETTER ALEF
    (0x0627, [0xfe8d, 0, 0, 0xfe8e]),
    // ARABIC LETTER BEH
    (0x0628, [0xfe8f, 0xfe91, 0xfe92, 0xfe90]),
    // ARABIC LETTER TEH MARBUTA
    (0x0629, [0xfe93, 0, 0, 0xfe94]),
    // ARABIC LETTER TEH
    (0x062a, [0xfe95, 0xfe97, 0xfe98, 0xfe96]),
    // ARABIC LETTER THEH
    (0x062b, [0xfe99, 0xfe9b, 0xfe9c, 0xfe9a]),
    // ARABIC LETTER JEEM
    (0x062c, [0xfe9d, 0xfe9f, 0xfea0, 0xfe9e]),
    // ARABIC LETTER HAH
    (0x062d, [0xfea1, 0xfea3, 0xfea4, 0xfea2]),
    // ARABIC LETTER KHAH
    (0x062e, [0xfea5, 0xfea7, 0xfea8, 0xfea6]),
    // ARABIC LETTER DAL
    (0x062f, [0xfea9, 0, 0, 0xfeaa]),
    // ARABIC LETTER THAL
    (0x0630, [0xfeab, 0, 0, 0xfeac]),
    // ARABIC LETTER REH
    (0x0631, [0xfead, 0, 0, 0xfeae]),
    // ARABIC LETTER ZAIN
    (0x0632, [0xfeaf, 0, 0, 0xfeb0]),
    // ARABIC LETTER SEEN
    (0x0633, [0xfeb1, 0xfeb3, 0xfeb4, 0xfeb2]),
    // ARABIC LETTER SHEEN
    (0x0634, [0xfeb5, 0xfeb7, 0xfeb8, 0xfeb6]),
    // ARABIC LETTER SAD
    (0x0635, [0xfeb9, 0xfebb, 0xfebc, 0xfeba]),
    // ARABIC LETTER DAD
    (0x0636, [0xfebd, 0xfebf, 0xfec0, 0xfebe]),
    // ARABIC LETTER TAH
    (0x0637, [0xfec1, 0xfec3, 0xfec4, 0xfec2]),
    // ARABIC LETTER ZAH
    (0x0638, [0xfec5, 0xfec7, 0xfec8, 0xfec6]),
    // ARABIC LETTER AIN
    (0x0639, [0xfec9, 0xfecb, 0xfecc, 0xfeca]),
    // ARABIC LETTER GHAIN
    (0x063a, [0xfecd, 0xfecf, 0xfed0, 0xfece]),
    // ARABIC TATWEEL
    (0x0640, [0x0640, 0x0640, 0x0640, 0x0640]),
    // ARABIC LETTER FEH
    (0x0641, [0xfed1, 0xfed3, 0xfed4, 0xfed2]),
    // ARABIC LETTER QAF
    (0x0642, [0xfed5, 0xfed7, 0xfed8, 0xfed6]),
    // ARABIC LETTER KAF
    (0x0643, [0xfed9, 0xfedb, 0xfedc, 0xfeda]),
    // ARABIC LETTER LAM
    (0x0644, [0xfedd, 0xfedf, 0xfee0, 0xfede]),
    // ARABIC LETTER MEEM
    (0x0645, [0xfee1, 0xfee3, 0xfee4, 0xfee2]),
    // ARABIC LETTER NOON
    (0x0646, [0xfee5, 0xfee7, 0xfee8, 0xfee6]),
    // ARABIC LETTER HEH
    (0x0647, [0xfee9, 0xfeeb, 0xfeec, 0xfeea]),
    // ARABIC LETTER WAW
    (0x0648, [0xfeed, 0, 0, 0xfeee]),
    // ARABIC LETTER ALEF MAKSURA
    (0x0649, [0xfeef, 0, 0, 0xfef0]),
    // ARABIC LETTER YEH
    (0x064a, [0xfef1, 0xfef3, 0xfef4, 0xfef2]),
    // ARABIC LETTER ALEF WASLA
    (0x0671, [0xfb50, 0, 0, 0xfb51]),
    // ARABIC LETTER U WITH HAMZA ABOVE
    (0x0677, [0xfbdd, 0, 0, 0]),
    // ARABIC LETTER TTEH
    (0x0679, [0xfb66, 0xfb68, 0xfb69, 0xfb67]),
    // ARABIC LETTER TTEHEH
    (0x067a, [0xfb5e, 0xfb60, 0xfb61, 0xfb5f]),
    // ARABIC LETTER BEEH
    (0x067b, [0xfb52, 0xfb54, 0xfb55, 0xfb53]),
    // ARABIC LETTER PEH
    (0x067e, [0xfb56, 0xfb58, 0xfb59, 0xfb57]),
    // ARABIC LETTER TEHEH
    (0x067f, [0xfb62, 0xfb64, 0xfb65, 0xfb63]),
    // ARABIC LETTER BEHEH
    (0x0680, [0xfb5a, 0xfb5c, 0xfb5d, 0xfb5b]),
    // ARABIC LETTER NYEH
    (0x0683, [0xfb76, 0xfb78, 0xfb79, 0xfb77]),
    // ARABIC LETTER DYEH
    (0x0684, [0xfb72, 0xfb74, 0xfb75, 0xfb73]),
    // ARABIC LETTER TCHEH
    (0x0686, [0xfb7a, 0xfb7c, 0xfb7d, 0xfb7b]),
    // ARABIC LETTER TCHEHEH
    (0x0687, [0xfb7e, 0xfb80, 0xfb81, 0xfb7f]),
    // ARABIC LETTER DDAL
    (0x0688, [0xfb88, 0, 0, 0xfb89]),
    // ARABIC LETTER DAHAL
    (0x068c, [0xfb84, 0, 0, 0xfb85]),
    // ARABIC LETTER DDAHAL
    (0x068d, [0xfb82, 0, 0, 0xfb83]),
    // ARABIC LETTER DUL
    (0x068e, [0xfb86, 0, 0, 0xfb87]),
    // ARABIC LETTER RREH
    (0x0691, [0xfb8c, 0, 0, 0xfb8d]),
    // ARABIC LETTER JEH
    (0x0698, [0xfb8a, 0, 0, 0xfb8b]),
    // ARABIC LETTER VEH
    (0x06a4, [0xfb6a, 0xfb6c, 0xfb6d, 0xfb6b]),
    // ARABIC LETTER PEHEH
    (0x06a6, [0xfb6e, 0xfb70, 0xfb71, 0xfb6f]),
    // ARABIC LETTER KEHEH
    (0x06a9, [0xfb8e, 0xfb90, 0xfb91, 0xfb8f]),
    // ARABIC LETTER NG
    (0x06ad, [0xfbd3, 0xfbd5, 0xfbd6, 0xfbd4]),
    // ARABIC LETTER GAF
    (0x06af, [0xfb92, 0xfb94, 0xfb95, 0xfb93]),
    // ARABIC LETTER NGOEH
    (0x06b1, [0xfb9a, 0xfb9c, 0xfb9d, 0xfb9b]),
    // ARABIC LETTER GUEH
    (0x06b3, [0xfb96, 0xfb98, 0xfb99, 0xfb97]),
    // ARABIC LETTER NOON GHUNNA
    (0x06ba, [0xfb9e, 0, 0, 0xfb9f]),
    // ARABIC LETTER RNOON
    (0x06bb, [0xfba0, 0xfba2, 0xfba3, 0xfba1]),
    // ARABIC LETTER HEH DOACHASHMEE
    (0x06be, [0xfbaa, 0xfbac, 0xfbad, 0xfbab]),
    // ARABIC LETTER HEH WITH YEH ABOVE
    (0x06c0, [0xfba4, 0, 0, 0xfba5]),
    // ARABIC LETTER HEH GOAL
    (0x06c1, [0xfba6, 0xfba8, 0xfba9, 0xfba7]),
    // ARABIC LETTER KIRGHIZ OE
    (0x06c5, [0xfbe0, 0, 0, 0xfbe1]),
    // ARABIC LETTER OE
    (0x06c6, [0xfbd9, 0, 0, 0xfbda]),
    // ARABIC LETTER U
    (0x06c7, [0xfbd7, 0, 0, 0xfbd8]),
    // ARABIC LETTER YU
    (0x06c8, [0xfbdb, 0, 0, 0xfbdc]),
    // ARABIC LETTER KIRGHIZ YU
    (0x06c9, [0xfbe2, 0, 0, 0xfbe3]),
    // ARABIC LETTER VE
    (0x06cb, [0xfbde, 0, 0, 0xfbdf]),
    // ARABIC LETTER FARSI YEH
    (0x06cc, [0xfbfc, 0xfbfe, 0xfbff, 0xfbfd]),
    // ARABIC LETTER E
    (0x06d0, [0xfbe4, 0xfbe6, 0xfbe7, 0xfbe5]),
    // ARABIC LETTER YEH BARREE
    (0x06d2, [0xfbae, 0, 0, 0xfbaf]),
    // ARABIC LETTER YEH BARREE WITH HAMZA ABOVE
    (0x06d3, [0xfbb0, 0, 0, 0xfbb1]),
    // ZERO WIDTH JOINER
    (0x200d, [0x200d, 0x200d, 0x200d, 0x200d]),
];

pub(super) fn forms(r: char) -> Option<&'static [u32; 4]> {
    LETTERS
        .binary_search_by_key(&(r as u32), |(code, _)| *code)
        .ok()
        .map(|i| &LETTERS[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(LETTERS.windows(2).all(|w| w[0].0 < w[1].0));
        // every letter has an isolated form
        assert!(LETTERS.iter().all(|(_, f)| f[0] != 0));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(forms('\u{0628}'), Some(&[0xfe8f, 0xfe91, 0xfe92, 0xfe90]));
        assert_eq!(forms('\u{0627}'), Some(&[0xfe8d, 0, 0, 0xfe8e]));
        assert_eq!(forms('a'), None);
    }
}
