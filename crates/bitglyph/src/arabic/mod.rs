//! Arabic shaping for bitmap rendering
//!
//! [`presentation_forms`] turns logical text into presentation-form code
//! points in visual left-to-right order, ready to be drawn glyph by glyph:
//!
//! 1. every joining letter gets an isolated, initial, medial or final form
//!    from its neighbors; nonspacing marks are transparent to joining;
//! 2. Lam followed by an Alef variant becomes one ligature;
//! 3. runes are grouped into direction runs and reordered.
//!
//! The reordering is a deliberately small subset of UAX #9: there are no
//! embedding levels, no explicit formatting characters and no mirroring.

mod table;

use smallvec::SmallVec;
use unicode_bidi::{bidi_class, BidiClass};

use crate::unicode::is_nonspacing_mark;

/// Text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Contextual form of a rune
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArabicForm {
    /// Not a joining letter
    Neutral,
    Isolated,
    Initial,
    Medial,
    Final,
}

impl ArabicForm {
    fn index(self) -> Option<usize> {
        match self {
            ArabicForm::Neutral => None,
            ArabicForm::Isolated => Some(0),
            ArabicForm::Initial => Some(1),
            ArabicForm::Medial => Some(2),
            ArabicForm::Final => Some(3),
        }
    }
}

fn can_connect_before(r: char) -> bool {
    table::forms(r).is_some_and(|f| f[3] != 0 || f[2] != 0)
}

fn can_connect_after(r: char) -> bool {
    table::forms(r).is_some_and(|f| f[1] != 0 || f[2] != 0)
}

fn can_connect_both(r: char) -> bool {
    table::forms(r).is_some_and(|f| f[2] != 0)
}

/// Assign a contextual form to every rune of `text`.
pub fn contextual_forms(text: &str) -> Vec<(char, ArabicForm)> {
    let mut out: Vec<(char, ArabicForm)> = Vec::with_capacity(text.len());
    for r in text.chars() {
        if table::forms(r).is_none() {
            out.push((r, ArabicForm::Neutral));
            continue;
        }

        // Nonspacing marks take no part in joining.
        let prev = out
            .iter()
            .rposition(|(p, _)| !is_nonspacing_mark(*p))
            .map(|i| (i, out[i]));

        let Some((prev_idx, (prev_r, prev_form))) = prev else {
            out.push((r, ArabicForm::Isolated));
            continue;
        };
        let isolated = prev_form == ArabicForm::Neutral
            || !can_connect_before(r)
            || !can_connect_after(prev_r)
            || (prev_form == ArabicForm::Final && !can_connect_both(prev_r));
        if isolated {
            out.push((r, ArabicForm::Isolated));
            continue;
        }

        out[prev_idx].1 = if prev_form == ArabicForm::Isolated {
            ArabicForm::Initial
        } else {
            ArabicForm::Medial
        };
        out.push((r, ArabicForm::Final));
    }
    out
}

const LAM: char = '\u{0644}';

/// Lam-Alef ligatures, `[initial, medial]` by Alef variant
fn lam_alef_ligature(lam_form: ArabicForm, alef: char) -> Option<char> {
    let [initial, medial] = match alef {
        // ALEF WITH MADDA ABOVE
        '\u{0622}' => ['\u{fef5}', '\u{fef6}'],
        // ALEF WITH HAMZA ABOVE
        '\u{0623}' => ['\u{fef7}', '\u{fef8}'],
        // ALEF WITH HAMZA BELOW
        '\u{0625}' => ['\u{fef9}', '\u{fefa}'],
        // ALEF
        '\u{0627}' => ['\u{fefb}', '\u{fefc}'],
        _ => return None,
    };
    match lam_form {
        ArabicForm::Initial => Some(initial),
        ArabicForm::Medial => Some(medial),
        _ => None,
    }
}

/// The presentation-form code point of `r` in `form`. A form the table
/// lacks keeps `r` itself.
fn presentation_char(r: char, form: ArabicForm) -> char {
    form.index()
        .and_then(|i| table::forms(r).map(|f| f[i]))
        .filter(|&code| code != 0)
        .and_then(char::from_u32)
        .unwrap_or(r)
}

fn shape(forms: &[(char, ArabicForm)]) -> Vec<char> {
    let mut out = Vec::with_capacity(forms.len());
    let mut i = 0;
    while i < forms.len() {
        let (r, form) = forms[i];
        if r == LAM {
            if let Some(lig) = forms.get(i + 1).and_then(|&(next, _)| lam_alef_ligature(form, next)) {
                out.push(lig);
                i += 2;
                continue;
            }
        }
        out.push(presentation_char(r, form));
        i += 1;
    }
    out
}

struct Run {
    /// Direction carried to the following runes
    base: Direction,
    /// Direction this run is laid out in
    resolved: Direction,
    runes: SmallVec<[char; 16]>,
}

fn split_runs(runes: &[char], default_direction: Direction) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &r in runes {
        let mut base = runs.last().map_or(default_direction, |run| run.base);
        let resolved = match bidi_class(r) {
            BidiClass::L => {
                base = Direction::LeftToRight;
                base
            }
            BidiClass::R | BidiClass::AL => {
                base = Direction::RightToLeft;
                base
            }
            // Weak types are laid out left to right.
            BidiClass::EN
            | BidiClass::ES
            | BidiClass::ET
            | BidiClass::AN
            | BidiClass::CS
            | BidiClass::BN => Direction::LeftToRight,
            // Neutrals, marks and everything not handled follow the base.
            _ => base,
        };

        match runs.last_mut() {
            Some(run) if run.base == base && run.resolved == resolved => run.runes.push(r),
            _ => runs.push(Run {
                base,
                resolved,
                runes: SmallVec::from_slice(&[r]),
            }),
        }
    }
    runs
}

/// Reverse a right-to-left run, keeping each base rune ahead of the marks
/// that logically follow it.
fn reverse_run(runes: &[char], out: &mut String) {
    let mut marks: SmallVec<[char; 4]> = SmallVec::new();
    for &r in runes.iter().rev() {
        if is_nonspacing_mark(r) {
            marks.push(r);
            continue;
        }
        out.push(r);
        out.extend(marks.drain(..).rev());
    }
    out.extend(marks.drain(..).rev());
}

/// Shape `input` into presentation forms in visual order.
///
/// With a right-to-left `default_direction` the order of the direction runs
/// is reversed. Shaping does not currently depend on `_lang`.
pub fn presentation_forms(input: &str, default_direction: Direction, _lang: &str) -> String {
    let shaped = shape(&contextual_forms(input));
    let mut runs = split_runs(&shaped, default_direction);
    if default_direction == Direction::RightToLeft {
        runs.reverse();
    }

    let mut out = String::with_capacity(input.len());
    for run in &runs {
        match run.resolved {
            Direction::LeftToRight => out.extend(run.runes.iter()),
            Direction::RightToLeft => reverse_run(&run.runes, &mut out),
        }
    }
    out
}
