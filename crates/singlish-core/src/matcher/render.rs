use crate::rules::RuleKind;
use crate::unicode::{HAL_KIRIMA, RAYANNA, ZWJ};

use super::Unit;

/// Compose rule units into Sinhala grapheme clusters.
///
/// - consonant + vowel: consonant with the vowel sign (`a` adds nothing)
/// - consonant with no vowel: consonant + hal kirima
/// - vowel at word start or after a syllable: independent vowel
/// - bare consonant + `ර` + vowel: rakaransaya (hal + ZWJ + ර)
/// - conjuncts attach to the bare consonant and keep it waiting for a vowel
/// - modifiers close the syllable, keeping the inherent vowel
pub fn render(units: &[Unit<'_>]) -> String {
    let mut out = String::new();
    let mut bare = false;

    for (i, unit) in units.iter().enumerate() {
        let entry = unit.entry;
        match &entry.kind {
            RuleKind::Consonant => {
                if bare {
                    let vowel_follows = units.get(i + 1).is_some_and(|u| u.entry.is_vowel());
                    if vowel_follows && is_rayanna(&entry.output) {
                        out.push(HAL_KIRIMA);
                        out.push(ZWJ);
                        out.push_str(&entry.output);
                        continue;
                    }
                    out.push(HAL_KIRIMA);
                }
                out.push_str(&entry.output);
                bare = true;
            }
            RuleKind::Conjunct => {
                out.push_str(&entry.output);
                bare = true;
            }
            RuleKind::Vowel { sign } => {
                if bare {
                    out.push_str(sign);
                } else {
                    out.push_str(&entry.output);
                }
                bare = false;
            }
            RuleKind::Modifier => {
                out.push_str(&entry.output);
                bare = false;
            }
        }
    }

    if bare {
        out.push(HAL_KIRIMA);
    }
    out
}

fn is_rayanna(output: &str) -> bool {
    let mut chars = output.chars();
    chars.next() == Some(RAYANNA) && chars.next().is_none()
}
