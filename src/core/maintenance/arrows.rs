//! Repair of navigation arrows mangled by a Latin-1 round trip.
//!
//! The UTF-8 bytes of `←` (E2 86 90) and `→` (E2 86 92) read as
//! Windows-1252 come out as `â` `†` plus one more char, U+0090 for the
//! left arrow and `’` for the right one. Only those full three-char
//! sequences are rewritten, so other mangled arrows such as `â†‘` are
//! left alone.

use super::Rewrite;

const LEFT_MOJIBAKE: &str = "\u{e2}\u{2020}\u{90}";
const RIGHT_MOJIBAKE: &str = "\u{e2}\u{2020}\u{2019}";

/// Mojibake sequences and the arrows they came from
const REPLACEMENTS: [(&str, &str); 2] = [(LEFT_MOJIBAKE, "←"), (RIGHT_MOJIBAKE, "→")];

/// Restores `←` and `→` in pages
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowRepair;

impl Rewrite for ArrowRepair {
    fn name(&self) -> &'static str {
        "fix-arrows"
    }

    fn rewrite(&self, content: &str) -> Option<String> {
        if !REPLACEMENTS.iter().any(|(bad, _)| content.contains(bad)) {
            return None;
        }

        let repaired = REPLACEMENTS
            .iter()
            .fold(content.to_string(), |text, (bad, good)| text.replace(bad, good));
        Some(repaired)
    }
}
