/// "Did you mean" hints for mistyped flags.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use super::usage::known_flags;

/// Find the known flag that best fuzzy-matches an unknown `token`.
///
/// Only tokens that look like a flag (leading `-` plus at least one
/// alphanumeric character) are considered. Returns `None` when no flag
/// contains the token's characters in order.
#[must_use]
pub fn closest_flag(token: &str) -> Option<String> {
    if !looks_like_flag(token) {
        return None;
    }

    let pattern = Pattern::parse(token, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut buf = Vec::new();
    known_flags()
        .into_iter()
        .filter_map(|flag| {
            let score = pattern.score(Utf32Str::new(&flag, &mut buf), &mut matcher)?;
            Some((flag, score))
        })
        // Ties keep the first-declared flag.
        .fold(None, |best: Option<(String, u32)>, candidate| match best {
            Some(ref b) if b.1 >= candidate.1 => best,
            _ => Some(candidate),
        })
        .map(|(flag, _)| flag)
}

fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-') && token.chars().any(char::is_alphanumeric)
}
