use crate::accel::simd::within_distance;
use crate::error::Result;
use crate::kmer::alphabet;

/// Number of start positions in `text` where `pattern` matches with at most
/// `max_mismatches` substitutions. Overlapping matches all count.
///
/// Returns 0 when the pattern is longer than the text.
pub fn count_matches(text: &[u8], pattern: &[u8], max_mismatches: usize) -> Result<usize> {
    alphabet::validate(text)?;
    alphabet::validate(pattern)?;
    Ok(count_matches_unchecked(text, pattern, max_mismatches))
}

/// Start positions of every approximate match, in increasing order
pub fn find_matches(text: &[u8], pattern: &[u8], max_mismatches: usize) -> Result<Vec<usize>> {
    alphabet::validate(text)?;
    alphabet::validate(pattern)?;
    Ok(match_positions(text, pattern, max_mismatches).collect())
}

/// [`count_matches`] for inputs the caller has already validated
pub(crate) fn count_matches_unchecked(text: &[u8], pattern: &[u8], max_mismatches: usize) -> usize {
    match_positions(text, pattern, max_mismatches).count()
}

fn match_positions<'a>(
    text: &'a [u8],
    pattern: &'a [u8],
    max_mismatches: usize,
) -> impl Iterator<Item = usize> + 'a {
    let last = if pattern.len() > text.len() {
        None
    } else {
        Some(text.len() - pattern.len())
    };
    let every_position = max_mismatches >= pattern.len();

    last.into_iter()
        .flat_map(|last| 0..=last)
        .filter(move |&p| {
            every_position || within_distance(&text[p..p + pattern.len()], pattern, max_mismatches)
        })
}
