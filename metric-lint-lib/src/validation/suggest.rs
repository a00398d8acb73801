use strsim::normalized_damerau_levenshtein;

const MIN_SUGGESTION_SCORE: f64 = 0.7;

/// Find the known property name closest to an unrecognized one, if any is close enough.
#[must_use]
pub fn closest_match(name: &str, candidates: impl IntoIterator<Item = &'static str>) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    let mut best: Option<(&'static str, f64)> = None;

    for candidate in candidates {
        let score = normalized_damerau_levenshtein(&lowered, &candidate.to_lowercase());
        if score >= MIN_SUGGESTION_SCORE && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate)
}
