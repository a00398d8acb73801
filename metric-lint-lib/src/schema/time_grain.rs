use regex::Regex;
use std::sync::LazyLock;

static TIME_GRAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("^PT[0-9]+[MH]$").expect("invalid regex"));

/// Check that a time grain is a minute or hour duration such as `PT5M` or `PT1H`.
#[must_use]
pub fn is_valid_time_grain(s: &str) -> bool {
    TIME_GRAIN_REGEX.is_match(s)
}
