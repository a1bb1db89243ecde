use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Legacy Gradle style, e.g. "2 mins 3.5 secs" or "12.345 secs"
    static ref LEGACY_DURATION_RE: Regex =
        Regex::new(r"(?:(\d+) mins )?(\d+)(?:\.\d+)? secs").unwrap();
    // Newer compact style, e.g. "3m 10s" or "45s"
    static ref COMPACT_DURATION_RE: Regex = Regex::new(r"(?:(\d+)m )?(\d+)s").unwrap();
}

/// Converts a free-text Gradle duration description into whole seconds.
///
/// Fractional seconds are truncated. Unparseable input is treated as zero
/// seconds, not as an error.
pub(super) fn convert_gradle_time_to_seconds(input: &str) -> u64 {
    for pattern in [&*LEGACY_DURATION_RE, &*COMPACT_DURATION_RE] {
        if let Some(caps) = pattern.captures(input) {
            let minutes = caps
                .get(1)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .unwrap_or(0);
            let seconds = caps
                .get(2)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .unwrap_or(0);
            return minutes * 60 + seconds;
        }
    }

    0
}
