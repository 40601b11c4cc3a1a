//! Cache key builders for all Bouquet cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Prefix applied to all Bouquet cache keys.
const PREFIX: &str = "bouquet";

/// Cache key for a recently answered request, keyed by the request
/// fingerprint (a hash over URL and body).
pub fn duplicate_request(fingerprint: &str) -> String {
    format!("{PREFIX}:dup:{fingerprint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_request_key() {
        assert_eq!(duplicate_request("abc123"), "bouquet:dup:abc123");
    }
}
