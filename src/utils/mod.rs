// Utility functions

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

const ID_SUFFIX_LEN: usize = 9;

/// Generate a list-key style identifier: `<prefix>-<unix millis>-<suffix>`.
///
/// Time plus a random suffix is unique enough for UI keys within one parse;
/// it is not a persistence-grade identifier.
pub fn generate_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), suffix)
}

/// Join non-empty pieces with a single space
pub fn join_spaced<'a>(pieces: impl IntoIterator<Item = &'a str>) -> String {
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("rec");
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "rec");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_id_unique_in_burst() {
        let ids: HashSet<String> = (0..500).map(|_| generate_id("rec")).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_join_spaced() {
        assert_eq!(join_spaced(["a ", "", "  b"]), "a b");
        assert_eq!(join_spaced(Vec::<&str>::new()), "");
    }
}
