use std::collections::HashMap;

/// Tally exact-match duplicates in a sequence of lines.
///
/// A pure histogram over string bins: order of the input is irrelevant,
/// counts are always positive, and an empty input yields an empty map.
pub fn tally<I>(lines: I) -> HashMap<String, usize>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut counts = HashMap::new();
    for line in lines {
        *counts.entry(line.into()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_duplicates() {
        let counts = tally(["McDonald", "mcDonald", "McDonald"]);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["McDonald"], 2);
        assert_eq!(counts["mcDonald"], 1);
    }

    #[test]
    fn test_tally_empty_input() {
        let counts = tally(Vec::<String>::new());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_tally_order_independent() {
        let forward = tally(["a", "b", "a", "c", "b", "a"]);
        let backward = tally(["a", "b", "c", "a", "b", "a"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_tally_additive_over_concatenation() {
        let first = ["a", "b", "a"];
        let second = ["b", "c"];

        let combined = tally(first.iter().chain(second.iter()).copied());
        let left = tally(first);
        let right = tally(second);

        for (key, &count) in &combined {
            let sum = left.get(key).copied().unwrap_or(0) + right.get(key).copied().unwrap_or(0);
            assert_eq!(count, sum);
        }
        for key in left.keys().chain(right.keys()) {
            assert!(combined.contains_key(key));
        }
    }

    #[test]
    fn test_tally_counts_are_positive() {
        let counts = tally(["x", "", "x", ""]);
        assert!(counts.values().all(|&c| c > 0));
        assert_eq!(counts[""], 2);
    }
}
