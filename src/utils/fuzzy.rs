// Fuzzy matching utilities for "did you mean" suggestions

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two-row variant of the edit distance matrix
    let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut current = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2_chars.len()]
}

/// Find near matches for a name among candidates (case-insensitive)
/// Returns up to 3 matches sorted by distance (closest first), then by name
pub fn find_near_matches<'a>(
    search_name: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    max_distance: usize,
) -> Vec<String> {
    let search_lower = search_name.to_lowercase();
    let mut matches: Vec<(&str, usize)> = Vec::new();

    for candidate in candidates {
        let candidate_lower = candidate.to_lowercase();
        let distance = levenshtein_distance(&search_lower, &candidate_lower);

        if distance <= max_distance {
            matches.push((candidate, distance));
        } else if search_lower.len() < candidate_lower.len() && candidate_lower.starts_with(&search_lower) {
            // Prefix of a longer name counts as a weak match
            matches.push((candidate, max_distance));
        }
    }

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    matches.into_iter().take(3).map(|(name, _)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("same", "same"), 0);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
    }

    #[test]
    fn test_find_near_matches() {
        let users = ["admin", "samantha", "sam", "thabo"];

        let matches = find_near_matches("Sam", users, 2);
        assert_eq!(matches[0], "sam");
        assert!(matches.contains(&"samantha".to_string()));

        let matches = find_near_matches("admn", users, 2);
        assert_eq!(matches, vec!["admin".to_string()]);

        let matches = find_near_matches("zzzzzzzz", users, 2);
        assert!(matches.is_empty());
    }
}
