/// Normalizes a name for comparison: whitespace runs collapse to single
/// spaces and everything is lowercased
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Finds the roster member an extracted name refers to.
///
/// Rules are tried in order and the first roster entry satisfying a rule wins:
/// 1. exact match after normalization
/// 2. one name contains the other ("Michael Vollenberg Keler" vs "Michael Keler")
/// 3. the names share a word longer than two characters
///
/// Roster order decides ties, so earlier members are preferred.
pub fn find_matching_member<'a>(extracted: &str, roster: &'a [String]) -> Option<&'a str> {
    let wanted = normalize_name(extracted);
    if wanted.is_empty() {
        return None;
    }

    let normalized: Vec<(&'a str, String)> = roster
        .iter()
        .map(|m| (m.as_str(), normalize_name(m)))
        .filter(|(_, n)| !n.is_empty())
        .collect();

    if let Some((member, _)) = normalized.iter().find(|(_, n)| *n == wanted) {
        return Some(member);
    }

    if let Some((member, _)) = normalized
        .iter()
        .find(|(_, n)| wanted.contains(n.as_str()) || n.contains(wanted.as_str()))
    {
        return Some(member);
    }

    // Last names are the most reliable signal in these programs
    let wanted_words: Vec<&str> = wanted
        .split(' ')
        .filter(|w| w.chars().count() > 2)
        .collect();
    normalized
        .iter()
        .find(|(_, n)| n.split(' ').any(|w| wanted_words.contains(&w)))
        .map(|(member, _)| *member)
}
