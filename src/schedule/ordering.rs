use crate::program::dates::{month_number, CURRENT_YEAR, WEEKDAY_TOKENS, WEEKEND_TOKEN};
use crate::program::SortKey;

/// Key for labels that cannot be parsed; sorts before everything else
pub const UNPARSED: SortKey = (0, 0, 0);

/// Parses (year, month, day) out of a canonical date label.
///
/// Weekday labels ("Tirsdag 15 Oktober 2025") default to the current season
/// year when the year is missing; weekend labels ("Søndag 07 September 2025")
/// need all four parts. Anything else sorts as (0, 0, 0).
pub fn parse_sort_key(label: &str) -> SortKey {
    let parts: Vec<&str> = label.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return UNPARSED;
    };

    let parsed = if WEEKDAY_TOKENS.contains(first) {
        parse_parts(&parts, Some(CURRENT_YEAR))
    } else if *first == WEEKEND_TOKEN {
        parse_parts(&parts, None)
    } else {
        None
    };
    parsed.unwrap_or(UNPARSED)
}

fn parse_parts(parts: &[&str], default_year: Option<i32>) -> Option<SortKey> {
    let day: u32 = parts.get(1)?.parse().ok()?;
    let month = month_number(parts.get(2)?)?;
    let year = match parts.get(3) {
        Some(y) => y.parse().ok()?,
        None => default_year?,
    };
    Some((year, month, day))
}

/// Sorts labels chronologically. The sort is stable, so labels sharing a key
/// keep their incoming order.
pub fn sort_chronologically<S: AsRef<str>>(labels: &mut [S]) {
    labels.sort_by_key(|l| parse_sort_key(l.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_and_weekend_keys() {
        assert_eq!(parse_sort_key("Tirsdag 15 Oktober 2025"), (2025, 10, 15));
        assert_eq!(parse_sort_key("Mandag 03 Januar 2026"), (2026, 1, 3));
        assert_eq!(parse_sort_key("Torsdag 02 Oktober 2025"), (2025, 10, 2));
        assert_eq!(parse_sort_key("Søndag 07 September 2025"), (2025, 9, 7));
    }

    #[test]
    fn test_weekday_label_without_year_defaults() {
        assert_eq!(parse_sort_key("Tirsdag 15 Oktober"), (2025, 10, 15));
    }

    #[test]
    fn test_unparseable_labels_sort_first() {
        assert_eq!(parse_sort_key("Søndag 07 September"), UNPARSED);
        assert_eq!(parse_sort_key("Fredag 07 September 2025"), UNPARSED);
        assert_eq!(parse_sort_key("Tirsdag xx Oktober 2025"), UNPARSED);
        assert_eq!(parse_sort_key(""), UNPARSED);
    }

    #[test]
    fn test_sort_chronologically() {
        let mut labels = vec![
            "Tirsdag 13 Januar 2026",
            "Søndag 07 September 2025",
            "Fredag 01 Maj 2025",
            "Tirsdag 02 September 2025",
        ];
        sort_chronologically(&mut labels);
        assert_eq!(
            labels,
            vec![
                "Fredag 01 Maj 2025",
                "Tirsdag 02 September 2025",
                "Søndag 07 September 2025",
                "Tirsdag 13 Januar 2026",
            ]
        );
    }
}
