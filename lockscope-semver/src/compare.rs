use crate::Version;
use std::cmp::Ordering;

/// Orders two versions part by part.
///
/// Only parts are considered, never separators: `1.1.1`, `1-1-1` and `1.1-1`
/// compare equal. Do not use this as the ordering of a map or set key where
/// such versions must stay distinct.
pub fn compare(left: &Version, right: &Version) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }

    let left_parts = left.parts();
    let right_parts = right.parts();
    let left_numeric = left.numeric_parts();
    let right_numeric = right.numeric_parts();

    let shared = left_parts.len().min(right_parts.len());

    for idx in 0..shared {
        let left_part = &left_parts[idx];
        let right_part = &right_parts[idx];

        if left_part == right_part {
            continue;
        }

        match (left_numeric[idx], right_numeric[idx]) {
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(l), Some(r)) => match l.cmp(&r) {
                Ordering::Equal => continue,
                other => return other,
            },
            (None, None) => {}
        }

        return match (special_meaning(left_part), special_meaning(right_part)) {
            (None, None) => left_part.cmp(right_part),
            (l, r) => l.unwrap_or(0).cmp(&r.unwrap_or(0)),
        };
    }

    if let Some(next) = left_numeric.get(shared) {
        return if next.is_some() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    if let Some(next) = right_numeric.get(shared) {
        return if next.is_some() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    Ordering::Equal
}

pub fn compare_str(left: &str, right: &str) -> Ordering {
    compare(&Version::parse(left), &Version::parse(right))
}

/// Highest version of the set; the first one wins among equally ordered
/// versions.
pub fn max_version<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, Version)> = None;

    for raw in versions {
        let parsed = Version::parse(raw);
        match &best {
            Some((_, current)) if compare(&parsed, current) != Ordering::Greater => {}
            _ => best = Some((raw, parsed)),
        }
    }

    best.map(|(raw, _)| raw)
}

fn special_meaning(part: &str) -> Option<i32> {
    match part.to_ascii_lowercase().as_str() {
        "dev" => Some(-1),
        "rc" => Some(1),
        "snapshot" => Some(2),
        "final" => Some(3),
        "ga" => Some(4),
        "release" => Some(5),
        "sp" => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[&str] = &[
        "",
        "1",
        "1.0",
        "1.0.0",
        "1.0-dev",
        "1.0-rc",
        "1.0-RC",
        "1.0-snapshot",
        "1.0-final",
        "1.0-ga",
        "1.0-release",
        "1.0-sp",
        "1.0-alpha",
        "1.0-beta",
        "1.1.1",
        "1-1-1",
        "1.1-1",
        "1.2.a",
        "1.2.0",
        "1.10",
        "2",
        "a",
        "b.1",
    ];

    #[test]
    fn separator_insensitive() {
        assert_eq!(compare_str("1.1.1", "1-1-1"), Ordering::Equal);
        assert_eq!(compare_str("1.1.1", "1.1-1"), Ordering::Equal);
    }

    #[test]
    fn numeric_beats_text() {
        assert_eq!(compare_str("1.2.0", "1.2.a"), Ordering::Greater);
        assert_eq!(compare_str("1.2.a", "1.2.0"), Ordering::Less);
    }

    #[test]
    fn numeric_parts_compare_by_value() {
        assert_eq!(compare_str("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare_str("1.01", "1.1"), Ordering::Equal);
        assert_eq!(compare_str("2.0.0", "10.0.0"), Ordering::Less);
    }

    #[test]
    fn special_tokens_are_ranked() {
        assert_eq!(compare_str("1.0-dev", "1.0-final"), Ordering::Less);
        assert_eq!(compare_str("1.0-rc", "1.0-ga"), Ordering::Less);
        assert_eq!(compare_str("1.0-release", "1.0-snapshot"), Ordering::Greater);
        assert_eq!(compare_str("1.0-sp", "1.0-release"), Ordering::Greater);
    }

    #[test]
    fn special_tokens_ignore_case() {
        assert_eq!(compare_str("1.0-RC", "1.0-rc"), Ordering::Equal);
        assert_eq!(compare_str("1.0-Final", "1.0-GA"), Ordering::Less);
    }

    #[test]
    fn unknown_words_rank_zero_against_special_tokens() {
        assert_eq!(compare_str("1.0-alpha", "1.0-rc"), Ordering::Less);
        assert_eq!(compare_str("1.0-alpha", "1.0-dev"), Ordering::Greater);
    }

    #[test]
    fn unknown_words_compare_lexically() {
        assert_eq!(compare_str("1.0-alpha", "1.0-beta"), Ordering::Less);
    }

    #[test]
    fn longer_version_depends_on_next_part() {
        assert_eq!(compare_str("1.0.1", "1.0"), Ordering::Greater);
        assert_eq!(compare_str("1.0-beta", "1.0"), Ordering::Less);
        assert_eq!(compare_str("1.0", "1.0.1"), Ordering::Less);
        assert_eq!(compare_str("1.0", "1.0-beta"), Ordering::Greater);
    }

    #[test]
    fn symmetric_over_sample() {
        for a in SAMPLE {
            for b in SAMPLE {
                assert_eq!(
                    compare_str(a, b),
                    compare_str(b, a).reverse(),
                    "compare({a:?}, {b:?})"
                );
            }
        }
    }

    #[test]
    fn transitive_over_sample() {
        for a in SAMPLE {
            for b in SAMPLE {
                for c in SAMPLE {
                    if compare_str(a, b) != Ordering::Greater
                        && compare_str(b, c) != Ordering::Greater
                    {
                        assert_ne!(
                            compare_str(a, c),
                            Ordering::Greater,
                            "{a:?} <= {b:?} <= {c:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn picks_highest_version() {
        let versions = ["1.2.0", "1.10.0", "1.9.9", "1.10.0-rc"];
        assert_eq!(max_version(versions), Some("1.10.0"));
        assert_eq!(max_version(Vec::<&str>::new()), None);
    }
}
