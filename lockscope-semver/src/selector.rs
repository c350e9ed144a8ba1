use crate::Error;
use semver::VersionReq;
use std::fmt;

/// A validated requested-version selector such as `^4.3.0`, `1.x` or
/// `>= 2.1 < 3`.
///
/// Disjunctions (`a || b`) and dist-tags are not selectors and fail
/// validation; callers keep going without a usable version.
#[derive(Debug, Clone)]
pub struct VersionSelector {
    original: String,
    req: VersionReq,
}

impl VersionSelector {
    pub fn validate(raw: &str) -> Result<Self, Error> {
        let trimmed = raw.trim();

        if trimmed.contains("||") {
            return Err(Error::new(
                raw.to_string(),
                "alternative ranges are not a single version selector".to_string(),
            ));
        }

        let normalized = if matches!(trimmed, "" | "*" | "x" | "X") {
            "*".to_string()
        } else if let Some((low, high)) = split_hyphen_range(trimmed) {
            format!(">={low}, <={high}")
        } else {
            pin_bare_versions(&normalize_and_part(trimmed))
        };

        let req = VersionReq::parse(&normalized)
            .map_err(|err| Error::new(raw.to_string(), err.to_string()))?;

        Ok(VersionSelector {
            original: trimmed.to_string(),
            req,
        })
    }

    pub fn normalized(&self) -> &str {
        &self.original
    }

    pub fn matches(&self, version: &str) -> bool {
        match semver::Version::parse(version.trim().trim_start_matches('v')) {
            Ok(parsed) => self.req.matches(&parsed),
            Err(_) => false,
        }
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

fn split_hyphen_range(part: &str) -> Option<(&str, &str)> {
    let tokens: Vec<&str> = part.split_whitespace().collect();

    if tokens.len() == 3 && tokens[1] == "-" {
        Some((tokens[0], tokens[2]))
    } else {
        None
    }
}

fn normalize_and_part(part: &str) -> String {
    let tokens: Vec<&str> = part.split_whitespace().collect();

    if tokens.len() <= 1 {
        return part.to_string();
    }

    let mut result = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let prev = tokens[i - 1];
            if matches!(prev, "=" | ">" | ">=" | "<" | "<=" | "~" | "^") {
                result.push(' ');
            } else {
                result.push_str(", ");
            }
        }

        result.push_str(token);
    }
    result
}

// npm reads a bare `1.2.3` as exact; `VersionReq` would read it as `^1.2.3`.
fn pin_bare_versions(normalized: &str) -> String {
    normalized
        .split(", ")
        .map(|comparator| {
            let core = comparator.split(['-', '+']).next().unwrap_or(comparator);
            let is_bare = core.starts_with(|c: char| c.is_ascii_digit())
                && !core.contains(['x', 'X', '*']);
            if is_bare {
                format!("={comparator}")
            } else {
                comparator.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_caret_text() {
        let selector = VersionSelector::validate(" ^4.3.0 ").unwrap();
        assert_eq!(selector.normalized(), "^4.3.0");
        assert!(selector.matches("4.3.0"));
        assert!(selector.matches("4.9.1"));
        assert!(!selector.matches("5.0.0"));
    }

    #[test]
    fn rejects_alternatives() {
        let err = VersionSelector::validate("^6.5.3 || ^7.4.0").unwrap_err();
        assert_eq!(err.input(), "^6.5.3 || ^7.4.0");
    }

    #[test]
    fn rejects_tags_and_garbage() {
        assert!(VersionSelector::validate("latest").is_err());
        assert!(VersionSelector::validate("not a version").is_err());
    }

    #[test]
    fn normalizes_ge_space() {
        let selector = VersionSelector::validate(">= 4.21.0").unwrap();
        assert!(selector.matches("4.21.0"));
        assert!(!selector.matches("4.20.9"));
    }

    #[test]
    fn space_separated_comparators_are_joined() {
        let selector = VersionSelector::validate(">=2.1.2 <3.0.0").unwrap();
        assert!(selector.matches("2.5.0"));
        assert!(!selector.matches("3.0.0"));
    }

    #[test]
    fn hyphen_range() {
        let selector = VersionSelector::validate("1.0.0 - 2.0.0").unwrap();
        assert!(selector.matches("2.0.0"));
        assert!(!selector.matches("2.0.1"));
    }

    #[test]
    fn bare_version_is_exact() {
        let selector = VersionSelector::validate("4.3.0").unwrap();
        assert!(selector.matches("4.3.0"));
        assert!(!selector.matches("4.3.1"));
    }

    #[test]
    fn wildcards() {
        assert!(VersionSelector::validate("").unwrap().matches("999.0.0"));
        assert!(VersionSelector::validate("*").unwrap().matches("0.0.1"));
        let minor = VersionSelector::validate("1.x").unwrap();
        assert!(minor.matches("1.7.0"));
        assert!(!minor.matches("2.0.0"));
    }

    #[test]
    fn unparseable_candidates_never_match() {
        let selector = VersionSelector::validate("^1").unwrap();
        assert!(!selector.matches("1.0-final"));
    }
}
