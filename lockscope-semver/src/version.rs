use std::fmt;

/// A version string split into comparable parts.
///
/// Parts are the maximal ASCII alphanumeric runs of the raw text; separators
/// are dropped. Equality is equality of the raw text, so `1.1.1` and `1-1-1`
/// are different versions even though [`crate::compare`] orders them equal.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    parts: Vec<String>,
    numeric_parts: Vec<Option<u64>>,
}

impl Version {
    pub fn parse(raw: &str) -> Self {
        let mut parts = Vec::new();
        let mut numeric_parts = Vec::new();

        for part in raw.split(|c: char| !c.is_ascii_alphanumeric()) {
            if part.is_empty() {
                continue;
            }

            numeric_parts.push(numeric_value(part));
            parts.push(part.to_string());
        }

        Version {
            raw: raw.to_string(),
            parts,
            numeric_parts,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn numeric_parts(&self) -> &[Option<u64>] {
        &self.numeric_parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

// Digit runs too large for u64 are left as text.
fn numeric_value(part: &str) -> Option<u64> {
    if part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Version {}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Version::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separators() {
        let version = Version::parse("1.2.3-rc.1+build");
        assert_eq!(version.parts(), ["1", "2", "3", "rc", "1", "build"]);
        assert_eq!(
            version.numeric_parts(),
            [Some(1), Some(2), Some(3), None, Some(1), None]
        );
    }

    #[test]
    fn keeps_mixed_runs_together() {
        let version = Version::parse("2.0b1");
        assert_eq!(version.parts(), ["2", "0b1"]);
        assert_eq!(version.numeric_parts(), [Some(2), None]);
    }

    #[test]
    fn empty_and_separator_only_input() {
        assert!(Version::parse("").is_empty());
        assert!(Version::parse("..--").is_empty());
    }

    #[test]
    fn overflowing_digits_are_text() {
        let version = Version::parse("1.99999999999999999999999");
        assert_eq!(version.numeric_parts(), [Some(1), None]);
    }

    #[test]
    fn equality_uses_raw_text() {
        assert_eq!(Version::parse("1.1.1"), Version::parse("1.1.1"));
        assert_ne!(Version::parse("1.1.1"), Version::parse("1-1-1"));
    }
}
