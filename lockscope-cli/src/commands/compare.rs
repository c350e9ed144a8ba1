use anyhow::Result;
use clap::Args;
use lockscope_semver::{Version, compare, max_version};
use std::cmp::Ordering;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Versions to order, e.g. `1.0-rc 1.0-ga 1.0`
    #[arg(num_args = 2.., required = true)]
    pub versions: Vec<String>,
}

pub fn run(args: CompareArgs) -> Result<()> {
    let mut parsed: Vec<Version> = args.versions.iter().map(|v| Version::parse(v)).collect();
    parsed.sort_by(compare);

    println!("{}", chain(&parsed));

    if let Some(highest) = max_version(args.versions.iter().map(String::as_str)) {
        println!("highest: {}", highest);
    }

    Ok(())
}

fn chain(sorted: &[Version]) -> String {
    let mut line = String::new();

    for (idx, version) in sorted.iter().enumerate() {
        if idx > 0 {
            let symbol = match compare(&sorted[idx - 1], version) {
                Ordering::Equal => " = ",
                _ => " < ",
            };
            line.push_str(symbol);
        }
        line.push_str(version.as_str());
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(raw: &[&str]) -> Vec<Version> {
        let mut parsed: Vec<Version> = raw.iter().map(|v| Version::parse(v)).collect();
        parsed.sort_by(compare);
        parsed
    }

    #[test]
    fn chains_in_ascending_order() {
        assert_eq!(
            chain(&sorted(&["1.0", "1.0-ga", "1.0-rc"])),
            "1.0-rc < 1.0-ga < 1.0"
        );
    }

    #[test]
    fn marks_equal_versions() {
        assert_eq!(chain(&sorted(&["1.1.1", "1-1-1"])), "1.1.1 = 1-1-1");
    }
}
