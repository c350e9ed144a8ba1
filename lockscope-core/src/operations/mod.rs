pub mod insight;
pub mod projects;
pub mod upgrade;

pub use insight::{DependencyScope, InsightOptions, InsightRow, insight, insight_with};
pub use projects::{ProjectSummary, find_projects};
pub use upgrade::{UpgradeChange, UpgradeOptions, upgrade, upgrade_manifest_text};
