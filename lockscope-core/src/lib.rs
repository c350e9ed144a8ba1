pub mod config;
pub mod console;
pub mod error;
pub mod lockfile;
pub mod operations;
pub mod project;
pub mod resolve;

pub use config::LockscopeConfig;
pub use error::LockscopeError;
pub use lockfile::PackageLock;
pub use project::{Manifest, Project};
pub use resolve::{Dependency, ResolutionResult, ResolvedDependency};

pub type Result<T> = std::result::Result<T, LockscopeError>;
