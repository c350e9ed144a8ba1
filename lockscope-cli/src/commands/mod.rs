pub mod compare;
pub mod insight;
pub mod projects;
pub mod upgrade;
