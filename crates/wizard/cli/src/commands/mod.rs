//! CLI command implementations

pub mod assess;
pub mod glossary;
pub mod schema;
pub mod themes;
pub mod walk;
