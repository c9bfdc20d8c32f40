//! Wizard Domain Types
//!
//! This crate defines the domain types for hazard wizards: multi-step
//! questionnaires about one workplace hazard theme (sound, vibration,
//! climate, ...) and the risk verdicts computed from their answers.
//!
//! # Key Concepts
//!
//! - **Schema**: an immutable, serializable description of a wizard:
//!   ordered [`Step`]s holding [`Question`]s, each optionally guarded by a
//!   declarative visibility [`Condition`].
//! - **Answer set**: one flat mapping from question id to a scalar or
//!   multi-valued [`AnswerValue`]. Question ids are unique across the whole
//!   wizard so answers of unrelated questions never collide.
//! - **Verdict**: the output of a theme's risk engine: ordered
//!   [`Finding`]s, priority-sorted [`Recommendation`]s, data gaps, and an
//!   overall [`RiskLevel`] aggregated over all findings.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime behavior beyond validation and
//! condition evaluation. All types implement `Clone`, `Debug`, `Serialize`,
//! `Deserialize`. IDs use the newtype pattern and implement `Display`.

#![deny(unsafe_code)]

mod answer;
mod condition;
mod errors;
mod risk;
mod schema;
mod theme;
mod verdict;

pub use answer::*;
pub use condition::*;
pub use errors::*;
pub use risk::*;
pub use schema::*;
pub use theme::*;
pub use verdict::*;
