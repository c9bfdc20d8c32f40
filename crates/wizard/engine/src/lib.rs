//! Wizard Runtime
//!
//! The wizard engine walks users through a theme's questionnaire and turns
//! the collected answers into a risk verdict.
//!
//! # Key Principle
//!
//! **Assessment is a pure function of the answer set.** Engines read the
//! raw answers (regardless of what is currently visible), never mutate
//! them, never fail on missing or malformed input, and never touch storage.
//! Persisting answers and verdicts is the host's job.
//!
//! # Architecture
//!
//! - [`WizardNavigator`]: state machine over the visible steps of a schema
//! - [`WizardSession`]: one user's answer set plus navigator position
//! - [`RiskEngine`]: per-theme rule set producing a [`Verdict`]
//! - [`ThemeRegistry`]: schema and optional engine per [`Theme`]
//! - [`legal`]: static legal-citation and abbreviation tables
//!
//! # Example
//!
//! ```rust
//! use wizard_engine::ThemeRegistry;
//! use wizard_types::{AnswerSet, RiskLevel, Theme};
//!
//! let registry = ThemeRegistry::builtin().unwrap();
//!
//! let answers = AnswerSet::new()
//!     .with("vib-type", vec!["hav"])
//!     .with("vib-duration", "long")
//!     .with("vib-complaints", "yes")
//!     .with("vib-measures-existing", vec!["none"]);
//!
//! let verdict = registry.assess(Theme::Vibration, &answers).unwrap();
//! assert_eq!(verdict.overall_level, RiskLevel::High);
//! assert_eq!(verdict.recommendations[0].priority, 1);
//! ```
//!
//! [`Verdict`]: wizard_types::Verdict
//! [`Theme`]: wizard_types::Theme

#![deny(unsafe_code)]

pub mod engine;
pub mod legal;
pub mod navigator;
pub mod registry;
pub mod session;
pub mod themes;

// Re-export main types
pub use engine::{RiskEngine, VerdictBuilder};
pub use navigator::{Position, Progress, WizardNavigator};
pub use registry::ThemeRegistry;
pub use session::{WizardSession, WizardSessionId};
pub use themes::{SoundEngine, VibrationEngine};
