//! Modules with generic logic used by several modules.
//!
//! - [`clock`]: Times source for the recorded hits.
pub mod clock;
