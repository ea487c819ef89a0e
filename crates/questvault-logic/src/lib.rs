//! Pure progression and path math for QuestVault.
//!
//! This crate contains the logic that is independent of the state container
//! and of any rendering or storage runtime. Functions take plain data and
//! return results, making them unit-testable and portable across the session
//! store, headless harnesses, and any future renderer.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`path`] | Centripetal Catmull-Rom curve mapping progress to a pose |
//! | [`progress`] | Unit-interval clamping, completion steps, goal ratios |
//! | [`validate`] | Shape predicates for snapshot field recovery |
//! | [`vec3`] | Minimal 3D vector used by the path curve |

pub mod path;
pub mod progress;
pub mod validate;
pub mod vec3;
