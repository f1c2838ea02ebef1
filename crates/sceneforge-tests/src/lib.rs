//! Integration test crate for SceneForge.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the scene model and the editor to verify they work together.

#[cfg(test)]
mod editing;

#[cfg(test)]
mod gestures;

#[cfg(test)]
mod export;
