//! Application layer for the Aiyo navigation core.
//!
//! This crate provides the use case that coordinates the catalog,
//! classifier and matcher into a single voice-command resolution.

pub mod navigation_usecase;

pub use navigation_usecase::VoiceNavigationService;
