//! # reel-core
//!
//! Core types and error types for reel.
//!
//! This crate provides the foundational types shared across all reel crates:
//! - Compliance decisions and engine (degradation tier) labels
//! - Remote task status with terminal-state classification
//! - Entity structs for indexes, tasks, and compliance reports
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{
    AnalysisIndex, AnalysisTask, ComplianceReport, IndexModel, PolicyChecks, VIDEO_ID_NOT_AVAILABLE,
};
pub use enums::{Decision, Engine, TaskStatus};
pub use errors::CoreError;
