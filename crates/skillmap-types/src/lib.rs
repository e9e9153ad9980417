//! Shared domain types for SkillMap.
//!
//! This crate contains the core domain types used across the SkillMap
//! backend: courses, interaction memory records, roadmap request/response
//! shapes, LLM types, and their associated error enums.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod course;
pub mod error;
pub mod llm;
pub mod memory;
pub mod roadmap;
