//! # kil-core
//!
//! Core types, eligibility rules, and error types for Kilmere.
//!
//! This crate provides the foundational types shared across all Kilmere crates:
//! - Member structs for the school population (members, professors, ghosts, pupils)
//! - Closed enums for houses, spell categories, character traits and exam schemes
//! - The spell learn/cast eligibility engine
//! - Fixed-subject exam records
//! - Outcome types reported by every rule-governed operation
//! - Roster file types and the in-memory school built from them
//! - CLI response types
//! - Cross-cutting error types

pub mod eligibility;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod exams;
pub mod outcomes;
pub mod responses;
pub mod roster;
pub mod school;
