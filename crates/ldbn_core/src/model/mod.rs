//! Domain model for users, assignments and comments.
//!
//! # Responsibility
//! - Define the in-memory shapes produced by repository reads.
//! - Own write-side validation rules for assignments.
//!
//! # Invariants
//! - Every read builds a fresh object graph; nothing here is cached or shared.
//! - A persisted entity has a positive `id`; `0` marks "not stored yet".

pub mod assignment;
pub mod comment;
pub mod user;
