//! # pr-merger
//!
//! Merges a GitHub pull request when someone comments `/merge` on it.
//!
//! The library holds the decision logic: who may merge ([`policy`]), whether
//! a blocked PR is approved first and how the merge is performed
//! ([`merge`]), what the merge commit says ([`message`]) and what is posted
//! back when something goes wrong ([`classify`]). GitHub access sits behind
//! the traits in [`platform`].

pub mod auth;
pub mod classify;
pub mod config;
pub mod error;
pub mod merge;
pub mod message;
pub mod platform;
pub mod policy;
pub mod types;
