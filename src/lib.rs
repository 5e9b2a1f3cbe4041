//! LeetCode User Discovery API Library
//!
//! This library backs an HTTP service that discovers LeetCode users by
//! probing heuristically generated username candidates against LeetCode's
//! public GraphQL endpoint, and relays full public profiles for known
//! usernames.
//!
//! # Modules
//!
//! - `candidates`: Candidate username generation from a search keyword.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `leetcode_client`: LeetCode GraphQL transport client.
//! - `models`: Wire and upstream data models.
//! - `services`: Search fan-out and profile lookup logic.

pub mod candidates;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod leetcode_client;
pub mod models;
pub mod services;
