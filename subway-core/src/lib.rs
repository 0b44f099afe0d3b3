//! Subway network core.
//!
//! A library that answers: "what does this network look like, what is
//! the shortest way across it, and what does the trip cost?"

pub mod domain;
pub mod fare;
pub mod repository;
pub mod routing;
