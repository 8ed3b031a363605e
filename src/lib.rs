//! Foglio: a blog publishing core.
//!
//! Two pure components do the real work: the listing pipeline
//! ([`application::listing`]) and the markup renderer
//! ([`application::render`]). A catalog service composes them over a
//! read-only article source. Mock in-memory data stands in for a real
//! backend; presentation maps rendered nodes to HTML.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
