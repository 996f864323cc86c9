//! Moderated posting wall: visitors submit posts, an admin approves or
//! rejects them, and only approved posts reach the public pages and the
//! JSON feed.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
