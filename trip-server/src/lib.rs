//! Bus trip planner server.
//!
//! A web application that answers: "how do I get from here to there by
//! bus?" using a static catalog of stops and the lines that serve them.

pub mod catalog;
pub mod domain;
pub mod planner;
pub mod server_config;
pub mod web;
