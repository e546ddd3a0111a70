//! Forumite - service layer for a lightweight discussion forum engine
//!
//! This library provides the business-logic services of the forum: category
//! organization, forum permission evaluation, topic favorites/subscriptions,
//! user profiles, avatar/image handling, moderation logging, and background
//! maintenance workers. Persistence is delegated to repository traits; the
//! HTTP layer and storage engine live elsewhere.

pub mod config;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

#[cfg(test)]
pub mod test_support;
