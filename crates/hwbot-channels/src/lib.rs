//! # hwbot-channels
//!
//! Messaging platform integrations for the homework bot.

pub mod telegram;
