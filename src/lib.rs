//! Backend for the Sarthi Shiksha Roshan Seva Samiti website.

pub mod chat;
pub mod completion;
pub mod config;
pub mod content;
pub mod dialog;
pub mod error;
pub mod i18n;
pub mod inquiry;
pub mod notify;
pub mod response;
pub mod security;
pub mod state;
pub mod store;
pub mod submission;
pub mod team;
pub mod translation;
pub mod web;
