pub mod auth;
mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;
