pub mod classify;
pub mod fetcher;
pub mod markdown;
pub mod notice;
pub mod parser;
pub mod vault;
