pub mod app;
pub mod blog;
pub mod components;
pub mod config;
pub mod contact;
pub mod filter;
pub mod loader;
pub mod pattern;
pub mod project;
pub mod seo;
pub mod util;
