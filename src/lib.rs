//! gbt - a terminal browser for local git branches
//!
//! gbt lists the branches of a repository, shows the recent commits of the
//! selected branch's upstream, and lets you check out or delete branches
//! without leaving the keyboard.

pub mod app;
pub mod config;
pub mod git;
pub mod paths;
pub mod tui;

pub use app::App;
pub use config::Config;
