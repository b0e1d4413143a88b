//! CLI subcommands

pub mod effects;
pub mod list;
pub mod new;
pub mod show;
pub mod sitemap;
