// Campaign Radar: suspicion scoring for scraped social-media posts
//
// This is the library root. Each module corresponds to a stage of the
// batch pipeline or one of the external services it plugs into.

pub mod config;
pub mod language;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod sentiment;
pub mod text;
