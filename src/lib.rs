// Kudos: influence ranking for Twitter archives
//
// This is the library root. Each module corresponds to a stage of the
// analysis: loading posts, classifying and scoring them, reporting.

pub mod analysis;
pub mod config;
pub mod output;
pub mod twitter;
