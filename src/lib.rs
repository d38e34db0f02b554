// Murmur: sentiment snapshot for X/Twitter search results
//
// This is the library root. Each module corresponds to one stage of the
// fetch -> clean -> classify -> report pipeline.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod sentiment;
