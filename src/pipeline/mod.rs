// Fetch pipeline: search -> clean -> classify.

pub mod fetch;
