// Post search — the PostSearchProvider trait and the X API v2 client.
//
// The fetch pipeline depends only on the trait. XSearchClient is the real
// implementation; tests substitute in-memory fakes.

pub mod client;
pub mod traits;
