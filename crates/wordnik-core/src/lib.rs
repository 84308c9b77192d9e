pub mod aggregator;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod preprocess;
pub mod session;

pub use aggregator::{Generation, SearchResultAggregator, SearchTicket};
pub use error::FetchError;
pub use fetch::{Completion, FetchResult, spawn_fetches};
pub use session::SearchSession;

#[cfg(test)]
mod tests;
