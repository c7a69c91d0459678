//! Scopus Author Search
//!
//! A client for the Elsevier Scopus author search API with a local,
//! query-keyed JSON cache.
//!
//! # Features
//!
//! - **Paginated**: pages through result sets `count` entries at a time
//! - **Bounded**: refuses result sets larger than `max_entries`
//! - **Cached**: raw results stored under `~/.scopus/author_search/<md5(query)>`
//! - **Typed**: raw entries normalized into [`AuthorRecord`]s
//!
//! # Example
//!
//! ```no_run
//! use scopus_search::{AuthorSearch, Config, ScopusClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ScopusClient::new(config)?;
//!
//!     let search = AuthorSearch::new(
//!         &client,
//!         "authlast(Einstein) and authfirst(Albert)",
//!         SearchOptions::default(),
//!     )
//!     .await?;
//!
//!     for author in search.authors()? {
//!         println!("{author}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod author_search;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod search;

pub use author_search::{AuthorSearch, SearchOptions};
pub use cache::{QueryCache, cache_key};
pub use client::ScopusClient;
pub use config::Config;
pub use error::{ClientError, SearchError};
pub use models::AuthorRecord;
