pub mod client;
pub mod feed;

pub use client::{CrawlClient, FetchOutcome};
pub use feed::fetch_article_links;
