pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod request;
pub mod scroll;
pub mod snapshot;

pub use client::{RenderClient, AD_LIBRARY_LISTING_URL};
pub use document::RenderedDocument;
pub use error::ScraperError;
pub use extract::{extract_ads, extract_document};
pub use pipeline::{collect_trends, run_category, CategoryQuery, DocumentSource};
pub use request::FetchRequest;
pub use scroll::{build_scroll_script, InteractionStep};
