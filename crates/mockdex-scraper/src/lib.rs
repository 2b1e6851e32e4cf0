pub mod client;
pub mod dom;
pub mod error;
pub mod extract;
pub mod feedback;
pub mod fields;
pub mod keywords;
pub mod links;
pub mod slug;
pub mod summary;
pub mod text;
pub mod transcript;

pub use client::PageClient;
pub use error::ScrapeError;
pub use extract::extract_record;
pub use links::{filter_links, interview_id_from_url};
pub use slug::{parse_slug, SlugGuess};
