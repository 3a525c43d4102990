pub mod markdown;
pub mod providers;
pub mod wiki;

pub use wiki::WikiImageFetcher;
