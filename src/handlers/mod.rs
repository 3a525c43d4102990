pub mod generate;
pub mod pages;
pub mod wiki_images;
