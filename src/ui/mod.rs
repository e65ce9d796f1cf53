pub mod markdown;
pub mod panels;
