pub mod catalog;
pub mod link;
pub mod mood;
