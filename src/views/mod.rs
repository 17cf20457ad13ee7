pub mod admin;
pub mod editor;
pub mod funnel;
pub mod homepage;
pub mod layout;

// Re-export commonly used functions from layout
pub use layout::{funnel_page, page};
