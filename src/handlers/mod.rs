pub mod admin;
pub mod funnel;
pub mod homepage;
