pub mod activity;
pub mod caption;
pub mod tour;
