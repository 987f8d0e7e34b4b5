pub mod browse;
pub mod config;
pub mod featured;
pub mod watchlist;
