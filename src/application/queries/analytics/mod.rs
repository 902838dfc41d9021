// src/application/queries/analytics/mod.rs
mod activity;
mod content;
mod service;
mod statistics;

pub use service::AnalyticsQueryService;
pub use statistics::published_percentage;
