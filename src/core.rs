pub mod aggregator;
pub mod bucket;
pub mod category;
pub mod dashboard;
pub mod filter;
pub mod fixture;
pub mod granularity;
pub mod schedule;
pub mod series;
pub mod totals;
