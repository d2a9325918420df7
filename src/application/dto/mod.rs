//! # Data Transfer Objects

pub mod sales_query;
