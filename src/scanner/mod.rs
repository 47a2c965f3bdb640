pub mod aggregate;

pub use aggregate::{aggregate, aggregate_directory, parse_group, Aggregation};
