// Domain layer: puzzle models and the per-day parsing/aggregation rules.

pub mod day01;
pub mod day02;
pub mod model;
