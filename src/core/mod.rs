pub mod etl;
pub mod pipeline;
pub mod report;
