pub mod opts;
pub mod pipeline;
