pub mod scoring;
pub mod similar;
pub mod summarize;
