//! Meeting transcript summarizer.
//!
//! Upload a transcript (text, PDF or DOCX), get a summary, a list of action
//! items with normalized deadlines and a downloadable PDF report.

pub mod api;
pub mod config;
pub mod error;
pub mod intelligence;
pub mod llm;
pub mod models;
pub mod processing;
pub mod report;
pub mod services;
