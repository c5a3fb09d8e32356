//! Error types for loading inputs, writing schedules and running the pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Failed to extract text from PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("XLSX writer error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("No members found in roster {path}")]
    EmptyRoster { path: PathBuf },

    /// No date was recognized in any of the documents
    #[error("No meetings found in {documents} document(s)")]
    NoMeetingsFound { documents: usize },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
