use std::fmt::Display;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RiskboardError {
    DataReadingError(DataReadingError),
    DataProcessingError(DataProcessingError),
}

impl Display for RiskboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskboardError::DataReadingError(e) => write!(f, "{}", e),
            RiskboardError::DataProcessingError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RiskboardError {}

pub type Result<T> = std::result::Result<T, RiskboardError>;

#[derive(Debug)]
pub enum DataReadingError {
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    Csv {
        source: csv::Error,
        path: PathBuf,
    },
    /// Header row could not be parsed at all (not a delimited text file)
    InvalidHeader {
        path: PathBuf,
        detail: String,
    },
    /// File parses as CSV but lacks required columns
    MissingColumns {
        path: PathBuf,
        columns: Vec<String>,
    },
}

impl Display for DataReadingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataReadingError::Io { source, path } => {
                write!(f, "IO error reading {}: {}", path.display(), source)
            }
            DataReadingError::Csv { source, path } => {
                write!(f, "CSV parsing error in {}: {}", path.display(), source)
            }
            DataReadingError::InvalidHeader { path, detail } => {
                write!(f, "Invalid header in {}: {}", path.display(), detail)
            }
            DataReadingError::MissingColumns { path, columns } => {
                write!(
                    f,
                    "{} is missing required columns: {}",
                    path.display(),
                    columns.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for DataReadingError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataProcessingError {
    /// The loaded dataset had no rows, so no dropdown value can be pre-selected
    EmptyTable,
    /// A selection matched no rows (unreachable through the dropdown)
    EmptySelection { solution: String },
}

impl Display for DataProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataProcessingError::EmptyTable => {
                write!(f, "Risk dataset contains no rows")
            }
            DataProcessingError::EmptySelection { solution } => {
                write!(f, "No rows for banking solution '{}'", solution)
            }
        }
    }
}

impl std::error::Error for DataProcessingError {}

impl From<DataReadingError> for RiskboardError {
    fn from(e: DataReadingError) -> Self {
        RiskboardError::DataReadingError(e)
    }
}

impl From<DataProcessingError> for RiskboardError {
    fn from(e: DataProcessingError) -> Self {
        RiskboardError::DataProcessingError(e)
    }
}
