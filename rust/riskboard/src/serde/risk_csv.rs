use std::path::Path;

use tracing::{
    error,
    info,
};

use crate::errors::{
    DataReadingError,
    Result,
};
use crate::models::{
    RiskRecord,
    RiskTable,
};

/// Columns every risk scoring export has to carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Banking Solution",
    "Application_ID",
    "Risk Score",
    "Solution Risk Score",
    "MTTR (hrs)",
];

/// Check that a file looks like a risk scoring CSV by inspecting its header row.
///
/// Returns `Ok(())` when all required columns are present, or `Err` with the
/// reason (unreadable, unparsable header, or the list of missing columns).
pub fn sniff_risk_csv<T: AsRef<Path>>(file: T) -> Result<()> {
    let file_handle =
        std::fs::File::open(file.as_ref()).map_err(|source| DataReadingError::Io {
            source,
            path: file.as_ref().to_path_buf(),
        })?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(file_handle);

    let headers = rdr
        .headers()
        .map_err(|e| DataReadingError::InvalidHeader {
            path: file.as_ref().to_path_buf(),
            detail: format!("Failed to parse CSV headers: {}", e),
        })?;

    let columns: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !columns.contains(&col.to_string()))
        .map(|s| s.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataReadingError::MissingColumns {
            path: file.as_ref().to_path_buf(),
            columns: missing,
        }
        .into())
    }
}

/// Read a risk scoring CSV into a [`RiskTable`].
///
/// The header is sniffed first so a wrong file reports its missing columns
/// instead of an opaque deserialization failure on the first row. Any row
/// that fails to parse (for example a non-numeric score) aborts the load;
/// a half-loaded dashboard would silently misreport the portfolio.
pub fn read_risk_csv<T: AsRef<Path>>(file: T) -> Result<RiskTable> {
    sniff_risk_csv(file.as_ref())?;

    let file_handle =
        std::fs::File::open(file.as_ref()).map_err(|source| DataReadingError::Io {
            source,
            path: file.as_ref().to_path_buf(),
        })?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(file_handle);

    info!("Reading risk records from {}", file.as_ref().display());

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: RiskRecord = result.map_err(|source| {
            error!("Failed to parse risk record: {:?}", source);
            DataReadingError::Csv {
                source,
                path: file.as_ref().to_path_buf(),
            }
        })?;
        records.push(record);
    }

    let table = RiskTable::from_records(records)?;
    info!(
        "Loaded {} records across {} banking solutions",
        table.len(),
        table.solutions().len()
    );
    Ok(table)
}
