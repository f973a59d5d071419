use crate::errors::DataProcessingError;
use serde::Deserialize;

/// A single row of the banking-solution risk dataset.
///
/// Field names follow the CSV headers of the source file; the renames keep
/// the on-disk column names (spaces and all) out of the Rust identifiers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskRecord {
    #[serde(rename = "Banking Solution")]
    pub banking_solution: String,
    #[serde(rename = "Application_ID")]
    pub application_id: String,
    #[serde(rename = "Risk Score")]
    pub risk_score: f64,
    #[serde(rename = "Solution Risk Score")]
    pub solution_risk_score: f64,
    #[serde(rename = "MTTR (hrs)")]
    pub mttr_hrs: f64,
}

/// The full dataset, loaded once and immutable for the process lifetime.
///
/// Row order is file order. The distinct banking solutions are computed at
/// construction (first-seen order) because the dropdown options and its
/// pre-selected value are derived from them.
#[derive(Debug, Clone)]
pub struct RiskTable {
    records: Vec<RiskRecord>,
    solutions: Vec<String>,
}

impl RiskTable {
    /// Build a table from rows in file order.
    ///
    /// Rejects an empty dataset: with no rows there is no first solution to
    /// pre-select and every projection would fail.
    pub fn from_records(records: Vec<RiskRecord>) -> Result<Self, DataProcessingError> {
        if records.is_empty() {
            return Err(DataProcessingError::EmptyTable);
        }
        let mut solutions: Vec<String> = Vec::new();
        for record in &records {
            if !solutions.contains(&record.banking_solution) {
                solutions.push(record.banking_solution.clone());
            }
        }
        Ok(Self { records, solutions })
    }

    pub fn records(&self) -> &[RiskRecord] {
        &self.records
    }

    /// Distinct `Banking Solution` values in first-seen file order.
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Rows whose banking solution equals `solution`, in file order.
    pub fn filter_solution(&self, solution: &str) -> Vec<&RiskRecord> {
        self.records
            .iter()
            .filter(|r| r.banking_solution == solution)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(solution: &str, app: &str, risk: f64, solution_risk: f64, mttr: f64) -> RiskRecord {
        RiskRecord {
            banking_solution: solution.to_string(),
            application_id: app.to_string(),
            risk_score: risk,
            solution_risk_score: solution_risk,
            mttr_hrs: mttr,
        }
    }

    #[test]
    fn test_solutions_keep_first_seen_order() {
        let table = RiskTable::from_records(vec![
            record("Payments", "App1", 10.0, 50.0, 2.0),
            record("Lending", "App2", 20.0, 60.0, 3.0),
            record("Payments", "App3", 30.0, 50.0, 1.0),
            record("Treasury", "App4", 40.0, 70.0, 4.0),
        ])
        .unwrap();

        assert_eq!(table.solutions(), &["Payments", "Lending", "Treasury"]);
    }

    #[test]
    fn test_filter_preserves_row_order() {
        let table = RiskTable::from_records(vec![
            record("Payments", "App1", 10.0, 50.0, 2.0),
            record("Lending", "App2", 20.0, 60.0, 3.0),
            record("Payments", "App3", 30.0, 50.0, 1.0),
        ])
        .unwrap();

        let filtered = table.filter_solution("Payments");
        let ids: Vec<&str> = filtered.iter().map(|r| r.application_id.as_str()).collect();
        assert_eq!(ids, vec!["App1", "App3"]);
    }

    #[test]
    fn test_filter_unknown_solution_is_empty() {
        let table =
            RiskTable::from_records(vec![record("Payments", "App1", 10.0, 50.0, 2.0)]).unwrap();
        assert!(table.filter_solution("Nope").is_empty());
    }

    #[test]
    fn test_every_solution_filters_to_uniform_nonempty_subset() {
        let table = RiskTable::from_records(vec![
            record("Payments", "App1", 10.0, 50.0, 2.0),
            record("Lending", "App2", 20.0, 60.0, 3.0),
            record("Payments", "App3", 30.0, 50.0, 1.0),
        ])
        .unwrap();

        for solution in table.solutions() {
            let filtered = table.filter_solution(solution);
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|r| &r.banking_solution == solution));
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = RiskTable::from_records(Vec::new());
        assert_eq!(result.unwrap_err(), DataProcessingError::EmptyTable);
    }
}
