//! Static page description served to the browser client.
//!
//! The layout names every element the client has to build: the page title,
//! the solution dropdown with its pre-selected value, and the four output
//! regions keyed to the fields of a projected [`SolutionView`].
//!
//! [`SolutionView`]: crate::views::SolutionView

use serde::{
    Deserialize,
    Serialize,
};

use crate::models::RiskTable;

pub const PAGE_TITLE: &str = "Operational Resilience Risk Analysis - Banking Solutions";

/// Everything the client needs to render the page shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub dropdown: Dropdown,
    pub outputs: Vec<OutputRegion>,
}

/// The single selector on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: String,
    pub label: String,
    /// Distinct solutions in table order.
    pub options: Vec<String>,
    /// Pre-selected option, always the first solution in the table.
    pub value: String,
    pub clearable: bool,
}

/// One output slot below the dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRegion {
    pub id: String,
    pub heading: String,
    pub kind: RegionKind,
    /// Field of the projected view that fills this region.
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Text,
    Graph,
}

impl DashboardLayout {
    /// Builds the layout for a loaded table.
    ///
    /// The dropdown is pre-selected to the first solution so the page can
    /// render a complete dashboard before any user interaction.
    pub fn from_table(table: &RiskTable) -> Self {
        let solutions = table.solutions().to_vec();
        // RiskTable construction rejects empty tables, so a first solution exists.
        let value = solutions[0].clone();
        Self {
            title: PAGE_TITLE.to_string(),
            dropdown: Dropdown {
                id: "solution-dropdown".to_string(),
                label: "Select Banking Solution:".to_string(),
                options: solutions,
                value,
                clearable: false,
            },
            outputs: vec![
                OutputRegion {
                    id: "solution-risk-score".to_string(),
                    heading: "Solution Risk Score".to_string(),
                    kind: RegionKind::Text,
                    source: "summary".to_string(),
                },
                OutputRegion {
                    id: "risk-score-dist".to_string(),
                    heading: "Risk Score Distribution".to_string(),
                    kind: RegionKind::Graph,
                    source: "distribution".to_string(),
                },
                OutputRegion {
                    id: "mttr-risk-scatter".to_string(),
                    heading: "MTTR vs Risk Score".to_string(),
                    kind: RegionKind::Graph,
                    source: "scatter".to_string(),
                },
                OutputRegion {
                    id: "risk-score-bar".to_string(),
                    heading: "Risk Score by Application".to_string(),
                    kind: RegionKind::Graph,
                    source: "bar".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskRecord;

    fn record(solution: &str, app: &str) -> RiskRecord {
        RiskRecord {
            banking_solution: solution.to_string(),
            application_id: app.to_string(),
            risk_score: 10.0,
            solution_risk_score: 50.0,
            mttr_hrs: 2.0,
        }
    }

    fn table() -> RiskTable {
        RiskTable::from_records(vec![
            record("SolutionA", "App1"),
            record("SolutionA", "App2"),
            record("SolutionB", "App3"),
        ])
        .unwrap()
    }

    #[test]
    fn test_dropdown_options_follow_table_order() {
        let layout = DashboardLayout::from_table(&table());
        assert_eq!(layout.dropdown.options, vec!["SolutionA", "SolutionB"]);
        assert_eq!(layout.dropdown.value, "SolutionA");
        assert!(!layout.dropdown.clearable);
    }

    #[test]
    fn test_output_regions_cover_all_view_fields() {
        let layout = DashboardLayout::from_table(&table());
        let sources: Vec<&str> = layout.outputs.iter().map(|o| o.source.as_str()).collect();
        assert_eq!(sources, vec!["summary", "distribution", "scatter", "bar"]);
        assert_eq!(layout.outputs[0].kind, RegionKind::Text);
        assert!(layout.outputs[1..]
            .iter()
            .all(|o| o.kind == RegionKind::Graph));
    }

    #[test]
    fn test_layout_serialization_shape() {
        let layout = DashboardLayout::from_table(&table());
        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(value["title"], PAGE_TITLE);
        assert_eq!(value["dropdown"]["id"], "solution-dropdown");
        assert_eq!(value["outputs"][0]["kind"], "text");
        assert_eq!(value["outputs"][1]["kind"], "graph");
        assert_eq!(value["outputs"][3]["id"], "risk-score-bar");
    }
}
