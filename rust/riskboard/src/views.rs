//! Projection of one selected solution into its dashboard outputs.

use serde::Serialize;
use tracing::debug;

use crate::errors::DataProcessingError;
use crate::figures::{
    AxisSpec,
    AxisValues,
    Figure,
    FigureLayout,
    Marker,
    Trace,
};
use crate::models::RiskTable;

/// The four outputs rendered for one selected solution.
///
/// `summary` is display-ready text; the three figures are Plotly payloads
/// the client hands to the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionView {
    pub summary: String,
    pub distribution: Figure,
    pub scatter: Figure,
    pub bar: Figure,
}

impl SolutionView {
    /// Projects the rows of `solution` into summary text and figures.
    ///
    /// Row order in every figure follows table order, so reprojecting the
    /// same selection always yields an identical view. Unknown solutions
    /// (or a stale selection after a data swap) report
    /// [`DataProcessingError::EmptySelection`] instead of producing an
    /// empty dashboard.
    pub fn project(table: &RiskTable, solution: &str) -> Result<Self, DataProcessingError> {
        let rows = table.filter_solution(solution);
        let first = rows
            .first()
            .ok_or_else(|| DataProcessingError::EmptySelection {
                solution: solution.to_string(),
            })?;
        debug!(
            solution = solution,
            rows = rows.len(),
            "Projecting solution view"
        );

        let risk_scores: Vec<f64> = rows.iter().map(|r| r.risk_score).collect();
        let mttr_hours: Vec<f64> = rows.iter().map(|r| r.mttr_hrs).collect();
        let application_ids: Vec<String> =
            rows.iter().map(|r| r.application_id.clone()).collect();

        let summary = format!(
            "Overall Risk Score for {}: {:.2}",
            solution, first.solution_risk_score
        );

        let distribution = Figure {
            data: vec![Trace {
                x: Some(AxisValues::Numbers(risk_scores.clone())),
                trace_type: Some("histogram".to_string()),
                opacity: Some(0.7),
                ..Trace::default()
            }],
            layout: FigureLayout {
                xaxis: AxisSpec::titled("Risk Score"),
                yaxis: AxisSpec::titled("Frequency"),
            },
        };

        let scatter = Figure {
            data: vec![Trace {
                x: Some(AxisValues::Numbers(mttr_hours)),
                y: Some(AxisValues::Numbers(risk_scores.clone())),
                mode: Some("markers".to_string()),
                marker: Some(Marker { size: 10 }),
                ..Trace::default()
            }],
            layout: FigureLayout {
                xaxis: AxisSpec::titled("MTTR (hrs)"),
                yaxis: AxisSpec::titled("Risk Score"),
            },
        };

        let bar = Figure {
            data: vec![Trace {
                x: Some(AxisValues::Labels(application_ids)),
                y: Some(AxisValues::Numbers(risk_scores)),
                trace_type: Some("bar".to_string()),
                ..Trace::default()
            }],
            layout: FigureLayout {
                xaxis: AxisSpec::titled_with_tickangle("Application ID", -45.0),
                yaxis: AxisSpec::titled("Risk Score"),
            },
        };

        Ok(Self {
            summary,
            distribution,
            scatter,
            bar,
        })
    }
}
