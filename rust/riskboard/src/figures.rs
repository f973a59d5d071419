//! Chart payloads in the Plotly figure shape (`{"data": [...], "layout": {...}}`).
//!
//! These serialize to exactly what the browser-side Plotly renderer expects,
//! so the types only model the handful of attributes this dashboard uses.
//! Optional attributes are skipped when unset rather than serialized as null.

use serde::{
    Deserialize,
    Serialize,
};

/// One renderable chart: traces plus its axis layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// A single data trace within a figure.
///
/// Plotly infers a scatter trace when `type` is absent, which is why
/// `trace_type` is optional: the marker scatter relies on that default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisValues>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Axis-aligned values of a trace: numeric for measures, labels for categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValues {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Numbers(v) => v.len(),
            AxisValues::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub xaxis: AxisSpec,
    pub yaxis: AxisSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<f64>,
}

impl AxisSpec {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            tickangle: None,
        }
    }

    pub fn titled_with_tickangle(title: &str, tickangle: f64) -> Self {
        Self {
            title: title.to_string(),
            tickangle: Some(tickangle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_trace_serializes_plotly_fields() {
        let figure = Figure {
            data: vec![Trace {
                x: Some(AxisValues::Numbers(vec![10.0, 20.0])),
                trace_type: Some("histogram".to_string()),
                opacity: Some(0.7),
                ..Trace::default()
            }],
            layout: FigureLayout {
                xaxis: AxisSpec::titled("Risk Score"),
                yaxis: AxisSpec::titled("Frequency"),
            },
        };

        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["data"][0]["type"], "histogram");
        assert_eq!(value["data"][0]["opacity"], 0.7);
        assert_eq!(value["data"][0]["x"][1], 20.0);
        assert_eq!(value["layout"]["xaxis"]["title"], "Risk Score");
        assert_eq!(value["layout"]["yaxis"]["title"], "Frequency");
    }

    #[test]
    fn test_unset_attributes_are_not_serialized() {
        let trace = Trace {
            x: Some(AxisValues::Numbers(vec![1.0])),
            ..Trace::default()
        };

        let value = serde_json::to_value(&trace).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("x"));
        assert!(!object.contains_key("y"));
        assert!(!object.contains_key("type"));
        assert!(!object.contains_key("mode"));
        assert!(!object.contains_key("marker"));
        assert!(!object.contains_key("opacity"));
    }

    #[test]
    fn test_categorical_axis_serializes_as_strings() {
        let values = AxisValues::Labels(vec!["App1".to_string(), "App2".to_string()]);
        let value = serde_json::to_value(&values).unwrap();
        assert_eq!(value, serde_json::json!(["App1", "App2"]));
    }

    #[test]
    fn test_tickangle_serialized_only_when_set() {
        let plain = serde_json::to_value(AxisSpec::titled("Risk Score")).unwrap();
        assert!(!plain.as_object().unwrap().contains_key("tickangle"));

        let angled =
            serde_json::to_value(AxisSpec::titled_with_tickangle("Application ID", -45.0)).unwrap();
        assert_eq!(angled["tickangle"], -45.0);
    }

    #[test]
    fn test_figure_json_roundtrip() {
        let figure = Figure {
            data: vec![Trace {
                x: Some(AxisValues::Labels(vec!["App1".to_string()])),
                y: Some(AxisValues::Numbers(vec![10.0])),
                trace_type: Some("bar".to_string()),
                ..Trace::default()
            }],
            layout: FigureLayout {
                xaxis: AxisSpec::titled_with_tickangle("Application ID", -45.0),
                yaxis: AxisSpec::titled("Risk Score"),
            },
        };

        let json = serde_json::to_string(&figure).unwrap();
        let back: Figure = serde_json::from_str(&json).unwrap();
        assert_eq!(figure, back);
    }
}
