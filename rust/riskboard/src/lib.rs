#![doc = include_str!("../README.md")]

// Re-export main structures
pub use crate::figures::{
    AxisSpec,
    AxisValues,
    Figure,
    FigureLayout,
    Marker,
    Trace,
};
pub use crate::layout::{
    DashboardLayout,
    Dropdown,
    OutputRegion,
    RegionKind,
};
pub use crate::models::{
    RiskRecord,
    RiskTable,
};
pub use crate::views::SolutionView;

// Declare modules
pub mod errors;
pub mod figures;
pub mod layout;
pub mod models;
pub mod serde;
pub mod views;

// Re-export errors
pub use crate::errors::{
    DataProcessingError,
    DataReadingError,
    RiskboardError,
};
pub use crate::serde::{
    read_risk_csv,
    sniff_risk_csv,
};
