mod risk_csv;

pub use risk_csv::{
    REQUIRED_COLUMNS,
    read_risk_csv,
    sniff_risk_csv,
};
