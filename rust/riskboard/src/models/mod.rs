pub mod record;

pub use record::{
    RiskRecord,
    RiskTable,
};
