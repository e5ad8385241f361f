mod engine;
mod engine_config;
mod json_contract;

pub use engine::{ChartEngine, ChartFrame};
pub use engine_config::ChartEngineConfig;
pub use json_contract::CHART_FRAME_JSON_SCHEMA_V1;
