use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartFrame;

pub const CHART_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChartFrameJsonContractV1 {
    schema_version: u32,
    frame: ChartFrame,
}

impl ChartFrame {
    /// Serializes the frame inside the versioned v1 envelope.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartFrameJsonContractV1 {
            schema_version: CHART_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Parses either a bare frame or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<ChartFrame>(input) {
            return Ok(frame);
        }
        let payload: ChartFrameJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse frame json: {e}")))?;
        if payload.schema_version != CHART_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
