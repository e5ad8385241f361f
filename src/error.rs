use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid visible range: first={first}, last={last}, data_len={data_len}")]
    InvalidRange {
        first: usize,
        last: usize,
        data_len: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("label measurement failed: {0}")]
    Measurement(String),
}
