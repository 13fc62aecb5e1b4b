use crate::api::error::ApiError;
use crate::types::metric::Metric;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AerisError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("No statistics available for {metric} over the requested range")]
    StatisticsUnavailable { metric: Metric },
}
