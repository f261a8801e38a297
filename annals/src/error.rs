// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use annals_layout::LayoutError;
use annals_model::ModelError;
use annals_scale::DomainError;

/// Everything that can go wrong when loading or re-laying out a timeline.
///
/// Errors only happen at load or relayout time. Interaction, framing and hit
/// testing never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset is structurally invalid.
    #[error("invalid dataset: {0}")]
    Model(#[from] ModelError),
    /// The scale parameters or a segment cannot be mapped onto the time axis.
    #[error("invalid time mapping: {0}")]
    Domain(#[from] DomainError),
    /// The dataset or configuration JSON could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Model(e) => Self::Model(e),
            LayoutError::Domain(e) => Self::Domain(e),
        }
    }
}
