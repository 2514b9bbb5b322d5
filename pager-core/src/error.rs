use thiserror::Error;

/// Errors raised when pager inputs break their invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PagerError {
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },
    #[error("page {page} is not a rendered page button")]
    PageNotRendered { page: u32 },
}

impl PagerError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// Check the `(current, total, visible_pages)` triple against the pager contract.
///
/// # Errors
/// Returns [`PagerError::InvalidArgument`] naming the first field that is out of range.
pub fn validate_inputs(current: u32, total: u32, visible_pages: u32) -> Result<(), PagerError> {
    if visible_pages == 0 {
        return Err(PagerError::invalid(
            "visible_pages",
            "must be at least 1 (got 0)",
        ));
    }
    if total == 0 {
        return Err(PagerError::invalid("total", "must be at least 1 (got 0)"));
    }
    if current == 0 || current > total {
        return Err(PagerError::invalid(
            "current",
            format!("must be between 1 and {total} (got {current})"),
        ));
    }
    Ok(())
}
