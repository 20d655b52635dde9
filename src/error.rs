//! Errors from querying the host page.

/// Why a layout query against the DOM produced nothing usable.
///
/// None of these are fatal: callers keep their previous state and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    #[error("no browser window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("window did not report its size")]
    NoViewportSize,

    #[error("element #{id} is not mounted")]
    NotMounted { id: String },

    #[error("element #{id} has not been laid out")]
    NotLaidOut { id: String },
}

impl MeasureError {
    pub fn not_mounted(id: impl Into<String>) -> Self {
        Self::NotMounted { id: id.into() }
    }

    pub fn not_laid_out(id: impl Into<String>) -> Self {
        Self::NotLaidOut { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        assert_eq!(MeasureError::not_mounted("tilt-3").to_string(), "element #tilt-3 is not mounted");
        assert_eq!(
            MeasureError::not_laid_out("reveal-0").to_string(),
            "element #reveal-0 has not been laid out"
        );
    }

    #[test]
    fn missing_viewport_size_is_an_error() {
        assert_eq!(MeasureError::NoViewportSize.to_string(), "window did not report its size");
    }
}
