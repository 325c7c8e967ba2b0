use crate::error::{KernelError, Result};

/// Construction parameters for a SmeLU kernel.
///
/// Precision-independent: the same config builds an `f32`, `f64` or
/// half-precision kernel via `Smelu::from_config`.
#[derive(Debug, Clone, PartialEq)]
pub struct SmeluConfig {
    /// Scale of the negative-branch response, copied into every alpha slot.
    pub alpha_value: f64,
    /// Length of the alpha parameter vector. Must be at least 1.
    pub size: usize,
}

impl SmeluConfig {
    pub fn new(alpha_value: f64, size: usize) -> Self {
        Self { alpha_value, size }
    }

    pub fn with_alpha_value(mut self, alpha_value: f64) -> Self {
        self.alpha_value = alpha_value;
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Checks that the config describes a usable kernel.
    ///
    /// # Errors
    /// `InvalidArgument` if `size` is zero or `alpha_value` is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(KernelError::InvalidArgument(
                "alpha size must be >= 1".to_string(),
            ));
        }
        if !self.alpha_value.is_finite() {
            return Err(KernelError::InvalidArgument(format!(
                "alpha value must be finite, got {}",
                self.alpha_value
            )));
        }
        Ok(())
    }
}

impl Default for SmeluConfig {
    fn default() -> Self {
        Self {
            alpha_value: 1.0,
            size: 1,
        }
    }
}
