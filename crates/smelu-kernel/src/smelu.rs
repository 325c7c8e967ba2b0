use half::{bf16, f16};
use num_traits::NumCast;

use crate::config::SmeluConfig;
use crate::dtype::{DType, Element};
use crate::error::{KernelError, Result};
use crate::kernel::ActivationKernel;

/// SmeLU activation kernel.
///
/// ```text
/// smelu(x) = x                    ; x > 0
///            alpha * (e^x - 1)    ; x <= 0
/// ```
///
/// Element `i` of the input is paired with `alpha[i % alpha.len()]`, so a
/// single alpha broadcasts to every element and a longer one repeats
/// cyclically. The alpha vector is never empty and never changes after
/// construction, which makes the kernel safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Smelu<T: Element> {
    alpha: Vec<T>,
}

/// Single-precision kernel.
pub type SmeluF32 = Smelu<f32>;
/// Double-precision kernel.
pub type SmeluF64 = Smelu<f64>;
/// IEEE half-precision kernel.
pub type SmeluF16 = Smelu<f16>;
/// bfloat16 kernel.
pub type SmeluBF16 = Smelu<bf16>;

impl<T: Element> Smelu<T> {
    /// Create a kernel whose alpha vector is `size` copies of `alpha_value`.
    ///
    /// # Errors
    /// `InvalidArgument` if `size` is zero.
    pub fn new(alpha_value: T, size: usize) -> Result<Self> {
        if size == 0 {
            log::debug!("rejecting {} smelu kernel with zero alpha size", T::DTYPE);
            return Err(KernelError::InvalidArgument(
                "alpha size must be >= 1".to_string(),
            ));
        }
        Ok(Self::from_alpha(vec![alpha_value; size]))
    }

    /// Create a kernel with an explicit per-element alpha vector.
    ///
    /// # Errors
    /// `InvalidArgument` if `alpha` is empty.
    pub fn with_alpha(alpha: Vec<T>) -> Result<Self> {
        if alpha.is_empty() {
            log::debug!("rejecting {} smelu kernel with empty alpha", T::DTYPE);
            return Err(KernelError::InvalidArgument(
                "alpha must not be empty".to_string(),
            ));
        }
        Ok(Self::from_alpha(alpha))
    }

    /// Build a kernel of this precision from a precision-independent config.
    ///
    /// # Errors
    /// `InvalidArgument` if the config fails validation or the alpha value
    /// does not fit in `T` (e.g. 1e6 as `f16`).
    pub fn from_config(config: &SmeluConfig) -> Result<Self> {
        config.validate()?;
        let alpha_value = <T as NumCast>::from(config.alpha_value)
            .filter(|a| a.is_finite())
            .ok_or_else(|| {
                log::debug!(
                    "alpha {} is not representable as {}",
                    config.alpha_value,
                    T::DTYPE
                );
                KernelError::InvalidArgument(format!(
                    "alpha value {} is not representable as {}",
                    config.alpha_value,
                    T::DTYPE
                ))
            })?;
        Self::new(alpha_value, config.size)
    }

    fn from_alpha(alpha: Vec<T>) -> Self {
        log::debug!(
            "created {} smelu kernel with {} alpha value(s)",
            T::DTYPE,
            alpha.len()
        );
        Smelu { alpha }
    }

    /// Returns the alpha parameter vector.
    pub fn alpha(&self) -> &[T] {
        &self.alpha
    }

    /// Returns the element type this kernel computes in.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Compute the activation for every element of `input`.
    pub fn forward(&self, input: &[T]) -> Vec<T> {
        input
            .iter()
            .enumerate()
            .map(|(i, &x)| self.activate(i, x))
            .collect()
    }

    /// Compute the input gradient given the original `input` and the
    /// upstream `grad_output`.
    ///
    /// # Errors
    /// `ShapeMismatch` if `grad_output.len() != input.len()`.
    pub fn backward(&self, input: &[T], grad_output: &[T]) -> Result<Vec<T>> {
        check_len(input.len(), grad_output.len())?;
        Ok(input
            .iter()
            .zip(grad_output)
            .enumerate()
            .map(|(i, (&x, &g))| self.derive(i, x, g))
            .collect())
    }

    /// Compute the activation into a caller-provided buffer.
    ///
    /// # Errors
    /// `ShapeMismatch` if `output.len() != input.len()`.
    pub fn forward_into(&self, input: &[T], output: &mut [T]) -> Result<()> {
        check_len(input.len(), output.len())?;
        for (i, (out, &x)) in output.iter_mut().zip(input).enumerate() {
            *out = self.activate(i, x);
        }
        Ok(())
    }

    /// Compute the input gradient into a caller-provided buffer.
    ///
    /// # Errors
    /// `ShapeMismatch` if either `grad_output` or `grad_input` differs in
    /// length from `input`.
    pub fn backward_into(
        &self,
        input: &[T],
        grad_output: &[T],
        grad_input: &mut [T],
    ) -> Result<()> {
        check_len(input.len(), grad_output.len())?;
        check_len(input.len(), grad_input.len())?;
        for (i, (out, (&x, &g))) in grad_input
            .iter_mut()
            .zip(input.iter().zip(grad_output))
            .enumerate()
        {
            *out = self.derive(i, x, g);
        }
        Ok(())
    }

    #[inline]
    fn alpha_at(&self, i: usize) -> T {
        self.alpha[i % self.alpha.len()]
    }

    // Strict `> 0`: zero and NaN take the exponential branch.
    #[inline]
    fn activate(&self, i: usize, x: T) -> T {
        if x > T::zero() {
            x
        } else {
            self.alpha_at(i) * (x.exp() - T::one())
        }
    }

    #[inline]
    fn derive(&self, i: usize, x: T, grad: T) -> T {
        if x > T::zero() {
            grad
        } else {
            grad * self.alpha_at(i) * x.exp()
        }
    }
}

impl<T: Element> Default for Smelu<T> {
    fn default() -> Self {
        Self::from_alpha(vec![T::one()])
    }
}

impl<T: Element> ActivationKernel<T> for Smelu<T> {
    fn name(&self) -> &str {
        "smelu"
    }

    fn forward(&self, input: &[T]) -> Vec<T> {
        Smelu::forward(self, input)
    }

    fn backward(&self, input: &[T], grad_output: &[T]) -> Result<Vec<T>> {
        Smelu::backward(self, input, grad_output)
    }

    fn forward_into(&self, input: &[T], output: &mut [T]) -> Result<()> {
        Smelu::forward_into(self, input, output)
    }

    fn backward_into(&self, input: &[T], grad_output: &[T], grad_input: &mut [T]) -> Result<()> {
        Smelu::backward_into(self, input, grad_output, grad_input)
    }
}

fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        log::trace!("smelu buffer length mismatch: expected {}, got {}", expected, got);
        return Err(KernelError::ShapeMismatch { expected, got });
    }
    Ok(())
}
