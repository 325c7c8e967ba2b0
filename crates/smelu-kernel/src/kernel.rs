use std::fmt::Debug;

use crate::dtype::Element;
use crate::error::Result;

/// Trait for element-wise activation operators consumed by an autodiff engine.
///
/// Implementations are stateless across calls: `backward` takes the original
/// forward input, never the forward output. Data is passed in as slices and
/// returned as owned vectors, or written into caller-provided buffers by the
/// `_into` variants.
pub trait ActivationKernel<T: Element>: Send + Sync + Debug {
    /// Returns the name of this operator (e.g., "smelu").
    fn name(&self) -> &str;

    /// Activation output, same length as `input`.
    fn forward(&self, input: &[T]) -> Vec<T>;

    /// Input gradient from the upstream gradient via the chain rule.
    ///
    /// - `input`: the values originally passed to `forward`
    /// - `grad_output`: upstream gradient, must have the same length as `input`
    fn backward(&self, input: &[T], grad_output: &[T]) -> Result<Vec<T>>;

    /// Like `forward`, writing into `output` (must match `input.len()`).
    fn forward_into(&self, input: &[T], output: &mut [T]) -> Result<()>;

    /// Like `backward`, writing into `grad_input` (must match `input.len()`).
    fn backward_into(&self, input: &[T], grad_output: &[T], grad_input: &mut [T]) -> Result<()>;
}
