//! `smelu-kernel` - SmeLU activation forward/backward kernel.
//!
//! This crate provides:
//! - A `Smelu<T>` kernel holding an immutable alpha parameter vector
//! - An `ActivationKernel` trait for autodiff engines to program against
//! - Element type definitions (f32, f64, f16, bf16) via the `Element` trait
//! - A `SmeluConfig` with the default construction parameters
//!
//! ```
//! use smelu_kernel::SmeluF32;
//!
//! let kernel = SmeluF32::new(0.9, 1).unwrap();
//! let input = [1.0f32, -2.0, 3.0, -4.0];
//! let output = kernel.forward(&input);
//! let grad_input = kernel.backward(&input, &[1.0; 4]).unwrap();
//! assert_eq!(output[0], 1.0);
//! assert_eq!(grad_input[2], 1.0);
//! ```

pub mod config;
pub mod dtype;
pub mod error;
pub mod kernel;
pub mod smelu;

// Re-export primary types at the crate root for convenience.
pub use config::SmeluConfig;
pub use dtype::{DType, Element};
pub use error::{KernelError, Result};
pub use kernel::ActivationKernel;
pub use smelu::{Smelu, SmeluBF16, SmeluF16, SmeluF32, SmeluF64};
