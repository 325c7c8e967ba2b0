use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("length mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = KernelError::ShapeMismatch { expected: 3, got: 2 };
        assert_eq!(e.to_string(), "length mismatch: expected 3, got 2");

        let e = KernelError::InvalidArgument("size must be >= 1".to_string());
        assert_eq!(e.to_string(), "invalid argument: size must be >= 1");
    }
}
