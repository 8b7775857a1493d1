#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow: result does not fit in 64 bits")]
    Overflow,
}
