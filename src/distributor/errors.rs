use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Fatal input problems detected before any task is assigned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("distribution not performed: no employees selected")]
    NoEmployees,

    #[error("distribution not performed: no tasks selected")]
    NoTasks,
}
