#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid service '{0}'")]
    UnknownService(String),

    #[error("Invalid date '{0}'")]
    InvalidDate(String),
}
