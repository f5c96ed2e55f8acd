pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A value was requested from an absent `Maybe`
    #[error("get from none")]
    Empty,
}
