/// Errors raised by store mutation operations.
///
/// An out-of-range index is a programming error on the caller's side: the
/// store reports it instead of writing past bounds or silently doing
/// nothing. Callers may treat it as fatal in debug builds and log-and-skip
/// in release builds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("index {index} out of range for {list} list of length {len}")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },
}
