/// Wraps a closure as a chunk filter.
///
/// The closure receives `Some(chunk)` for every chunk read and `None` once
/// at end of stream, and returns the bytes to write in each case.
pub struct FnFilter<F>(pub F)
where
    F: FnMut(Option<&[u8]>) -> Vec<u8>;
