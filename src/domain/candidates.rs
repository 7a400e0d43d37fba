//! Ordered fallback lookup

/// Return the first candidate accepted by `probe`, trying them in order.
///
/// Candidates are produced lazily and the scan short-circuits on the first
/// match, so later candidates are never materialized or probed.
pub fn first_matching<T, I, P>(candidates: I, probe: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    let mut probe = probe;
    candidates.into_iter().find(|candidate| probe(candidate))
}
