use crate::error::ParseError;

/// Fixed-point window rewriting over an ordered sequence.
///
/// `rule` inspects `width` contiguous elements and returns either a
/// replacement to splice in their place or `None`. On a match the scan
/// resumes at the same index, so a replacement is immediately reconsidered;
/// on no match it advances one position. The scan ends when fewer than
/// `width` elements remain ahead of the cursor.
pub(crate) fn rewrite<T, F>(seq: &mut Vec<T>, width: usize, mut rule: F) -> Result<(), ParseError>
where
    F: FnMut(&[T]) -> Result<Option<Vec<T>>, ParseError>,
{
    let mut i = 0;
    while i + width <= seq.len() {
        match rule(&seq[i..i + width])? {
            Some(replacement) => {
                seq.splice(i..i + width, replacement);
            }
            None => i += 1,
        }
    }
    Ok(())
}
