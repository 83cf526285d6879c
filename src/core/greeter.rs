//! Greeting text generation

use crate::error::{GreetkitError, Result};

/// Returned when zero greetings are asked for
pub const NO_GREETINGS: &str = "No greetings requested";

/// Build `count` copies of `"Hello, {name}!"` separated by single spaces.
///
/// A count of zero yields [`NO_GREETINGS`]. Negative counts, and counts whose
/// output could not be allocated, are rejected with
/// [`GreetkitError::InvalidArgument`].
///
/// ```
/// use greetkit::core::greet;
///
/// assert_eq!(greet("Alice", 2)?, "Hello, Alice! Hello, Alice!");
/// # Ok::<(), greetkit::error::GreetkitError>(())
/// ```
pub fn greet(name: &str, count: i64) -> Result<String> {
    if count < 0 {
        return Err(GreetkitError::invalid_argument(
            "Count must be non-negative.",
        ));
    }

    if count == 0 {
        return Ok(NO_GREETINGS.to_string());
    }

    let greeting = format!("Hello, {name}!");
    let too_large = || GreetkitError::invalid_argument("Count is too large.");

    // count copies plus count - 1 separators
    let count = usize::try_from(count).map_err(|_| too_large())?;
    let len = (greeting.len() + 1)
        .checked_mul(count)
        .map(|total| total - 1)
        .ok_or_else(too_large)?;

    let mut out = String::new();
    out.try_reserve_exact(len).map_err(|_| too_large())?;

    for i in 0..count {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&greeting);
    }

    Ok(out)
}
