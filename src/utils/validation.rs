use log::{debug, warn};

use crate::expression::Value;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the list is empty, holds a single number, or contains
/// a negative number. Zero is allowed.
pub fn validate_numbers(numbers: &[Value]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Number list is empty");
        return Err(UtilsError::EmptyNumbers);
    }

    if numbers.len() < 2 {
        warn!("Only {} number given, nothing to combine", numbers.len());
        return Err(UtilsError::TooFewNumbers(numbers.len()));
    }

    if let Some(&negative) = numbers.iter().find(|&&n| n < 0) {
        warn!("Negative number in input: {}", negative);
        return Err(UtilsError::NegativeNumber(negative));
    }

    debug!("Number validation successful");
    Ok(())
}
