use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns the trimmed value, or `InvalidArgument` when nothing but
/// whitespace is left.
pub fn validate_non_empty(field_name: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::invalid(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(trimmed.to_string())
}

/// Closed-interval check. NaN never passes.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &'static str,
    value: T,
    min: T,
    max: T,
) -> Result<T> {
    if !(min..=max).contains(&value) {
        return Err(CatalogError::OutOfRange {
            field: field_name,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

pub fn validate_path(field_name: &'static str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::invalid(field_name, "path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(CatalogError::invalid(field_name, "path contains null bytes"));
    }

    Ok(())
}
