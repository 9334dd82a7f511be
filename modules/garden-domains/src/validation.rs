use garden_core::GardenError;

pub fn require_name(field: &str, value: &str) -> Result<(), GardenError> {
    if value.trim().is_empty() {
        return Err(GardenError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

pub fn require_non_negative(field: &str, value: Option<i32>) -> Result<(), GardenError> {
    match value {
        Some(v) if v < 0 => Err(GardenError::Validation(format!(
            "{field} must be zero or greater, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// Dimensions shared by beds and sections. `None` means "use the column default".
pub fn dimensions(
    length: Option<i32>,
    width: Option<i32>,
    unit_of_measurement: Option<&str>,
) -> Result<(), GardenError> {
    require_non_negative("length", length)?;
    require_non_negative("width", width)?;
    if let Some(unit) = unit_of_measurement {
        require_name("unitOfMeasurement", unit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(require_name("name", "").is_err());
        assert!(require_name("name", "   ").is_err());
        assert!(require_name("name", "Tomatoes").is_ok());
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let err = dimensions(Some(-1), Some(3), None).unwrap_err();
        assert!(err.to_string().contains("length"));
        let err = dimensions(Some(1), Some(-3), None).unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn omitted_dimensions_are_fine() {
        assert!(dimensions(None, None, None).is_ok());
        assert!(dimensions(Some(0), Some(0), Some("cm")).is_ok());
    }

    #[test]
    fn blank_unit_is_rejected() {
        assert!(dimensions(Some(1), Some(1), Some("")).is_err());
    }
}
