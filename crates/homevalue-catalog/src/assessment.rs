//! Property assessment form validation.

use homevalue_core::models::assessment::PropertyAssessment;

use crate::error::CatalogError;

/// Every text field must be non-blank and every number non-zero.
pub fn validate_assessment(form: &PropertyAssessment) -> Result<(), CatalogError> {
    let text_fields = [
        ("propertyType", &form.property_type),
        ("city", &form.city),
        ("locality", &form.locality),
        ("budget", &form.budget),
        ("currentCondition", &form.current_condition),
    ];
    let number_fields = [("propertyAge", form.property_age), ("area", form.area)];

    let missing: Vec<&'static str> = text_fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .chain(
            number_fields
                .iter()
                .filter(|(_, value)| *value == 0)
                .map(|(name, _)| *name),
        )
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::IncompleteAssessment { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PropertyAssessment {
        PropertyAssessment {
            property_type: "apartment".into(),
            city: "Pune".into(),
            locality: "Baner".into(),
            property_age: 12,
            area: 1100,
            budget: "1-3 lakh".into(),
            current_condition: "fair".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate_assessment(&complete()).is_ok());
    }

    #[test]
    fn blank_and_zero_fields_are_reported() {
        let form = PropertyAssessment {
            city: "   ".into(),
            area: 0,
            ..complete()
        };

        match validate_assessment(&form) {
            Err(CatalogError::IncompleteAssessment { missing }) => {
                assert_eq!(missing, ["city", "area"]);
            }
            other => panic!("expected IncompleteAssessment, got {other:?}"),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let err = validate_assessment(&PropertyAssessment::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill in all fields to get personalized recommendations."
        );
        let CatalogError::IncompleteAssessment { missing } = err;
        assert_eq!(missing.len(), 7);
    }
}
