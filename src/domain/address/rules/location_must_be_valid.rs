use crate::core::error::{AppError, AppResult};
use crate::domain::address::address::Location;
use crate::domain::business_rule_interface::BusinessRuleInterface;

pub struct LocationMustBeValid {
    pub location: Location,
}

impl BusinessRuleInterface for LocationMustBeValid {
    fn check_broken(&self) -> AppResult<()> {
        let Location { latitude, longitude } = self.location;

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::BadRequestError(format!(
                "Latitude {} is out of range",
                latitude
            )));
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::BadRequestError(format!(
                "Longitude {} is out of range",
                longitude
            )));
        }

        Ok(())
    }
}
