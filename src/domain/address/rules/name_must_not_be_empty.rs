use crate::core::error::{AppError, AppResult};
use crate::domain::business_rule_interface::BusinessRuleInterface;

pub struct NameMustNotBeEmpty {
    pub name: String,
}

impl BusinessRuleInterface for NameMustNotBeEmpty {
    fn check_broken(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequestError("Name is required".to_string()));
        }

        Ok(())
    }
}
