use crate::core::error::{AppError, AppResult};
use crate::domain::business_rule_interface::BusinessRuleInterface;

pub struct TextMustNotBeEmpty {
    pub text: String,
}

impl BusinessRuleInterface for TextMustNotBeEmpty {
    fn check_broken(&self) -> AppResult<()> {
        if self.text.trim().is_empty() {
            return Err(AppError::BadRequestError(
                "Comment text is required".to_string(),
            ));
        }

        Ok(())
    }
}
