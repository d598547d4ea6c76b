use crate::core::error::{AppError, AppResult};
use crate::domain::business_rule_interface::BusinessRuleInterface;

pub struct PhotoCountMustNotExceedLimit {
    pub count: usize,
    pub limit: usize,
}

impl BusinessRuleInterface for PhotoCountMustNotExceedLimit {
    fn check_broken(&self) -> AppResult<()> {
        if self.count > self.limit {
            return Err(AppError::BadRequestError(format!(
                "A comment accepts at most {} photos, got {}",
                self.limit, self.count
            )));
        }

        Ok(())
    }
}
