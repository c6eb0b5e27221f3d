use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        if query.len() > 255 {
            return Err(AppError::ValidationError(
                "Search query too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_page(page: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page number must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_season_year(year: i32, max_year: i32) -> Result<(), AppError> {
        if !(1990..=max_year).contains(&year) {
            return Err(AppError::ValidationError(format!(
                "Year must be between 1990 and {}",
                max_year
            )));
        }
        Ok(())
    }
}
