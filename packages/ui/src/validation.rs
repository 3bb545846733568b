//! Client-side form validation.
//!
//! These checks only catch what the user can fix before submitting. Tax ID
//! ownership, duplicate companies and plan conflicts are the API's call and come
//! back as [`api::ApiError::Rejected`] messages.

use api::CompanyInfo;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err("Please enter a valid email".to_string());
    };
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return Err("Please enter a valid email".to_string());
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

pub fn validate_new_user(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    validate_email(email)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Tax IDs are 10 to 13 digits.
pub fn validate_tax_id(tax_id: &str) -> Result<(), String> {
    let tax_id = tax_id.trim();
    if tax_id.is_empty() {
        return Err("Tax ID is required".to_string());
    }
    if !tax_id.chars().all(|c| c.is_ascii_digit()) {
        return Err("Tax ID must contain only digits".to_string());
    }
    if !(10..=13).contains(&tax_id.len()) {
        return Err("Tax ID must have between 10 and 13 digits".to_string());
    }
    Ok(())
}

pub fn validate_company(company: &CompanyInfo, has_certificate: bool) -> Result<(), String> {
    if company.business_name.trim().is_empty() {
        return Err("Business name is required".to_string());
    }
    validate_tax_id(&company.tax_id)?;
    if company.address.trim().is_empty() {
        return Err("Address is required".to_string());
    }
    validate_email(&company.email)?;
    if !has_certificate {
        return Err("Upload your digital signing certificate".to_string());
    }
    if company.certificate_password.is_empty() {
        return Err("Certificate password is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CompanyInfo {
        CompanyInfo {
            business_name: "Acme S.A.".to_string(),
            tax_id: "1790012345001".to_string(),
            address: "Av. Amazonas N34".to_string(),
            email: "billing@acme.test".to_string(),
            certificate_password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_email() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("  ana@example.com ").is_ok());
        assert!(validate_email("ana.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email("ana maria@example.com").is_err());
    }

    #[test]
    fn test_login() {
        assert!(validate_login("ana@example.com", "x").is_ok());
        assert_eq!(
            validate_login("ana@example.com", ""),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn test_new_user() {
        assert!(validate_new_user("Ana", "ana@example.com", "secret123", "secret123").is_ok());
        assert_eq!(
            validate_new_user(" ", "ana@example.com", "secret123", "secret123"),
            Err("Name is required".to_string())
        );
        assert_eq!(
            validate_new_user("Ana", "ana@example.com", "short", "short"),
            Err("Password must be at least 8 characters".to_string())
        );
        assert_eq!(
            validate_new_user("Ana", "ana@example.com", "secret123", "secret124"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_tax_id() {
        assert!(validate_tax_id("1790012345001").is_ok());
        assert!(validate_tax_id("1712345678").is_ok());
        assert!(validate_tax_id("").is_err());
        assert!(validate_tax_id("17900A2345001").is_err());
        assert!(validate_tax_id("123456789").is_err());
        assert!(validate_tax_id("12345678901234").is_err());
    }

    #[test]
    fn test_company() {
        assert!(validate_company(&company(), true).is_ok());
        assert_eq!(
            validate_company(&company(), false),
            Err("Upload your digital signing certificate".to_string())
        );

        let mut missing_name = company();
        missing_name.business_name.clear();
        assert_eq!(
            validate_company(&missing_name, true),
            Err("Business name is required".to_string())
        );

        let mut no_password = company();
        no_password.certificate_password.clear();
        assert!(validate_company(&no_password, true).is_err());
    }
}
