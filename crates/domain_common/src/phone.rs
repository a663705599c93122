//! Phone types

use serde::Serialize;

/// A phone number split into area code and local number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phone {
    area_code: Option<String>,
    number: Option<String>,
}

impl Phone {
    /// Two-digit area code (DDD)
    pub fn area_code(&self) -> Option<&str> {
        self.area_code.as_deref()
    }

    /// Local number without area code
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }
}

/// Builder for `Phone`
#[derive(Debug, Clone, Default)]
pub struct PhoneBuilder {
    area_code: Option<String>,
    number: Option<String>,
}

impl PhoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the area code
    pub fn with_area_code(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }

    /// Sets the local number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Builds the phone
    pub fn build(&self) -> Phone {
        Phone {
            area_code: self.area_code.clone(),
            number: self.number.clone(),
        }
    }
}

core_kernel::buildable!(Phone, PhoneBuilder);
