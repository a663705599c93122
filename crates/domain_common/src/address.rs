//! Address types

use serde::Serialize;

/// A postal address as sent to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    street: Option<String>,
    number: Option<String>,
    complement: Option<String>,
    district: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
}

impl Address {
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    /// Building number, kept as text ("S/N" is a valid value)
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }

    /// Neighbourhood (bairro)
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Two-letter state abbreviation
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// ISO 3166-1 alpha-3 country code
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Postal code (CEP)
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Formats address for display, skipping absent parts
    pub fn format(&self) -> String {
        let lines = [
            join_present(&[&self.street, &self.number], ", "),
            self.complement.clone(),
            self.district.clone(),
            join_present(&[&self.city, &self.state], " - "),
            self.postal_code.clone(),
            self.country.clone(),
        ];

        lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
    }
}

fn join_present(parts: &[&Option<String>], separator: &str) -> Option<String> {
    let present: Vec<&str> = parts.iter().filter_map(|part| part.as_deref()).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}

/// Builder for `Address`
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    street: Option<String>,
    number: Option<String>,
    complement: Option<String>,
    district: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_complement(mut self, complement: impl Into<String>) -> Self {
        self.complement = Some(complement.into());
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Builds the address
    pub fn build(&self) -> Address {
        Address {
            street: self.street.clone(),
            number: self.number.clone(),
            complement: self.complement.clone(),
            district: self.district.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

core_kernel::buildable!(Address, AddressBuilder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_address() {
        let address = AddressBuilder::new()
            .with_street("Av. Brigadeiro Faria Lima")
            .with_number("1384")
            .with_complement("5o andar")
            .with_district("Jardim Paulistano")
            .with_city("Sao Paulo")
            .with_state("SP")
            .with_postal_code("01452002")
            .with_country("BRA")
            .build();

        assert_eq!(
            address.format(),
            "Av. Brigadeiro Faria Lima, 1384\n5o andar\nJardim Paulistano\nSao Paulo - SP\n01452002\nBRA"
        );
    }

    #[test]
    fn test_format_skips_absent_parts() {
        let address = AddressBuilder::new()
            .with_city("Recife")
            .with_country("BRA")
            .build();

        assert_eq!(address.format(), "Recife\nBRA");
    }

    #[test]
    fn test_format_empty_address() {
        assert_eq!(AddressBuilder::new().build().format(), "");
    }
}
