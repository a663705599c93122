//! Response to a pre-approval registration

use serde::{Deserialize, Serialize};

/// Pre-approval returned by the gateway after registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPreApproval {
    pre_approval_code: Option<String>,
    #[serde(rename = "redirectURL")]
    redirect_url: Option<String>,
}

impl RegisteredPreApproval {
    /// Code identifying the pre-approval in later requests
    pub fn pre_approval_code(&self) -> Option<&str> {
        self.pre_approval_code.as_deref()
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    /// URL the buyer is sent to, trimmed
    ///
    /// `None` when the gateway returned no URL or a blank one.
    pub fn checkout_url(&self) -> Option<&str> {
        self.redirect_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Builder for `RegisteredPreApproval`
#[derive(Debug, Clone, Default)]
pub struct RegisteredPreApprovalBuilder {
    pre_approval_code: Option<String>,
    redirect_url: Option<String>,
}

impl RegisteredPreApprovalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pre_approval_code(mut self, code: impl Into<String>) -> Self {
        self.pre_approval_code = Some(code.into());
        self
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    pub fn build(&self) -> RegisteredPreApproval {
        RegisteredPreApproval {
            pre_approval_code: self.pre_approval_code.clone(),
            redirect_url: self.redirect_url.clone(),
        }
    }
}

core_kernel::buildable!(RegisteredPreApproval, RegisteredPreApprovalBuilder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_url_ignores_blank_redirect() {
        let registered = RegisteredPreApprovalBuilder::new()
            .with_pre_approval_code("7B6D2A")
            .with_redirect_url("   ")
            .build();

        assert_eq!(registered.redirect_url(), Some("   "));
        assert_eq!(registered.checkout_url(), None);
    }

    #[test]
    fn test_checkout_url_is_trimmed() {
        let registered = RegisteredPreApprovalBuilder::new()
            .with_redirect_url("  https://pagseguro.uol.com.br/checkout?code=7B6D2A\n")
            .build();

        assert_eq!(
            registered.checkout_url(),
            Some("https://pagseguro.uol.com.br/checkout?code=7B6D2A")
        );
        assert_eq!(
            registered.redirect_url(),
            Some("  https://pagseguro.uol.com.br/checkout?code=7B6D2A\n")
        );
    }

    #[test]
    fn test_checkout_url_absent_without_redirect() {
        let registered = RegisteredPreApprovalBuilder::new()
            .with_pre_approval_code("7B6D2A")
            .build();

        assert_eq!(registered.checkout_url(), None);
    }

    #[test]
    fn test_deserialize_gateway_fields() {
        let json = r#"{"preApprovalCode":"7B6D2A","redirectURL":"https://pagseguro.uol.com.br/v2/pre-approvals/request.html?code=7B6D2A"}"#;
        let registered: RegisteredPreApproval = serde_json::from_str(json).unwrap();

        assert_eq!(registered.pre_approval_code(), Some("7B6D2A"));
        assert!(registered.checkout_url().unwrap().ends_with("code=7B6D2A"));
    }
}
