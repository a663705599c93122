//! Brazilian tax document types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the sender's tax document
///
/// `Other` keeps discriminators this version does not know about, verbatim,
/// so that conversion from a raw string is total. Builders route it to CPF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DocumentType {
    /// Cadastro de Pessoas Fisicas (individuals)
    Cpf,
    /// Cadastro Nacional da Pessoa Juridica (companies)
    Cnpj,
    Other(String),
}

impl DocumentType {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Cnpj => "CNPJ",
            DocumentType::Other(kind) => kind,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DocumentType {
    fn from(kind: &str) -> Self {
        let trimmed = kind.trim();
        if trimmed.eq_ignore_ascii_case("CPF") {
            DocumentType::Cpf
        } else if trimmed.eq_ignore_ascii_case("CNPJ") {
            DocumentType::Cnpj
        } else {
            DocumentType::Other(kind.to_string())
        }
    }
}

impl From<String> for DocumentType {
    fn from(kind: String) -> Self {
        DocumentType::from(kind.as_str())
    }
}

impl From<DocumentType> for String {
    fn from(kind: DocumentType) -> Self {
        match kind {
            DocumentType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
