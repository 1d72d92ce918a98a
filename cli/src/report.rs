//! Rendering of command results for stdout.

use ethauth_crypto::to_checksum_address;
use ethauth_types::{AccountId, AuthError, Challenge, Digest, SignatureBlob};
use serde_json::json;

use crate::config::OutputFormat;

/// Which entry point a signature was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flavor {
    Challenge,
    Message,
}

impl Flavor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Challenge => "challenge",
            Self::Message => "message",
        }
    }
}

/// Formats results as text lines or JSON objects.
pub struct Reporter {
    format: OutputFormat,
    checksum_accounts: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, checksum_accounts: bool) -> Self {
        Self {
            format,
            checksum_accounts,
        }
    }

    fn account(&self, account: &AccountId) -> String {
        if self.checksum_accounts {
            to_checksum_address(account)
        } else {
            account.to_string()
        }
    }

    pub fn challenge(&self, challenge: &Challenge) -> String {
        match self.format {
            OutputFormat::Text => challenge.to_string(),
            OutputFormat::Json => json!({ "challenge": challenge.as_str() }).to_string(),
        }
    }

    pub fn digest(&self, message: &str, digest: &Digest) -> String {
        match self.format {
            OutputFormat::Text => digest.to_string(),
            OutputFormat::Json => {
                json!({ "message": message, "digest": digest.to_string() }).to_string()
            }
        }
    }

    pub fn verified(&self, flavor: Flavor, account: &AccountId) -> String {
        match self.format {
            OutputFormat::Text => format!("verified {}", self.account(account)),
            OutputFormat::Json => json!({
                "verified": true,
                "flavor": flavor.as_str(),
                "account": self.account(account),
            })
            .to_string(),
        }
    }

    pub fn recovered(&self, flavor: Flavor, account: &AccountId) -> String {
        match self.format {
            OutputFormat::Text => self.account(account),
            OutputFormat::Json => json!({
                "flavor": flavor.as_str(),
                "account": self.account(account),
            })
            .to_string(),
        }
    }

    pub fn rejected(&self, flavor: Option<Flavor>, err: &AuthError) -> String {
        let message = match err {
            AuthError::AccountMismatch { claimed, recovered } => format!(
                "signed by account {} but presented for account {}",
                self.account(recovered),
                self.account(claimed)
            ),
            other => other.to_string(),
        };
        match self.format {
            OutputFormat::Text => format!("rejected ({}): {message}", err.kind().as_str()),
            OutputFormat::Json => {
                let mut value = json!({
                    "verified": false,
                    "flavor": flavor.map(Flavor::as_str),
                    "error_kind": err.kind(),
                    "error": message,
                });
                if let AuthError::AccountMismatch { claimed, recovered } = err {
                    value["claimed"] = json!(self.account(claimed));
                    value["recovered"] = json!(self.account(recovered));
                }
                value.to_string()
            }
        }
    }

    pub fn signature(&self, account: &AccountId, signature: &SignatureBlob) -> String {
        match self.format {
            OutputFormat::Text => signature.to_hex(),
            OutputFormat::Json => json!({
                "account": self.account(account),
                "signature": signature.to_hex(),
            })
            .to_string(),
        }
    }

    pub fn account_line(&self, account: &AccountId) -> String {
        match self.format {
            OutputFormat::Text => self.account(account),
            OutputFormat::Json => json!({ "account": self.account(account) }).to_string(),
        }
    }

    pub fn error(&self, message: &str) -> String {
        match self.format {
            OutputFormat::Text => format!("error: {message}"),
            OutputFormat::Json => json!({ "error": message }).to_string(),
        }
    }
}
