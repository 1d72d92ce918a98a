//! ethauth: issue challenges and verify account signatures from the shell.
//!
//! Exit codes: 0 success, 1 failed authentication attempt, 2 malformed
//! input, 3 system failure (entropy, config).

mod config;
mod report;

use clap::Parser;
use ethauth_auth::{
    hash_signed_message, AuthError, AuthErrorKind, ChallengeGenerator, ChallengeHasher,
    MessageHasher, PersonalMessageHasher, SignatureVerifier,
};
use ethauth_crypto::{to_checksum_address, CurveBackend, SecretKey};
use ethauth_types::AccountId;
use ethauth_utils::LogFormat;
use std::path::PathBuf;
use std::process::ExitCode;

use config::{CliConfig, OutputFormat};
use report::{Flavor, Reporter};

const EXIT_OK: u8 = 0;
const EXIT_FAILED_ATTEMPT: u8 = 1;
const EXIT_MALFORMED_INPUT: u8 = 2;
const EXIT_SYSTEM: u8 = 3;

#[derive(Parser)]
#[command(
    name = "ethauth",
    version,
    about = "Challenge-response authentication for secp256k1 accounts"
)]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long, env = "ETHAUTH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "ETHAUTH_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "ETHAUTH_LOG_FORMAT", global = true)]
    log_format: Option<LogFormat>,

    /// Result format on stdout.
    #[arg(long, env = "ETHAUTH_OUTPUT", global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Issue fresh challenges (64 random bytes, 88 base64 characters each).
    Challenge {
        /// Number of challenges to print.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Print the signed-message digest of a message.
    Hash { message: String },

    /// Check that a signature was produced by the claimed account.
    Verify {
        /// Claimed account, 40 hex digits with optional 0x.
        #[arg(long)]
        account: String,

        /// Signature, 130 hex digits with optional 0x.
        #[arg(long)]
        signature: String,

        #[command(flatten)]
        text: SignedText,
    },

    /// Print the account that produced a signature.
    Recover {
        /// Signature, 130 hex digits with optional 0x.
        #[arg(long)]
        signature: String,

        #[command(flatten)]
        text: SignedText,
    },

    /// Sign a message with a secret key (development aid).
    Sign {
        /// Secret key, 64 hex digits with optional 0x.
        #[arg(long, env = "ETHAUTH_SECRET_KEY", hide_env_values = true)]
        secret_key: String,

        message: String,
    },

    /// Print the account of a secret key.
    Account {
        /// Secret key, 64 hex digits with optional 0x.
        #[arg(long, env = "ETHAUTH_SECRET_KEY", hide_env_values = true)]
        secret_key: String,
    },
}

/// The text that was signed: an issued challenge or a free-form message.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct SignedText {
    /// An issued challenge.
    #[arg(long)]
    challenge: Option<String>,

    /// A free-form message.
    #[arg(long)]
    message: Option<String>,
}

impl SignedText {
    fn into_parts(self) -> (Flavor, String) {
        match (self.challenge, self.message) {
            (Some(challenge), _) => (Flavor::Challenge, challenge),
            (None, Some(message)) => (Flavor::Message, message),
            // clap's group makes one of the two mandatory.
            (None, None) => (Flavor::Message, String::new()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ethauth: {e}");
            return ExitCode::from(EXIT_SYSTEM);
        }
    };
    let config = config.with_overrides(cli.log_level, cli.log_format, cli.output);

    ethauth_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let reporter = Reporter::new(config.output, config.checksum_accounts);
    match run(cli.command, &reporter) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "command failed");
            println!("{}", reporter.error(&format!("{e:#}")));
            ExitCode::from(EXIT_SYSTEM)
        }
    }
}

/// Execute one subcommand, printing its result. Returns the exit status.
fn run(command: Command, reporter: &Reporter) -> anyhow::Result<u8> {
    match command {
        Command::Challenge { count } => {
            let generator = ChallengeGenerator::new();
            for _ in 0..count {
                match generator.generate() {
                    Ok(challenge) => println!("{}", reporter.challenge(&challenge)),
                    Err(e) => {
                        tracing::error!(kind = e.kind().as_str(), error = %e, "challenge generation failed");
                        println!("{}", reporter.rejected(None, &e));
                        return Ok(exit_status(e.kind()));
                    }
                }
            }
            tracing::debug!(count, "issued challenges");
        }

        Command::Hash { message } => {
            println!("{}", reporter.digest(&message, &hash_signed_message(&message)));
        }

        Command::Verify {
            account,
            signature,
            text,
        } => {
            let (flavor, text) = text.into_parts();
            let result = match flavor {
                Flavor::Challenge => verify_with(
                    &SignatureVerifier::new(ChallengeHasher),
                    &account,
                    &text,
                    &signature,
                ),
                Flavor::Message => verify_with(
                    &SignatureVerifier::new(PersonalMessageHasher),
                    &account,
                    &text,
                    &signature,
                ),
            };
            return Ok(match result {
                Ok(recovered) => {
                    println!("{}", reporter.verified(flavor, &recovered));
                    EXIT_OK
                }
                Err(e) => {
                    println!("{}", reporter.rejected(Some(flavor), &e));
                    exit_status(e.kind())
                }
            });
        }

        Command::Recover { signature, text } => {
            let (flavor, text) = text.into_parts();
            let result = match flavor {
                Flavor::Challenge => recover_with(
                    &SignatureVerifier::new(ChallengeHasher),
                    &text,
                    &signature,
                ),
                Flavor::Message => recover_with(
                    &SignatureVerifier::new(PersonalMessageHasher),
                    &text,
                    &signature,
                ),
            };
            return Ok(match result {
                Ok(account) => {
                    println!("{}", reporter.recovered(flavor, &account));
                    EXIT_OK
                }
                Err(e) => {
                    println!("{}", reporter.rejected(Some(flavor), &e));
                    exit_status(e.kind())
                }
            });
        }

        Command::Sign {
            secret_key,
            message,
        } => {
            let key = match SecretKey::from_hex(&secret_key) {
                Ok(key) => key,
                Err(e) => {
                    println!("{}", reporter.error(&e.to_string()));
                    return Ok(EXIT_MALFORMED_INPUT);
                }
            };
            let signature = key.sign_message(&message)?;
            println!("{}", reporter.signature(&key.account(), &signature));
        }

        Command::Account { secret_key } => {
            let key = match SecretKey::from_hex(&secret_key) {
                Ok(key) => key,
                Err(e) => {
                    println!("{}", reporter.error(&e.to_string()));
                    return Ok(EXIT_MALFORMED_INPUT);
                }
            };
            println!("{}", reporter.account_line(&key.account()));
        }
    }

    Ok(EXIT_OK)
}

fn verify_with<H: MessageHasher, C: CurveBackend>(
    verifier: &SignatureVerifier<H, C>,
    account: &str,
    text: &str,
    signature: &str,
) -> Result<AccountId, AuthError> {
    let result = verifier.verify(account, text, signature);
    log_outcome(verifier, account, &result);
    result
}

fn recover_with<H: MessageHasher, C: CurveBackend>(
    verifier: &SignatureVerifier<H, C>,
    text: &str,
    signature: &str,
) -> Result<AccountId, AuthError> {
    let entry = verifier.hasher().name();
    let curve = verifier.curve().name();
    let result = verifier.recover_account(text, signature);
    match &result {
        Ok(account) => tracing::debug!(entry, curve, account = %account, "recovered signer"),
        Err(e) => tracing::info!(entry, curve, kind = e.kind().as_str(), error = %e, "recovery failed"),
    }
    result
}

/// Audit trail for verification attempts. Mismatches are security-relevant.
fn log_outcome<H: MessageHasher, C: CurveBackend>(
    verifier: &SignatureVerifier<H, C>,
    claimed_input: &str,
    result: &Result<AccountId, AuthError>,
) {
    let entry = verifier.hasher().name();
    let curve = verifier.curve().name();
    match result {
        Ok(account) => tracing::info!(
            entry,
            curve,
            account = %to_checksum_address(account),
            "signature verified"
        ),
        Err(AuthError::AccountMismatch { claimed, recovered }) => tracing::warn!(
            entry,
            curve,
            claimed = %to_checksum_address(claimed),
            recovered = %to_checksum_address(recovered),
            "signature belongs to a different account"
        ),
        Err(e) => tracing::info!(
            entry,
            curve,
            claimed = claimed_input,
            kind = e.kind().as_str(),
            error = %e,
            "signature rejected"
        ),
    }
}

fn exit_status(kind: AuthErrorKind) -> u8 {
    if kind.is_failed_attempt() {
        EXIT_FAILED_ATTEMPT
    } else if kind.is_malformed_input() {
        EXIT_MALFORMED_INPUT
    } else {
        EXIT_SYSTEM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verify_requires_exactly_one_text() {
        let base = ["ethauth", "verify", "--account", "0x00", "--signature", "0x00"];
        assert!(Cli::try_parse_from(base).is_err());

        let mut both = base.to_vec();
        both.extend(["--challenge", "c", "--message", "m"]);
        assert!(Cli::try_parse_from(both).is_err());

        let mut one = base.to_vec();
        one.extend(["--message", "m"]);
        let cli = Cli::try_parse_from(one).unwrap();
        match cli.command {
            Command::Verify { text, .. } => {
                assert_eq!(text.into_parts(), (Flavor::Message, "m".to_string()))
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ethauth",
            "hash",
            "hello",
            "--output",
            "json",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn exit_codes_by_kind() {
        assert_eq!(exit_status(AuthErrorKind::AccountMismatch), 1);
        assert_eq!(exit_status(AuthErrorKind::Recovery), 1);
        assert_eq!(exit_status(AuthErrorKind::InvalidAccount), 2);
        assert_eq!(exit_status(AuthErrorKind::InvalidSignatureEncoding), 2);
        assert_eq!(exit_status(AuthErrorKind::Entropy), 3);
    }

    const ACCOUNT: &str = "0xa26f2b342aab24bcf63ea218c6a9274d30ab9a16";
    const MESSAGE: &str = "NO_PRODUCTION_CHALLENGE";
    const SIGNATURE: &str = "0xa226068b85f311996530599beabe5ba67036b4cd2362660f6b959c74d6474c2a\
                             0f8fb5504aad06054f641d9a5d6fd5c25d6ea5eb6edce5f2f02bd10c509bb1c51c";

    fn reporter() -> Reporter {
        Reporter::new(OutputFormat::Json, true)
    }

    fn verify(account: &str, signature: &str) -> Command {
        Command::Verify {
            account: account.into(),
            signature: signature.into(),
            text: SignedText {
                challenge: None,
                message: Some(MESSAGE.into()),
            },
        }
    }

    #[test]
    fn verify_known_vector_exits_zero() {
        assert_eq!(run(verify(ACCOUNT, SIGNATURE), &reporter()).unwrap(), 0);
    }

    #[test]
    fn verify_other_account_exits_one() {
        let other = "0xa26f2b342aab24bcf63ea218c6a9274d30ab9a17";
        assert_eq!(run(verify(other, SIGNATURE), &reporter()).unwrap(), 1);
    }

    #[test]
    fn verify_malformed_account_exits_two() {
        let short = "0xa26f2b342aab24bcf63ea218c6a9274d30ab9a1";
        assert_eq!(run(verify(short, SIGNATURE), &reporter()).unwrap(), 2);
    }

    #[test]
    fn verify_challenge_entry_point() {
        let command = Command::Verify {
            account: ACCOUNT.into(),
            signature: SIGNATURE.into(),
            text: SignedText {
                challenge: Some(MESSAGE.into()),
                message: None,
            },
        };
        assert_eq!(run(command, &reporter()).unwrap(), 0);
    }

    #[test]
    fn recover_known_signer_exits_zero() {
        let command = Command::Recover {
            signature: SIGNATURE.into(),
            text: SignedText {
                challenge: None,
                message: Some(MESSAGE.into()),
            },
        };
        assert_eq!(run(command, &reporter()).unwrap(), 0);
    }

    #[test]
    fn sign_with_bad_key_exits_two() {
        let zero = "00".repeat(32);
        for secret_key in ["0x1234", zero.as_str(), "not hex"] {
            let command = Command::Sign {
                secret_key: secret_key.into(),
                message: "hello".into(),
            };
            assert_eq!(run(command, &reporter()).unwrap(), 2, "{secret_key}");
        }
    }

    #[test]
    fn sign_and_account_with_valid_key_exit_zero() {
        let secret_key = format!("0x{}", "11".repeat(32));
        let sign = Command::Sign {
            secret_key: secret_key.clone(),
            message: "hello".into(),
        };
        assert_eq!(run(sign, &reporter()).unwrap(), 0);
        assert_eq!(run(Command::Account { secret_key }, &reporter()).unwrap(), 0);
    }

    #[test]
    fn key_error_reason_reaches_output() {
        let err = SecretKey::from_hex("0x1234").unwrap_err();
        let line = Reporter::new(OutputFormat::Text, true).error(&err.to_string());
        assert_eq!(line, "error: invalid secret key: expected 32 bytes, got 2");
    }

    #[test]
    fn hash_and_challenge_exit_zero() {
        let hash = Command::Hash {
            message: MESSAGE.into(),
        };
        assert_eq!(run(hash, &reporter()).unwrap(), 0);
        assert_eq!(run(Command::Challenge { count: 2 }, &reporter()).unwrap(), 0);
    }
}
