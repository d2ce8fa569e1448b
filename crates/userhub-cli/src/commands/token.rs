//! Validate a token locally and show what it grants.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::Args;

use userhub_auth::gate::AuthorizationGate;
use userhub_auth::jwt::{JwtDecoder, SigningKey};
use userhub_core::config::AppConfig;
use userhub_core::error::AppError;

use crate::output::{FieldRow, OutputFormat, print_record, print_success};

/// Arguments for the inspect-token command
#[derive(Debug, Args)]
pub struct InspectTokenArgs {
    /// Compact token string
    pub token: String,

    /// Also require this permission, as the HTTP gate would
    #[arg(short, long)]
    pub permission: Option<String>,
}

/// Execute the inspect-token command
///
/// Unlike the HTTP surface, this reports the precise rejection reason.
pub fn execute(
    args: &InspectTokenArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let key = Arc::new(SigningKey::from_config(&config.auth)?);
    let decoder = JwtDecoder::from_config(key, &config.auth)?;

    let claims = decoder
        .decode(&args.token)
        .map_err(|e| AppError::authentication(format!("Token rejected: {e}")))?;

    let rows = vec![
        FieldRow::new("subject", &claims.subject),
        FieldRow::new("permissions", claims.permissions.join(",")),
        FieldRow::new("issuedAt", format_timestamp(claims.issued_at)),
        FieldRow::new("expiresAt", format_timestamp(claims.expires_at)),
        FieldRow::new("remainingSeconds", claims.remaining_ttl_seconds()),
    ];
    print_record(&claims, rows, format);

    if let Some(permission) = args.permission.as_deref() {
        let identity = claims.into_identity();
        AuthorizationGate::require(&identity, permission)
            .map_err(|e| AppError::authorization(format!("{permission}: {e}")))?;
        print_success(&format!("{permission} granted"));
    }

    Ok(())
}

fn format_timestamp(seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| seconds.to_string())
}
