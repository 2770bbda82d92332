/// Decimal places kept on relatedness edge weights.
pub const RST_WEIGHT_PRECISION: u32 = 2;

/// Decimal places kept on causal edge weights.
pub const CAUSAL_WEIGHT_PRECISION: u32 = 3;

/// Label used for a provenance actor when neither user nor device is known.
pub const UNKNOWN_USER: &str = "unknown_user";

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "CAREN_LOG";
