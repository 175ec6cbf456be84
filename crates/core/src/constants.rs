/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 3;

/// Reporting currency used when the configuration does not name one
pub const DEFAULT_REPORTING_CURRENCY: &str = "CHF";
