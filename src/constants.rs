//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "UPI Pay Desk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "upi-pay-desk.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Environment overrides, read once at startup
pub const ENV_UPI_ID: &str = "UPI_ID";
pub const ENV_UPI_NAME: &str = "UPI_NAME";
pub const ENV_USER_AGENT: &str = "UPI_PAY_USER_AGENT";

/// UPI intent parameters
pub const CURRENCY: &str = "INR";
pub const GENERIC_SCHEME: &str = "upi";

/// How long an app deep link gets before the generic link is opened instead
pub const APP_FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// Simulated latency of the order lookup behind `/:id`
pub const ORDER_LOOKUP_DELAY: Duration = Duration::from_millis(600);

/// Stub order returned by the lookup
pub const STUB_ORDER_AMOUNT: &str = "120.00";
pub const STUB_ORDER_NOTE: &str = "Order Ref #2024";
pub const STUB_ORDER_MOBILE: &str = "9876543210";

pub const MOBILE_DIGITS: usize = 10;

/// QR code render size in logical points
pub const QR_SIZE: f32 = 180.0;
