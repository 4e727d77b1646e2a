use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_TOKENIZATION_ENDPOINT: &str = "https://api.stripe.com/v1/tokens";
pub const DEFAULT_SUBSCRIPTION_STUB_DELAY_MS: u64 = 1000;

pub const PAYMENT_SERVICE_ERROR: &str = "Payment service error. Try again later.";
pub const SERVER_ERROR: &str = "Server error. Try again later.";
pub const SUBMISSION_INTERRUPTED: &str = "Submission interrupted. Try again.";

pub const SERVICE_PRICE: Decimal = dec!(10.00);
pub const SERVICE_PERIOD: &str = "month";

pub const IDEMPOTENCY_HEADER: &str = "X-Idempotency-Key";
