use chrono::NaiveDate;
use serde::Serialize;

/// Basis points, 10_000 = 100%.
const TAX_RATE_BP: i64 = 1_000;
const SERVICE_FEE_RATE_BP: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: i64,
    pub subtotal: i64,
    pub tax: i64,
    pub service_fee: i64,
    pub total: i64,
}

pub struct PricingService;

impl PricingService {
    /// Nights between check-in and check-out. A stay is never billed as
    /// zero nights, so missing, equal or inverted dates count as one.
    pub fn nights_between(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
        match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => {
                let nights = (check_out - check_in).num_days();
                if nights > 0 {
                    nights
                } else {
                    1
                }
            }
            _ => 1,
        }
    }

    /// Calculate the tax on a subtotal (10%)
    pub fn calculate_tax(subtotal: i64) -> i64 {
        percentage(subtotal, TAX_RATE_BP)
    }

    /// Calculate the service fee on a subtotal (5%)
    pub fn calculate_service_fee(subtotal: i64) -> i64 {
        percentage(subtotal, SERVICE_FEE_RATE_BP)
    }

    pub fn quote(nightly_rate: i64, nights: i64) -> Quote {
        let nights = nights.max(1);
        let subtotal = nightly_rate.saturating_mul(nights);
        let tax = Self::calculate_tax(subtotal);
        let service_fee = Self::calculate_service_fee(subtotal);

        Quote {
            nights,
            subtotal,
            tax,
            service_fee,
            total: subtotal.saturating_add(tax).saturating_add(service_fee),
        }
    }

    pub fn quote_stay(
        nightly_rate: i64,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> Quote {
        Self::quote(nightly_rate, Self::nights_between(check_in, check_out))
    }
}

// Rounds half up to the whole đồng. Widened so any i64 amount fits.
fn percentage(amount: i64, rate_bp: i64) -> i64 {
    let scaled = (i128::from(amount) * i128::from(rate_bp) + 5_000).div_euclid(10_000);
    i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX })
}
