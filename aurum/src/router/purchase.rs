use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use aurum_core::{
    AurumError, PurchaseEstimate, PurchaseRequest, QuantityUnit, TROY_OUNCE_GRAMS, validate,
};

use crate::Aurum;

/// FNV-1a over the normalized email; stable across builds and platforms.
fn email_bucket(email: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    email
        .trim()
        .to_lowercase()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME))
        % 10_000
}

fn purchase_id(email: &str, at: DateTime<Utc>) -> String {
    format!("GOLD_{}_{:04}", at.format("%Y%m%d_%H%M%S"), email_bucket(email))
}

/// Estimated cost of `quantity` at `spot` per troy ounce, premium included.
///
/// A quantity whose cost is not representable is reported against `quantity`.
pub(crate) fn estimate_cost(
    req: &PurchaseRequest,
    spot: Decimal,
) -> Result<Decimal, AurumError> {
    let ounces = match req.gold_type.unit() {
        QuantityUnit::Grams => req.quantity / TROY_OUNCE_GRAMS,
        QuantityUnit::TroyOunces => req.quantity,
    };
    ounces
        .checked_mul(spot)
        .and_then(|d| d.checked_mul(Decimal::ONE + req.gold_type.premium()))
        .map(|d| d.round_dp(2))
        .ok_or_else(|| AurumError::validation("quantity", "too large"))
}

impl Aurum {
    /// Estimate a gold purchase and pick the partner to redirect to.
    ///
    /// No transaction is executed. The request is validated in full before the
    /// price chain runs.
    ///
    /// # Errors
    /// Returns `AurumError::Validation` naming the first invalid field, or
    /// `quantity` when the cost overflows.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "aurum::router",
            skip(self, req),
            fields(gold_type = %req.gold_type, quantity = %req.quantity),
        )
    )]
    pub async fn estimate_purchase(
        &self,
        req: PurchaseRequest,
    ) -> Result<PurchaseEstimate, AurumError> {
        validate::purchase(&req)?;

        let quote = self.price().await;
        let spot = quote.spot_price_usd_per_oz;
        let cost = estimate_cost(&req, spot)?;
        let unit = req.gold_type.unit();
        let within_budget = req.budget.map(|b| cost <= b);
        let redirect_url = req.gold_type.redirect_url().to_string();

        let mut message = format!(
            "Estimated cost for {} {} of {} gold: ${cost:.2} (spot ${spot:.2}/oz via {}). \
             Continue your purchase at {redirect_url}",
            req.quantity.normalize(),
            unit.label(),
            req.gold_type,
            quote.source,
        );
        match (within_budget, req.budget) {
            (Some(false), Some(b)) => {
                message.push_str(&format!(". This exceeds your budget of ${b:.2}"));
            }
            (Some(true), _) => message.push_str(". This is within your budget"),
            _ => {}
        }

        #[cfg(feature = "tracing")]
        tracing::info!(cost = %cost, source = %quote.source, "purchase estimated");

        Ok(PurchaseEstimate {
            purchase_id: purchase_id(&req.email, Utc::now()),
            estimated_cost: cost,
            redirect_url,
            gold_type: req.gold_type,
            quantity: req.quantity,
            unit,
            unit_price: spot,
            price_source: quote.source,
            within_budget,
            message,
        })
    }
}
