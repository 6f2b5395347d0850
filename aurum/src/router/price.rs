use std::sync::PoisonError;

use chrono::Utc;

use aurum_core::{Capability, PriceQuote, PriceSource, ProviderError, normalize};

use crate::Aurum;

impl Aurum {
    /// Fetch the gold spot price.
    ///
    /// Behavior:
    /// - Tries price providers in priority order, each bounded by the provider timeout.
    /// - The first valid quote wins; provider quotes also re-anchor the synthetic walk.
    /// - When every provider fails or is unconfigured the synthetic walk answers,
    ///   so this never fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "aurum::router", skip(self))
    )]
    pub async fn price(&self) -> PriceQuote {
        let won = self
            .first_success(Capability::Price, |c| {
                c.as_price_provider()?;
                Some(async move {
                    let name = c.name();
                    let p = c
                        .as_price_provider()
                        .ok_or_else(|| ProviderError::malformed(name, "missing price capability"))?;
                    let payload = p.spot_price().await?;
                    payload.validate(name)?;
                    normalize::price(payload, name, Utc::now())
                })
            })
            .await;

        let quote = match won {
            Some((c, quote)) => {
                if !c.is_fallback() {
                    self.synthetic.observe(quote.spot_price_usd_per_oz);
                }
                quote
            }
            None => self.synthetic_quote(),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            source = %quote.source,
            spot = %quote.spot_price_usd_per_oz,
            "gold price resolved"
        );
        *self
            .last_price_source
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(quote.source.clone());
        quote
    }

    /// Direct synthetic step for an exhausted chain.
    fn synthetic_quote(&self) -> PriceQuote {
        let walk = self.synthetic.generate();
        PriceQuote {
            spot_price_usd_per_oz: walk.spot,
            change_24h_abs: walk.change_abs,
            change_24h_pct: walk.change_pct,
            day_high: Some(walk.day_high),
            day_low: Some(walk.day_low),
            source: PriceSource::Synthetic,
            observed_at: Utc::now(),
        }
    }
}
