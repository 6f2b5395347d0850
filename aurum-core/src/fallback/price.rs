use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::{Decimal, RoundingStrategy};

use aurum_types::{AurumError, FallbackConfig, ProviderError};

use crate::connector::{AurumConnector, PriceProvider};
use crate::payload::PricePayload;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// One step of the bounded random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticWalk {
    /// Price the step started from.
    pub anchor: Decimal,
    /// Resulting spot price.
    pub spot: Decimal,
    /// `spot - anchor`.
    pub change_abs: Decimal,
    /// `change_abs / anchor * 100`, rounded to 2 dp.
    pub change_pct: Decimal,
    /// Upper bound of the derived day range.
    pub day_high: Decimal,
    /// Lower bound of the derived day range.
    pub day_low: Decimal,
}

/// Synthetic gold price generator.
///
/// Walks from the last provider-sourced price (see [`SyntheticPrice::observe`])
/// or from the configured baseline when none has been seen. The perturbation
/// is bounded by `max_perturbation_pct` of the anchor and truncated toward
/// zero at cent precision, so `|spot - anchor| <= anchor * pct / 100` holds
/// exactly.
pub struct SyntheticPrice {
    baseline: Decimal,
    max_pct: Decimal,
    range_pct: Decimal,
    anchor: Mutex<Option<Decimal>>,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for SyntheticPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntheticPrice")
            .field("baseline", &self.baseline)
            .field("max_pct", &self.max_pct)
            .field("range_pct", &self.range_pct)
            .finish_non_exhaustive()
    }
}

fn check(cfg: &FallbackConfig) -> Result<(), AurumError> {
    if cfg.baseline_price.round_dp(2) <= Decimal::ZERO {
        return Err(AurumError::InvalidArg(
            "fallback baseline_price must be at least one cent".into(),
        ));
    }
    if cfg.max_perturbation_pct < Decimal::ZERO || cfg.max_perturbation_pct >= Decimal::from(50) {
        return Err(AurumError::InvalidArg(
            "fallback max_perturbation_pct must be in [0, 50)".into(),
        ));
    }
    if cfg.day_range_pct < Decimal::ZERO || cfg.day_range_pct >= Decimal::from(50) {
        return Err(AurumError::InvalidArg(
            "fallback day_range_pct must be in [0, 50)".into(),
        ));
    }
    Ok(())
}

impl SyntheticPrice {
    fn with_rng(cfg: &FallbackConfig, rng: StdRng) -> Result<Self, AurumError> {
        check(cfg)?;
        Ok(Self {
            baseline: cfg.baseline_price.round_dp(2),
            max_pct: cfg.max_perturbation_pct,
            range_pct: cfg.day_range_pct,
            anchor: Mutex::new(None),
            rng: Mutex::new(rng),
        })
    }

    /// Reproducible generator.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the configuration is out of range.
    pub fn seeded(cfg: &FallbackConfig, seed: u64) -> Result<Self, AurumError> {
        Self::with_rng(cfg, StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the configuration is out of range.
    pub fn from_entropy(cfg: &FallbackConfig) -> Result<Self, AurumError> {
        Self::with_rng(cfg, StdRng::from_os_rng())
    }

    /// Build from config, honouring `cfg.seed` when set.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the configuration is out of range.
    pub fn from_config(cfg: &FallbackConfig) -> Result<Self, AurumError> {
        match cfg.seed {
            Some(seed) => Self::seeded(cfg, seed),
            None => Self::from_entropy(cfg),
        }
    }

    /// Remember a provider-sourced spot price as the next anchor.
    pub fn observe(&self, spot: Decimal) {
        let spot = spot.round_dp(2);
        if spot > Decimal::ZERO {
            *self.anchor.lock().unwrap_or_else(PoisonError::into_inner) = Some(spot);
        }
    }

    /// Current anchor: the last observed price or the baseline.
    pub fn anchor(&self) -> Decimal {
        self.anchor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .unwrap_or(self.baseline)
    }

    /// Take one step of the walk.
    ///
    /// An anchor too large for the perturbation arithmetic yields a flat step.
    pub fn generate(&self) -> SyntheticWalk {
        let anchor = self.anchor();
        let u: f64 = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(-1.0..=1.0);
        let u = Decimal::from_f64_retain(u).unwrap_or_default().round_dp(6);

        let (spot, change_abs) = anchor
            .checked_mul(self.max_pct)
            .and_then(|d| d.checked_div(HUNDRED))
            .and_then(|d| d.checked_mul(u))
            .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::ToZero))
            .and_then(|change| Some((anchor.checked_add(change)?, change)))
            .unwrap_or((anchor, Decimal::ZERO));
        let spread = self.range_pct / HUNDRED;
        let scaled = |factor: Decimal| spot.checked_mul(factor).map_or(spot, |d| d.round_dp(2));

        SyntheticWalk {
            anchor,
            spot,
            change_abs,
            change_pct: change_abs
                .checked_div(anchor)
                .and_then(|d| d.checked_mul(HUNDRED))
                .unwrap_or_default()
                .round_dp(2),
            day_high: scaled(Decimal::ONE + spread),
            day_low: scaled(Decimal::ONE - spread),
        }
    }
}

#[async_trait]
impl PriceProvider for SyntheticPrice {
    async fn spot_price(&self) -> Result<PricePayload, ProviderError> {
        Ok(PricePayload::Synthetic(self.generate()))
    }
}

impl AurumConnector for SyntheticPrice {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn vendor(&self) -> &'static str {
        "aurum"
    }

    fn is_fallback(&self) -> bool {
        true
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self)
    }
}
