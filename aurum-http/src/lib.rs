//! aurum-http
//!
//! reqwest-backed connectors implementing `AurumConnector`:
//!
//! | connector            | capability | credential            |
//! |----------------------|------------|-----------------------|
//! | [`GoldApiConnector`]   | price      | `GOLDAPI_KEY`         |
//! | [`CoinGeckoConnector`] | price      | none (`COINGECKO_API_KEY` optional) |
//! | [`GeminiConnector`]    | chat       | `GEMINI_API_KEY`      |
//! | [`NewsApiConnector`]   | news       | `NEWS_API_KEY`        |
//!
//! A connector without its credential reports `is_configured() == false` and
//! is skipped by the orchestrator.
#![warn(missing_docs)]

mod coingecko;
mod gemini;
mod goldapi;
mod http;
mod newsapi;

pub use coingecko::CoinGeckoConnector;
pub use gemini::GeminiConnector;
pub use goldapi::GoldApiConnector;
pub use http::DEFAULT_TIMEOUT;
pub use newsapi::NewsApiConnector;
