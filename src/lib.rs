//! # whodat
//!
//! Host-testable core behind the two whodat demo pages:
//!
//! - a "who's that Pokémon?" reveal flow that pulls a random entry from a
//!   remote catalog (PokeAPI) and shows it as a silhouette until revealed;
//! - a toy pricing calculator that turns a base price, a percentage reduction
//!   and a shipping cost into a sell price at a fixed profit margin.
//!
//! Nothing in here touches the DOM or a concrete HTTP client. The browser app
//! (`whodat_web`) and the terminal companion (`whodat_cli`) plug their own
//! transport in through [`catalog::HttpGet`].
//!
//! ## Quick Start
//!
//! ```
//! use whodat::prelude::*;
//!
//! let inputs = PricingInputs::new(100.0, 10.0, 5.0);
//! assert_eq!(inputs.final_price(), 190.0);
//!
//! let mut flow = RevealFlow::new();
//! let ticket = flow.begin_fetch();
//! let item = CatalogItem::new(25, "pikachu", "https://img.example/25.png");
//! assert!(flow.finish_fetch(ticket, Ok(item)));
//! assert!(!flow.is_revealed());
//! assert!(flow.reveal());
//! ```
//!
//! ## Modules
//!
//! - [`pricing`]: sell-price formula and the one-point chart series
//! - [`catalog`]: catalog URLs, response parsing, random pick
//! - [`reveal`]: loading / ready / failed state with stale-response guard
//! - [`prng`]: small seedable generator for uniform index draws
//! - [`float_fmt`]: fixed-decimal number rendering
//! - [`config`]: serde-backed configuration
//! - [`error`]: fetch error taxonomy

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/float_fmt.rs"]
pub mod float_fmt;

#[path = "core/pricing.rs"]
pub mod pricing;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/reveal.rs"]
pub mod reveal;

/// Prelude module for convenient imports.
///
/// ```
/// use whodat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{fetch_random_item, CatalogApi, CatalogEntry, CatalogItem, HttpGet};
    pub use crate::config::{AppConfig, CatalogConfig};
    pub use crate::error::FetchError;
    pub use crate::float_fmt::fmt_f64_fixed;
    pub use crate::pricing::{
        parse_numeric_input, ChartPoint, PriceField, PriceSheet, PricingInputs, PROFIT_MARGIN,
    };
    pub use crate::prng::Prng;
    pub use crate::reveal::{FetchTicket, RevealFlow, RevealPhase};
}
