//! The metric-neo frontend/backend boundary.
//!
//! Everything the backend returns arrives as one [`Outcome`] envelope:
//!
//! ```
//! use metric_neo_bridge::Outcome;
//! use metric_neo_types::Profile;
//!
//! let outcome = Outcome::<Vec<Profile>>::from_raw(
//!     r#"{"success":true,"data":[{"id":"p1","name":"Match"}],"error":""}"#,
//! )
//! .unwrap();
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.items()[0].name, "Match");
//! ```
//!
//! - [`normalize`] turns transport input (text or parsed JSON) into a value
//! - [`Outcome`] hydrates the envelope, routing `data` through the entity
//!   catalog via [`Payload`]
//! - [`Operation`] names every backend binding and its return shape
//! - [`BridgeConfig`] selects the hydration policy
//!
//! Nothing here performs I/O except [`BridgeConfig::load`].

mod config;
mod normalize;
mod operation;
mod outcome;
mod payload;

pub use config::{BridgeConfig, CONFIG_FILE};
pub use normalize::{RawPayload, normalize};
pub use operation::{Operation, Response, ReturnShape, UnknownOperation};
pub use outcome::{MISSING_ERROR_MESSAGE, OperationError, Outcome};
pub use payload::Payload;

pub use metric_neo_model::{HydrationPolicy, Hydrator};
pub use metric_neo_types::{Error, Result};
