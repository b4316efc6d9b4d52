//! # cobbleforge-core
//!
//! Attribute normalization for custom Cobblemon species.
//!
//! Turns a flat, partially-populated attribute bag ([`SpeciesAttributes`])
//! into a canonical [`SpeciesProfile`] with every cross-field default
//! resolved: `canLook` forced off when the model has no head bone, swim/fly
//! behaviour blocks gated on the movement flags, numeric fields filled with
//! fixed constants. Compound string fields (`"width,height"` hitboxes,
//! `"item:percentage"` drop lists) are parsed here so downstream document
//! synthesis only ever sees structured data.
//!
//! This crate performs no I/O. Advisory problems (unrecognized type names,
//! a missing evolution item) are returned as [`Warning`] values alongside
//! the profile; only structurally malformed input fails normalization.
//!
//! # Usage
//!
//! ```no_run
//! use cobbleforge_core::SpeciesAttributes;
//!
//! let mut attrs = SpeciesAttributes::new("Flamebird", 999);
//! attrs.primary_type = Some("fire".to_string());
//! attrs.can_fly = true;
//! let (profile, warnings) = attrs.normalize().unwrap();
//! assert_eq!(profile.id.as_str(), "flamebird");
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod normalize;
pub mod types;

pub use errors::ProfileError;
pub use normalize::{
    AdditionChanges, EvolutionMethod, EvolutionRequest, SpeciesAttributes, SpeciesPatch,
};
pub use types::*;
