//! Normalization errors.
//!
//! These are the only local-validation failures that abort a synthesis run;
//! everything else is downgraded to a [`crate::types::Warning`].

/// Errors produced while normalizing a species attribute bag.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The species name was empty or whitespace-only.
    #[error("species name must not be empty")]
    EmptyName,

    /// A hitbox string was not in `"width,height"` form.
    #[error("malformed hitbox {value:?}: expected \"width,height\" (e.g. \"2,2\")")]
    MalformedHitbox {
        /// The offending input string.
        value: String,
    },

    /// A drop entry carried a non-numeric percentage.
    #[error("malformed drop percentage in {segment:?}: expected \"item:percentage\"")]
    MalformedDropPercentage {
        /// The offending `item:percentage` segment.
        segment: String,
    },

    /// An evolution request named no target species.
    #[error("evolution target must not be empty")]
    EmptyEvolutionTarget,
}
