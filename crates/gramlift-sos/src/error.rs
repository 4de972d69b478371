//! Errors raised while building SOS problems.

use thiserror::Error;

/// Errors from the Gram-matrix lift.
#[derive(Clone, Debug, Error)]
pub enum SosError {
    /// The monomial basis cannot reproduce some monomial of the target
    /// polynomial as a product of two basis elements.
    #[error("basis insufficient: no basis pair produces monomial {monomial}")]
    BasisInsufficient {
        /// Rendering of the unreachable monomial.
        monomial: String,
    },

    /// An empty basis was supplied.
    #[error("monomial basis is empty")]
    EmptyBasis,
}
