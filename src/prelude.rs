//! carbon-clusters prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::catalog;

#[doc(no_inline)]
pub use crate::clustering::Clusterer;

#[doc(no_inline)]
pub use crate::features::{FeatureVector, FEATURE_NAMES, N_FEATURES};

#[doc(no_inline)]
pub use crate::pipeline::Pipeline;

#[doc(no_inline)]
pub use crate::preprocessing::FeatureScaler;

#[doc(no_inline)]
pub use crate::reduction::Projector;

#[doc(no_inline)]
pub use crate::store::{ArtifactPaths, ArtifactStore};
