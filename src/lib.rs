//! `carbon-clusters` assigns a country to one of three clusters given the
//! composition of its carbon emissions.
//!
//! The assignment is a fixed pipeline of three stages, each fitted offline and
//! loaded from disk at startup:
//!
//! 1. a [standard scaler](preprocessing::FeatureScaler) for the five raw features,
//! 2. a [linear projection](reduction::Projector) onto a few principal components,
//! 3. a [nearest-centroid assignment](clustering::Clusterer) against the k-means centroids.
//!
//! The [`ArtifactStore`](store::ArtifactStore) owns the three stages and hands out a
//! [`Pipeline`](pipeline::Pipeline) that runs them in sequence. The
//! [`catalog`] turns the resulting cluster index into a description.
//!
//! ```no_run
//! use carbon_clusters::prelude::*;
//!
//! let store = ArtifactStore::load(&ArtifactPaths::in_dir("artifacts"))?;
//! let features = FeatureVector::new(5.0, 0.6, 0.2, 0.1, 0.1);
//! let cluster = store.pipeline().run(&features)?;
//! println!("{}", catalog::describe(cluster));
//! # Ok::<(), carbon_clusters::Error>(())
//! ```

pub mod catalog;
pub mod clustering;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod prelude;
pub mod preprocessing;
pub mod reduction;
pub mod store;
pub mod traits;

pub use error::{Error, Result};
pub use features::FeatureVector;
