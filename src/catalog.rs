//! Human readable descriptions of the clusters

/// Number of clusters the artifacts are fitted with
pub const N_CLUSTERS: usize = 3;

/// Returned by [`describe`] for an index without a description
pub const UNKNOWN_CLUSTER: &str = "Cluster tidak diketahui";

const DESCRIPTIONS: [&str; N_CLUSTERS] = [
    "🔵 Cluster 0: Negara dengan emisi karbon rendah dan konsumsi energi rendah.",
    "🟢 Cluster 1: Negara dengan emisi karbon sedang dan konsumsi energi moderat.",
    "🔴 Cluster 2: Negara dengan emisi karbon tinggi dan konsumsi energi tinggi.",
];

/// Description of cluster `index`, or [`UNKNOWN_CLUSTER`] if `index >= N_CLUSTERS`
pub fn describe(index: usize) -> &'static str {
    DESCRIPTIONS.get(index).copied().unwrap_or(UNKNOWN_CLUSTER)
}

/// All `(index, description)` pairs in index order
pub fn clusters() -> impl Iterator<Item = (usize, &'static str)> {
    DESCRIPTIONS.iter().copied().enumerate()
}
