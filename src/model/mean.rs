use super::Prototype;
use serde::{Deserialize, Serialize};

/// Cluster model that stores a mean for the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanModel<V> {
    mean: V,
}

impl<V> MeanModel<V> {
    pub fn new(mean: V) -> Self {
        Self { mean }
    }

    pub fn mean(&self) -> &V {
        &self.mean
    }

    pub fn into_mean(self) -> V {
        self.mean
    }
}

impl<V> Prototype for MeanModel<V> {
    type Vector = V;

    fn prototype(&self) -> &V {
        &self.mean
    }

    fn prototype_type(&self) -> &'static str {
        "Mean"
    }
}
