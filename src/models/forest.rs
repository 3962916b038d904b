//! Bagged regression-tree ensemble
//!
//! A compact random-forest regressor: each tree is a CART regression tree
//! grown on a bootstrap resample of the training data, splits chosen by
//! variance reduction over all feature columns. The bootstrap draws come
//! from a seeded generator so forecasts are reproducible.

use crate::error::{ForecastError, Result};
use crate::features::FEATURE_COUNT;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// Ensemble hyperparameters
#[derive(Debug, Clone)]
pub struct ForestParams {
    /// Number of trees in the ensemble
    pub trees: usize,
    /// Seed for the bootstrap generator
    pub seed: u64,
    /// Maximum tree depth
    pub max_depth: usize,
    /// Minimum samples a node needs before it may split
    pub min_samples_split: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            trees: 100,
            seed: 42,
            max_depth: 16,
            min_samples_split: 2,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone)]
struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    fn fit(
        features: &[[f64; FEATURE_COUNT]],
        targets: &[f64],
        indices: &[usize],
        params: &ForestParams,
    ) -> Self {
        Self {
            root: grow(features, targets, indices, 0, params),
        }
    }

    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

fn mean_of(targets: &[f64], indices: &[usize]) -> f64 {
    let sum: f64 = indices.iter().map(|&i| targets[i]).sum();
    sum / indices.len() as f64
}

/// Best (feature, threshold, cost) split of the node, if any reduces the
/// summed squared error. Thresholds are midpoints between distinct adjacent
/// feature values in sorted order.
fn best_split(
    features: &[[f64; FEATURE_COUNT]],
    targets: &[f64],
    indices: &[usize],
) -> Option<(usize, f64, f64)> {
    let n = indices.len();
    let total_sum: f64 = indices.iter().map(|&i| targets[i]).sum();
    let total_sum_sq: f64 = indices.iter().map(|&i| targets[i] * targets[i]).sum();
    let node_cost = total_sum_sq - total_sum * total_sum / n as f64;

    let mut best: Option<(usize, f64, f64)> = None;

    for feature in 0..FEATURE_COUNT {
        let mut order = indices.to_vec();
        order.sort_unstable_by(|&a, &b| {
            features[a][feature]
                .partial_cmp(&features[b][feature])
                .unwrap_or(Ordering::Equal)
        });

        let mut left_sum = 0.0;
        let mut left_sum_sq = 0.0;

        for position in 0..n - 1 {
            let target = targets[order[position]];
            left_sum += target;
            left_sum_sq += target * target;

            let here = features[order[position]][feature];
            let next = features[order[position + 1]][feature];
            if here == next {
                continue;
            }

            let left_n = (position + 1) as f64;
            let right_n = (n - position - 1) as f64;
            let right_sum = total_sum - left_sum;
            let right_sum_sq = total_sum_sq - left_sum_sq;

            let cost = (left_sum_sq - left_sum * left_sum / left_n)
                + (right_sum_sq - right_sum * right_sum / right_n);

            if cost < best.map_or(node_cost, |(_, _, c)| c) {
                best = Some((feature, (here + next) / 2.0, cost));
            }
        }
    }

    best
}

fn grow(
    features: &[[f64; FEATURE_COUNT]],
    targets: &[f64],
    indices: &[usize],
    depth: usize,
    params: &ForestParams,
) -> Node {
    let value = mean_of(targets, indices);

    if depth >= params.max_depth || indices.len() < params.min_samples_split {
        return Node::Leaf { value };
    }

    let Some((feature, threshold, _)) = best_split(features, targets, indices) else {
        return Node::Leaf { value };
    };

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| features[i][feature] <= threshold);

    if left.is_empty() || right.is_empty() {
        return Node::Leaf { value };
    }

    Node::Split {
        feature,
        threshold,
        left: Box::new(grow(features, targets, &left, depth + 1, params)),
        right: Box::new(grow(features, targets, &right, depth + 1, params)),
    }
}

/// Fitted tree ensemble
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    trees: Vec<DecisionTree>,
}

impl RandomForestRegressor {
    /// Fit the ensemble on the given features and targets.
    pub fn fit(
        features: &[[f64; FEATURE_COUNT]],
        targets: &[f64],
        params: &ForestParams,
    ) -> Result<Self> {
        if features.is_empty() {
            return Err(ForecastError::InsufficientData(
                "Cannot fit forest on empty training set".to_string(),
            ));
        }
        if features.len() != targets.len() {
            return Err(ForecastError::DataError(format!(
                "Feature count ({}) doesn't match target count ({})",
                features.len(),
                targets.len()
            )));
        }
        if params.trees == 0 {
            return Err(ForecastError::InvalidParameter(
                "Ensemble needs at least one tree".to_string(),
            ));
        }

        let n = features.len();
        let mut rng = StdRng::seed_from_u64(params.seed);

        let trees = (0..params.trees)
            .map(|_| {
                let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                DecisionTree::fit(features, targets, &sample, params)
            })
            .collect();

        Ok(Self { trees })
    }

    /// Predict the target for one feature vector as the mean over all trees
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        sum / self.trees.len() as f64
    }

    /// Number of trees in the fitted ensemble
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}
