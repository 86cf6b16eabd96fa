// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CART classification trees.
//!
//! Trees are stored as a flat arena of nodes. Node 0 is the root. A split
//! node sends a sample left when its feature value is less than or equal to
//! the threshold, and right otherwise. Classes are dense indices assigned by
//! the caller.

use croprec_domain::FEATURE_COUNT;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Growth limits for a single tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Number of randomly chosen features examined at each split.
    pub max_features: usize,
    /// Nodes with fewer samples than this become leaves.
    pub min_samples_split: usize,
    /// Maximum depth; `None` grows until leaves are pure.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Best split found for one node.
struct Candidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

/// Borrowed training data shared by every node of one tree.
struct Training<'a> {
    features: &'a [[f64; FEATURE_COUNT]],
    targets: &'a [usize],
    n_classes: usize,
    params: &'a TreeParams,
}

/// A fitted classification tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Grows a tree on the samples selected by `indices`.
    ///
    /// `indices` may repeat entries (bootstrap samples). Each split examines
    /// `params.max_features` features drawn from `rng`; if none of them can
    /// separate the node, the remaining features are examined too.
    ///
    /// # Arguments
    ///
    /// * `features` - Feature rows for the whole training set
    /// * `targets` - Class index of each row, below `n_classes`
    /// * `n_classes` - Number of distinct classes
    /// * `indices` - Rows this tree trains on; must not be empty
    /// * `params` - Growth limits
    /// * `rng` - Source of feature sampling randomness
    #[must_use]
    pub fn fit(
        features: &[[f64; FEATURE_COUNT]],
        targets: &[usize],
        n_classes: usize,
        indices: &[usize],
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> Self {
        let training: Training<'_> = Training {
            features,
            targets,
            n_classes,
            params,
        };
        let mut tree: Self = Self { nodes: Vec::new() };
        tree.grow(&training, indices.to_vec(), 0, rng);
        tree
    }

    /// Predicts the class index for one feature row.
    #[must_use]
    pub fn predict(&self, sample: &[f64; FEATURE_COUNT]) -> usize {
        let mut id: usize = 0;
        loop {
            match &self.nodes[id] {
                Node::Leaf { class } => return *class,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if sample[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Total number of nodes.
    #[must_use]
    pub const fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes.
    #[must_use]
    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }

    /// Length of the longest root-to-leaf path, in edges.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest: usize = 0;
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Node::Split { left, right, .. } = &self.nodes[id] {
                stack.push((*left, depth + 1));
                stack.push((*right, depth + 1));
            }
        }
        deepest
    }

    fn grow(
        &mut self,
        training: &Training<'_>,
        indices: Vec<usize>,
        depth: usize,
        rng: &mut StdRng,
    ) -> usize {
        let id: usize = self.nodes.len();
        let counts: Vec<usize> = class_counts(training, &indices);
        let majority: usize = majority_class(&counts);
        self.nodes.push(Node::Leaf { class: majority });

        let is_pure: bool = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let too_small: bool = indices.len() < training.params.min_samples_split;
        let too_deep: bool = training.params.max_depth.is_some_and(|max| depth >= max);
        if is_pure || too_small || too_deep {
            return id;
        }

        let Some(candidate) = find_split(training, &indices, &counts, rng) else {
            return id;
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| training.features[i][candidate.feature] <= candidate.threshold);

        let left: usize = self.grow(training, left_idx, depth + 1, rng);
        let right: usize = self.grow(training, right_idx, depth + 1, rng);
        self.nodes[id] = Node::Split {
            feature: candidate.feature,
            threshold: candidate.threshold,
            left,
            right,
        };
        id
    }
}

fn class_counts(training: &Training<'_>, indices: &[usize]) -> Vec<usize> {
    let mut counts: Vec<usize> = vec![0; training.n_classes];
    for &i in indices {
        counts[training.targets[i]] += 1;
    }
    counts
}

/// Index of the largest count; ties go to the lowest index.
pub fn majority_class(counts: &[usize]) -> usize {
    let mut best: usize = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}

#[allow(clippy::cast_precision_loss)]
fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total: f64 = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p: f64 = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn find_split(
    training: &Training<'_>,
    indices: &[usize],
    counts: &[usize],
    rng: &mut StdRng,
) -> Option<Candidate> {
    let mut order: [usize; FEATURE_COUNT] = std::array::from_fn(|i| i);
    order.shuffle(rng);

    let max_features: usize = training.params.max_features.clamp(1, FEATURE_COUNT);
    let mut best: Option<Candidate> = None;

    for (examined, &feature) in order.iter().enumerate() {
        if examined >= max_features && best.is_some() {
            break;
        }
        let Some(candidate) = best_split_on(training, indices, counts, feature) else {
            continue;
        };
        if best
            .as_ref()
            .is_none_or(|b| candidate.impurity < b.impurity)
        {
            best = Some(candidate);
        }
    }

    best
}

/// Finds the lowest weighted Gini impurity threshold for one feature.
#[allow(clippy::cast_precision_loss)]
fn best_split_on(
    training: &Training<'_>,
    indices: &[usize],
    counts: &[usize],
    feature: usize,
) -> Option<Candidate> {
    let mut sorted: Vec<(f64, usize)> = indices
        .iter()
        .map(|&i| (training.features[i][feature], training.targets[i]))
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let total: usize = sorted.len();
    let mut left: Vec<usize> = vec![0; training.n_classes];
    let mut right: Vec<usize> = counts.to_vec();
    let mut best: Option<Candidate> = None;

    for pos in 0..total.saturating_sub(1) {
        let (value, class) = sorted[pos];
        left[class] += 1;
        right[class] -= 1;

        let next: f64 = sorted[pos + 1].0;
        if value >= next {
            continue;
        }

        let n_left: usize = pos + 1;
        let n_right: usize = total - n_left;
        let impurity: f64 = (n_left as f64).mul_add(
            gini(&left, n_left),
            n_right as f64 * gini(&right, n_right),
        ) / total as f64;

        if best.as_ref().is_none_or(|b| impurity < b.impurity) {
            let mut threshold: f64 = value.midpoint(next);
            if threshold >= next {
                threshold = value;
            }
            best = Some(Candidate {
                feature,
                threshold,
                impurity,
            });
        }
    }

    best
}
