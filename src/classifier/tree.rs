// CART decision tree for binary labels, grown on a bootstrap sample.
//
// Nodes live in a flat arena; children are indices into `nodes`.
// Leaves store the fraction of positive samples that reached them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Leaf {
        positive: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    /// 0 = unlimited.
    pub max_depth: usize,
    pub min_samples_split: usize,
    /// Features considered per split.
    pub max_features: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

struct Grower<'a> {
    data: &'a [Vec<f64>],
    labels: &'a [bool],
    params: TreeParams,
    n_features: usize,
    rng: &'a mut fastrand::Rng,
    nodes: Vec<Node>,
}

fn gini(positive: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let p = positive as f64 / total as f64;
    2.0 * p * (1.0 - p)
}

impl DecisionTree {
    /// Grows a tree over `samples` (row indices into `data`, repeats allowed).
    pub fn grow(
        data: &[Vec<f64>],
        labels: &[bool],
        samples: Vec<usize>,
        params: TreeParams,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let n_features = data.first().map_or(0, Vec::len);
        let mut grower = Grower {
            data,
            labels,
            params,
            n_features,
            rng,
            nodes: Vec::new(),
        };
        grower.build(samples, 0);
        Self {
            nodes: grower.nodes,
        }
    }

    /// Probability of the positive class for one feature vector.
    pub fn predict_positive(&self, x: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(Node::Leaf { positive }) => return *positive,
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = x.get(*feature).copied().unwrap_or(0.0);
                    idx = if value <= *threshold { *left } else { *right };
                }
                None => return 0.0,
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], idx: usize) -> usize {
            match nodes.get(idx) {
                Some(Node::Split { left, right, .. }) => {
                    1 + walk(nodes, *left).max(walk(nodes, *right))
                }
                _ => 0,
            }
        }
        walk(&self.nodes, 0)
    }
}

impl Grower<'_> {
    fn build(&mut self, samples: Vec<usize>, depth: usize) -> usize {
        let total = samples.len();
        let positives = samples.iter().filter(|&&i| self.labels[i]).count();
        let node_idx = self.nodes.len();
        let leaf = Node::Leaf {
            positive: if total == 0 {
                0.0
            } else {
                positives as f64 / total as f64
            },
        };

        let depth_reached = self.params.max_depth > 0 && depth >= self.params.max_depth;
        let pure = positives == 0 || positives == total;
        if depth_reached || pure || total < self.params.min_samples_split.max(2) {
            self.nodes.push(leaf);
            return node_idx;
        }

        let parent_impurity = gini(positives, total);
        let best = self
            .best_split(&samples)
            .filter(|s| s.impurity < parent_impurity);
        let Some(split) = best else {
            self.nodes.push(leaf);
            return node_idx;
        };

        let (left_samples, right_samples): (Vec<usize>, Vec<usize>) = samples
            .into_iter()
            .partition(|&i| self.data[i][split.feature] <= split.threshold);

        // Reserve the slot, children are filled in after recursion.
        self.nodes.push(leaf);
        let left = self.build(left_samples, depth + 1);
        let right = self.build(right_samples, depth + 1);
        self.nodes[node_idx] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        node_idx
    }

    fn candidate_features(&mut self) -> Vec<usize> {
        let mut features: Vec<usize> = (0..self.n_features).collect();
        self.rng.shuffle(&mut features);
        features.truncate(self.params.max_features.clamp(1, self.n_features.max(1)));
        features
    }

    fn best_split(&mut self, samples: &[usize]) -> Option<SplitCandidate> {
        let total = samples.len();
        let total_pos = samples.iter().filter(|&&i| self.labels[i]).count();
        let mut best: Option<SplitCandidate> = None;

        for feature in self.candidate_features() {
            let mut sorted: Vec<(f64, bool)> = samples
                .iter()
                .map(|&i| (self.data[i][feature], self.labels[i]))
                .collect();
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut left_pos = 0;
            for k in 0..total - 1 {
                if sorted[k].1 {
                    left_pos += 1;
                }
                let (value, next) = (sorted[k].0, sorted[k + 1].0);
                if value == next {
                    continue;
                }
                let left_n = k + 1;
                let right_n = total - left_n;
                let impurity = (left_n as f64 * gini(left_pos, left_n)
                    + right_n as f64 * gini(total_pos - left_pos, right_n))
                    / total as f64;

                if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                    best = Some(SplitCandidate {
                        feature,
                        threshold: (value + next) / 2.0,
                        impurity,
                    });
                }
            }
        }
        best
    }
}
