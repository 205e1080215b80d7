use std::collections::HashMap;
use std::hash::Hash;

/// Maps arbitrary class labels onto dense indices `0..number_of_classes`,
/// in first-seen order.
///
/// Split criteria only ever see class distributions (`Vec<f64>` indexed by
/// class), so labels are encoded once up front.
#[derive(Debug, Clone)]
pub struct LabelEncoder<L> {
    classes: Vec<L>,
    index_of: HashMap<L, usize>,
}

impl<L: Eq + Hash + Clone> LabelEncoder<L> {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            index_of: HashMap::new(),
        }
    }

    /// Encodes a whole label vector in a single pass.
    pub fn fit(labels: &[L]) -> (Self, Vec<usize>) {
        let mut encoder = Self::new();
        let encoded = labels.iter().map(|l| encoder.encode(l)).collect();
        (encoder, encoded)
    }

    pub fn encode(&mut self, label: &L) -> usize {
        if let Some(&idx) = self.index_of.get(label) {
            return idx;
        }
        let idx = self.classes.len();
        self.classes.push(label.clone());
        self.index_of.insert(label.clone(), idx);
        idx
    }

    pub fn class_at(&self, index: usize) -> Option<&L> {
        self.classes.get(index)
    }

    pub fn number_of_classes(&self) -> usize {
        self.classes.len()
    }
}

impl<L: Eq + Hash + Clone> Default for LabelEncoder<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-class counts over the selected encoded labels.
pub fn class_distribution<I>(classes: I, number_of_classes: usize) -> Vec<f64>
where
    I: IntoIterator<Item = usize>,
{
    let mut distribution = vec![0.0; number_of_classes];
    for class in classes {
        if class >= distribution.len() {
            distribution.resize(class + 1, 0.0);
        }
        distribution[class] += 1.0;
    }
    distribution
}
