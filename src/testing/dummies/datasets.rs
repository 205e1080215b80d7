/// Feature 0 is constant; feature 1 separates the classes at 2.5.
pub fn constant_and_varying() -> (Vec<Vec<f64>>, Vec<u8>) {
    let x = vec![
        vec![7.0, 1.0],
        vec![7.0, 2.0],
        vec![7.0, 3.0],
        vec![7.0, 4.0],
    ];
    (x, vec![0, 0, 1, 1])
}

/// Both features separate the two rows perfectly.
pub fn tie_between_features() -> (Vec<Vec<f64>>, Vec<u8>) {
    (vec![vec![1.0, 10.0], vec![2.0, 20.0]], vec![0, 1])
}

/// One feature where the thresholds 1.5 and 3.5 score the same.
pub fn tied_thresholds() -> (Vec<Vec<f64>>, Vec<u8>) {
    let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
    (x, vec![0, 1, 1, 0])
}

/// Three classes with 10/6/4 members, row-aligned features.
pub fn imbalanced_three_class() -> (Vec<Vec<f64>>, Vec<&'static str>) {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (label, count) in [("a", 10), ("b", 6), ("c", 4)] {
        for _ in 0..count {
            let i = x.len() as f64;
            x.push(vec![i, i * 0.5]);
            y.push(label);
        }
    }
    (x, y)
}
