/// `n` evenly spaced values from `lo` to `hi`, both ends included
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
            // Hardcode to avoid rounding drift at the end point
            values[n - 1] = hi;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn endpoints_included() {
        let values = linspace(0.01, 0.05, 20);
        assert_eq!(values.len(), 20);
        assert_eq!(values[0], 0.01);
        assert_eq!(values[19], 0.05);
    }

    #[test]
    fn evenly_spaced() {
        let values = linspace(0.7, 0.9, 20);
        assert!(
            values
                .iter()
                .tuple_windows()
                .all(|(a, b)| ((b - a) - 0.2 / 19.).abs() < 1e-12)
        );
    }

    #[test]
    fn degenerate_range() {
        let values = linspace(0.3, 0.3, 20);
        assert!(values.iter().all(|&v| v == 0.3));
    }

    #[test]
    fn small_counts() {
        assert!(linspace(0., 1., 0).is_empty());
        assert_eq!(linspace(0.5, 1., 1), vec![0.5]);
        assert_eq!(linspace(0., 1., 2), vec![0., 1.]);
    }
}
