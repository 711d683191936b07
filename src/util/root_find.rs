use crate::error::SizingErr;

/// Given a predicate p(n) that is monotone in n (once true, true for every
/// larger n), finds the smallest n in [lower_bound, upper_bound] with
/// p(n) true. Returns None when p(upper_bound) is false.
pub fn root_find_discrete<F>(
    p: F,
    lower_bound: usize,
    upper_bound: usize,
) -> Result<Option<usize>, SizingErr>
where
    F: Fn(usize) -> Result<bool, SizingErr>,
{
    if lower_bound > upper_bound || !p(upper_bound)? {
        return Ok(None);
    }
    if p(lower_bound)? {
        return Ok(Some(lower_bound));
    }

    // Invariant: p(lower) is false, p(upper) is true
    let mut lower = lower_bound;
    let mut upper = upper_bound;
    while upper - lower > 1 {
        let mid = lower + (upper - lower) / 2;
        if p(mid)? {
            upper = mid;
        } else {
            lower = mid;
        }
    }
    Ok(Some(upper))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn basic_threshold() {
        let res = root_find_discrete(|n| Ok(n * n > 50), 0, 100)
            .expect("failed to perform discrete root find");
        assert_eq!(res, Some(8));
    }

    #[test]
    fn true_at_lower_bound() {
        let res = root_find_discrete(|n| Ok(n >= 2), 2, 10).unwrap();
        assert_eq!(res, Some(2));
    }

    #[test]
    fn true_only_at_upper_bound() {
        let res = root_find_discrete(|n| Ok(n >= 10), 2, 10).unwrap();
        assert_eq!(res, Some(10));
    }

    #[test]
    fn never_true() {
        let res = root_find_discrete(|n| Ok(n > 1_000), 2, 999).unwrap();
        assert_eq!(res, None);
    }

    #[test]
    fn empty_range() {
        let res = root_find_discrete(|_| Ok(true), 5, 4).unwrap();
        assert_eq!(res, None);
    }

    #[test]
    fn logarithmic_evaluations() {
        let calls = Cell::new(0);
        let res = root_find_discrete(
            |n| {
                calls.set(calls.get() + 1);
                Ok(n >= 3_217)
            },
            2,
            4_999,
        )
        .unwrap();
        assert_eq!(res, Some(3_217));
        assert!(calls.get() <= 16);
    }
}
