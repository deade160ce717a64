// delay.rs - Building power-up order
//
// Decorrelates the window animation sweep from left-to-right table
// order: a Fisher-Yates shuffle driven by the same mix constant as the
// FG window hash, then inverted so each building knows its rank.

use crate::math::mix;

use super::windows::FG_MIX;

/// Shuffled rank per building index. A bijection over [0, n) for any n;
/// n = 0 gives an empty vec.
pub fn delay_order(n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut i = n.saturating_sub(1);
    while i > 0 {
        let j = (mix(i as u32, FG_MIX) % (i as u32 + 1)) as usize;
        indices.swap(i, j);
        i -= 1;
    }

    // indices[rank] holds a building; invert to building -> rank
    let mut order = vec![0usize; n];
    for (rank, &bldg) in indices.iter().enumerate() {
        order[bldg] = rank;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_bijective() {
        for n in 0..=32 {
            let order = delay_order(n);
            assert_eq!(order.len(), n);
            let mut seen = vec![false; n];
            for &rank in &order {
                assert!(rank < n);
                assert!(!seen[rank]);
                seen[rank] = true;
            }
        }
    }

    #[test]
    fn permutation_is_stable() {
        assert_eq!(delay_order(11), delay_order(11));
    }

    #[test]
    fn shuffle_is_not_the_identity() {
        let order = delay_order(11);
        assert!(order.iter().enumerate().any(|(i, &r)| i != r));
    }
}
