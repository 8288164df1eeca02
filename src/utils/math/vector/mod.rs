use num::{Float, NumCast};

/// ZeroSpVec is a sparse vector that treats zero as the implicit element.
/// It holds `inds` and `vals`:
/// `inds` keeps the dimension index of each stored element,
/// `vals` keeps the element value.
///
/// Elements are guaranteed to be sorted by ascending index, with no
/// duplicate index and no stored zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Float,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Float + Into<f64>,
{
    /// All-zero vector of dimension `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Values at the same index are summed, zeros are dropped.
    ///
    /// # Panics
    /// If an index is out of `0..len`.
    pub fn from_pairs(len: usize, mut pairs: Vec<(u32, N)>) -> Self {
        pairs.sort_unstable_by_key(|&(idx, _)| idx);
        let mut inds: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut vals: Vec<N> = Vec::with_capacity(pairs.len());
        for (idx, val) in pairs {
            assert!((idx as usize) < len, "index {idx} out of range for dimension {len}");
            match inds.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = vals.last_mut() {
                        *v = *v + val;
                    }
                }
                _ => {
                    inds.push(idx);
                    vals.push(val);
                }
            }
        }
        let mut vec = Self { inds, vals, len };
        vec.drop_zeros();
        vec
    }

    fn drop_zeros(&mut self) {
        if self.vals.iter().all(|v| !v.is_zero()) {
            return;
        }
        let (inds, vals): (Vec<u32>, Vec<N>) = self
            .inds
            .iter()
            .zip(self.vals.iter())
            .filter(|(_, v)| !v.is_zero())
            .map(|(&i, &v)| (i, v))
            .unzip();
        self.inds = inds;
        self.vals = vals;
    }

    /// Dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-zero elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.inds.is_empty()
    }

    /// Value at `index`, zero when not stored
    pub fn get(&self, index: u32) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// Iterate over stored `(index, value)` pairs in index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (u32, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    /// Euclidean norm, accumulated in f64
    pub fn norm(&self) -> f64 {
        self.vals
            .iter()
            .map(|&v| {
                let v: f64 = v.into();
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit length. A zero vector stays zero.
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        if norm > 0.0 {
            if let Some(norm) = <N as NumCast>::from(norm) {
                for v in self.vals.iter_mut() {
                    *v = *v / norm;
                }
            }
        }
        self
    }

    /// Dot product by merge-joining the sorted index lists.
    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.len, other.len, "dot product of vectors with different dimensions");
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f64;
        while i < self.inds.len() && j < other.inds.len() {
            let (a, b) = (self.inds[i], other.inds[j]);
            if a == b {
                let x: f64 = self.vals[i].into();
                let y: f64 = other.vals[j].into();
                sum += x * y;
                i += 1;
                j += 1;
            } else if a < b {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_merges_and_drops_zeros() {
        let v = ZeroSpVec::<f64>::from_pairs(6, vec![(4, 1.0), (1, 2.0), (4, 0.5), (2, 0.0)]);
        assert_eq!(v.len(), 6);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.raw_iter().collect::<Vec<_>>(), vec![(1, 2.0), (4, 1.5)]);
        assert_eq!(v.get(2), 0.0);
        assert_eq!(v.get(4), 1.5);
    }

    #[test]
    #[should_panic]
    fn from_pairs_rejects_out_of_range_index() {
        ZeroSpVec::<f32>::from_pairs(2, vec![(2, 1.0)]);
    }

    #[test]
    fn normalize_gives_unit_norm() {
        let mut v = ZeroSpVec::<f64>::from_pairs(3, vec![(0, 3.0), (2, 4.0)]);
        assert_eq!(v.norm(), 5.0);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn normalize_keeps_zero_vector() {
        let mut v = ZeroSpVec::<f32>::new(4);
        v.normalize();
        assert!(v.is_zero());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = ZeroSpVec::<f64>::from_pairs(5, vec![(0, 1.0), (2, 2.0), (4, 3.0)]);
        let b = ZeroSpVec::<f64>::from_pairs(5, vec![(1, 5.0), (2, 4.0), (4, 1.0)]);
        assert_eq!(a.dot(&b), 11.0);
        assert_eq!(b.dot(&a), 11.0);
    }

    #[test]
    fn dot_of_unit_vectors_is_cosine() {
        let mut a = ZeroSpVec::<f64>::from_pairs(3, vec![(0, 1.0), (1, 1.0)]);
        let mut b = ZeroSpVec::<f64>::from_pairs(3, vec![(1, 2.0)]);
        a.normalize();
        b.normalize();
        assert!((a.dot(&b) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((a.dot(&a) - 1.0).abs() < 1e-12);
        assert_eq!(a.dot(&ZeroSpVec::new(3)), 0.0);
    }
}
