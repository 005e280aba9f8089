/// Union-find over the indices `0..len`, with union by size and path
/// compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    component_count: usize,
}

impl DisjointSet {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            parent: (0..item_count).collect(),
            size: vec![1; item_count],
            component_count: item_count,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Representative of the component containing `x`. Every node on the
    /// walked path is re-pointed straight at the root.
    ///
    /// # Panics
    ///
    /// If `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Joins the components of `a` and `b`. Returns false if they were
    /// already one component.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        self.component_count -= 1;
        true
    }

    pub fn is_connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Size of every component, largest first.
    pub fn component_sizes(&self) -> Vec<usize> {
        // only roots carry an up-to-date size
        let mut sizes: Vec<usize> = (0..self.len())
            .filter(|&i| self.parent[i] == i)
            .map(|root| self.size[root])
            .collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn starts_as_singletons() {
        let mut dsu = DisjointSet::new(4);
        assert_eq!(dsu.component_count(), 4);
        for i in 0..4 {
            assert_eq!(dsu.find(i), i);
            assert_eq!(dsu.component_size(i), 1);
        }
        assert_eq!(dsu.component_sizes(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn empty_set_has_no_components() {
        let dsu = DisjointSet::new(0);
        assert!(dsu.is_empty());
        assert_eq!(dsu.component_count(), 0);
        assert!(dsu.component_sizes().is_empty());
    }

    #[test]
    fn self_union_is_a_no_op() {
        let mut dsu = DisjointSet::new(3);
        assert!(!dsu.union(1, 1));
        assert_eq!(dsu.component_count(), 3);
    }

    #[test]
    fn redundant_union_returns_false() {
        let mut dsu = DisjointSet::new(3);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(1, 2));
        assert!(!dsu.union(2, 0));
        assert_eq!(dsu.component_count(), 1);
        assert_eq!(dsu.component_size(0), 3);
    }

    #[test]
    fn smaller_component_goes_under_larger() {
        let mut dsu = DisjointSet::new(5);
        dsu.union(0, 1);
        dsu.union(0, 2);
        let big_root = dsu.find(0);
        dsu.union(3, big_root);
        assert_eq!(dsu.find(3), big_root);
        assert_eq!(dsu.component_sizes(), vec![4, 1]);
    }

    #[test]
    fn long_chain_is_compressed() {
        let n = 100_000;
        let mut dsu = DisjointSet::new(n);
        // attach one singleton at a time so every root changes hands only once
        for i in 1..n {
            dsu.union(i, i - 1);
        }
        let root = dsu.find(n - 1);
        for i in 0..n {
            assert_eq!(dsu.find(i), root);
        }
        assert_eq!(dsu.component_count(), 1);
    }

    #[quickcheck]
    fn count_tracks_successful_unions(n: u8, unions: Vec<(u8, u8)>) -> bool {
        let n = usize::from(n % 32) + 1;
        let mut dsu = DisjointSet::new(n);
        let mut merged = 0;
        for (a, b) in unions {
            let (a, b) = (usize::from(a) % n, usize::from(b) % n);
            if dsu.union(a, b) {
                merged += 1;
            }
            if dsu.component_count() != n - merged {
                return false;
            }
        }
        dsu.component_sizes().iter().sum::<usize>() == n
    }

    #[quickcheck]
    fn find_is_idempotent(n: u8, unions: Vec<(u8, u8)>) -> bool {
        let n = usize::from(n % 32) + 1;
        let mut dsu = DisjointSet::new(n);
        for (a, b) in unions {
            dsu.union(usize::from(a) % n, usize::from(b) % n);
        }
        (0..n).all(|x| {
            let root = dsu.find(x);
            dsu.find(root) == root
        })
    }
}
