use crate::disjoint_set::DisjointSet;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Exact squared Euclidean distance. Saturates instead of wrapping for
    /// coordinates near the ends of `i64`.
    pub fn distance_squared(&self, other: &Point) -> u128 {
        let axis = |a: i64, b: i64| {
            let delta = (i128::from(a) - i128::from(b)).unsigned_abs();
            delta * delta
        };
        axis(self.x, other.x)
            .saturating_add(axis(self.y, other.y))
            .saturating_add(axis(self.z, other.z))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Two point indices, `i < j`, and the squared distance between them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pair {
    pub i: usize,
    pub j: usize,
    pub distance: u128,
}

/// What the connection limit of [`connect_closest`] counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum Counting {
    /// Only unions that joined two separate components.
    #[default]
    Successful,
    /// Every pair examined, even when both ends were already connected.
    Attempted,
}

impl std::fmt::Display for Counting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Successful => write!(f, "successful"),
            Self::Attempted => write!(f, "attempted"),
        }
    }
}

impl std::str::FromStr for Counting {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "successful" => Ok(Self::Successful),
            "attempted" => Ok(Self::Attempted),
            _ => Err(s.to_owned()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConnectionBudget {
    pub limit: usize,
    pub counting: Counting,
}

impl Default for ConnectionBudget {
    fn default() -> Self {
        Self {
            limit: 1000,
            counting: Counting::Successful,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NotEnoughPoints(usize),
    NotEnoughComponents { wanted: usize, found: usize },
    NeverConnected { components_left: usize },
    Overflow,
}

#[rustfmt::skip]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughPoints(count)
                => write!(f, "need at least 2 points to connect, got {}", count),
            Self::NotEnoughComponents { wanted, found }
                => write!(f, "wanted the {} largest circuits but only {} exist", wanted, found),
            Self::NeverConnected { components_left }
                => write!(f, "ran out of pairs with {} circuits still apart", components_left),
            Self::Overflow => write!(f, "product of circuit sizes overflowed"),
        }
    }
}

/// Both answers for one set of points. Each is worked out on its own, so
/// too few circuits for the first still leaves the second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answers {
    pub largest_product: Result<u64, Error>,
    pub bridging_product: Result<i128, Error>,
}

/// Every unordered pair of `points`, closest first. Equal distances are
/// ordered by index so the order is total.
pub fn sorted_pairs(points: &[Point]) -> Vec<Pair> {
    let n = points.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            pairs.push(Pair {
                i,
                j,
                distance: a.distance_squared(b),
            });
        }
    }
    pairs.sort_unstable_by_key(|p| (p.distance, p.i, p.j));
    pairs
}

/// Unions `pairs` in order until the budget is spent or the pairs run out.
pub fn connect_closest(
    point_count: usize,
    pairs: &[Pair],
    budget: ConnectionBudget,
) -> DisjointSet {
    let mut circuits = DisjointSet::new(point_count);
    let mut spent = 0;
    for pair in pairs {
        if spent >= budget.limit {
            break;
        }
        let merged = circuits.union(pair.i, pair.j);
        if merged || budget.counting == Counting::Attempted {
            spent += 1;
        }
    }
    if spent < budget.limit {
        log::warn!(
            "pairs ran out after {} of {} {} connections",
            spent,
            budget.limit,
            budget.counting
        );
    }
    circuits
}

/// Product of the `top` largest entries of `sizes`, which must be sorted
/// largest first.
pub fn largest_components_product(sizes: &[usize], top: usize) -> Result<u64, Error> {
    if sizes.len() < top {
        return Err(Error::NotEnoughComponents {
            wanted: top,
            found: sizes.len(),
        });
    }
    sizes[..top].iter().try_fold(1u64, |product, &size| {
        u64::try_from(size)
            .ok()
            .and_then(|size| product.checked_mul(size))
            .ok_or(Error::Overflow)
    })
}

/// The pair whose union leaves a single component.
pub fn bridging_pair(point_count: usize, pairs: &[Pair]) -> Result<Pair, Error> {
    if point_count < 2 {
        return Err(Error::NotEnoughPoints(point_count));
    }
    let mut circuits = DisjointSet::new(point_count);
    for pair in pairs {
        if circuits.union(pair.i, pair.j) && circuits.component_count() == 1 {
            return Ok(*pair);
        }
    }
    Err(Error::NeverConnected {
        components_left: circuits.component_count(),
    })
}

pub fn solve(points: &[Point], budget: ConnectionBudget, top: usize) -> Result<Answers, Error> {
    if points.len() < 2 {
        return Err(Error::NotEnoughPoints(points.len()));
    }
    let sort_start = std::time::Instant::now();
    let pairs = sorted_pairs(points);
    log::debug!("sorted {} pairs in {:?}", pairs.len(), sort_start.elapsed());

    let circuits = connect_closest(points.len(), &pairs, budget);
    let sizes = circuits.component_sizes();
    log::debug!("{} circuits after the bounded pass", sizes.len());
    let largest_product = largest_components_product(&sizes, top);

    let bridging_product = bridging_pair(points.len(), &pairs).map(|bridge| {
        let (a, b) = (points[bridge.i], points[bridge.j]);
        log::debug!("bridging pair is {} and {}", a, b);
        i128::from(a.x) * i128::from(b.x)
    });
    Ok(Answers {
        largest_product,
        bridging_product,
    })
}
