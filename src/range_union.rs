/// Closed interval of integers: both `start` and `end` belong to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InclusiveRange {
    pub start: i64,
    pub end: i64,
}

#[allow(clippy::len_without_is_empty)]
impl InclusiveRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.start <= id && id <= self.end
    }

    /// Number of integers in the range. Assumes `start <= end`. The full
    /// `i64` range holds 2^64 integers, hence `u128`.
    pub fn len(&self) -> u128 {
        u128::from(self.end.abs_diff(self.start)) + 1
    }
}

impl From<std::ops::RangeInclusive<i64>> for InclusiveRange {
    fn from(value: std::ops::RangeInclusive<i64>) -> Self {
        Self::new(*value.start(), *value.end())
    }
}

impl std::fmt::Display for InclusiveRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Ranges in the order they were loaded. Overlaps are kept until someone asks
/// for [`RangeUnion::merged`].
#[derive(Default, Debug, Clone)]
pub struct RangeUnion {
    ranges: Vec<InclusiveRange>,
}

impl RangeUnion {
    pub fn push(&mut self, range: impl Into<InclusiveRange>) {
        self.ranges.push(range.into());
    }

    pub fn extend(&mut self, ranges: impl IntoIterator<Item = InclusiveRange>) {
        for range in ranges {
            self.push(range);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InclusiveRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether any loaded range covers `id`.
    pub fn contains(&self, id: i64) -> bool {
        is_covered(id, &self.ranges)
    }

    /// How many of `ids` are covered. Repeated ids count every time.
    pub fn count_covered<'a>(&self, ids: impl IntoIterator<Item = &'a i64>) -> usize {
        ids.into_iter().filter(|&&id| self.contains(id)).count()
    }

    pub fn merged(&self) -> Vec<InclusiveRange> {
        merge_ranges(&self.ranges)
    }

    /// Smallest range holding every loaded range, if any were loaded.
    pub fn span(&self) -> Option<InclusiveRange> {
        let start = self.into_iter().map(|range| range.start).min()?;
        let end = self.into_iter().map(|range| range.end).max()?;
        Some(InclusiveRange::new(start, end))
    }

    /// Number of distinct integers covered by at least one range.
    pub fn covered_count(&self) -> u128 {
        self.merged().iter().map(InclusiveRange::len).sum()
    }
}

impl FromIterator<InclusiveRange> for RangeUnion {
    fn from_iter<T: IntoIterator<Item = InclusiveRange>>(iter: T) -> Self {
        let mut result = Self::default();
        result.extend(iter);
        result
    }
}

impl<'it> IntoIterator for &'it RangeUnion {
    type Item = &'it InclusiveRange;
    type IntoIter = std::slice::Iter<'it, InclusiveRange>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn is_covered(id: i64, ranges: &[InclusiveRange]) -> bool {
    ranges.iter().any(|range| range.contains(id))
}

/// Sorts by start and folds overlapping or touching ranges together, so
/// `1-5` and `6-10` come out as the single segment `1-10`.
pub fn merge_ranges(ranges: &[InclusiveRange]) -> Vec<InclusiveRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|range| range.start);
    let mut sorted = sorted.into_iter();
    let Some(first) = sorted.next() else {
        return vec![];
    };
    let mut merged = vec![first];
    for range in sorted {
        let last = merged.len() - 1;
        if range.start <= merged[last].end.saturating_add(1) {
            merged[last].end = merged[last].end.max(range.end);
        } else {
            merged.push(range);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn ranges(pairs: &[(i64, i64)]) -> Vec<InclusiveRange> {
        pairs.iter().map(|&(s, e)| InclusiveRange::new(s, e)).collect()
    }

    #[test]
    fn empty_union_covers_nothing() {
        let union = RangeUnion::default();
        assert!(!union.contains(0));
        assert_eq!(union.count_covered(&[1, 2, 3]), 0);
        assert_eq!(union.covered_count(), 0);
        assert!(union.merged().is_empty());
    }

    #[test]
    fn touching_ranges_merge() {
        assert_eq!(merge_ranges(&ranges(&[(1, 5), (6, 10)])), ranges(&[(1, 10)]));
    }

    #[test]
    fn gap_of_one_keeps_ranges_apart() {
        assert_eq!(
            merge_ranges(&ranges(&[(7, 10), (1, 5)])),
            ranges(&[(1, 5), (7, 10)])
        );
    }

    #[test]
    fn contained_range_does_not_shrink_segment() {
        assert_eq!(
            merge_ranges(&ranges(&[(1, 20), (3, 4), (21, 22)])),
            ranges(&[(1, 22)])
        );
    }

    #[test]
    fn duplicate_starts_keep_the_longest() {
        assert_eq!(
            merge_ranges(&ranges(&[(3, 5), (3, 9), (3, 4)])),
            ranges(&[(3, 9)])
        );
    }

    #[test]
    fn range_at_the_top_of_i64_does_not_overflow() {
        let merged = merge_ranges(&ranges(&[(i64::MAX - 1, i64::MAX), (i64::MAX, i64::MAX)]));
        assert_eq!(merged, ranges(&[(i64::MAX - 1, i64::MAX)]));
        assert_eq!(merged[0].len(), 2);
    }

    #[test]
    fn whole_i64_range_counts_every_integer() {
        let mut union = RangeUnion::default();
        union.push(i64::MIN..=i64::MAX);
        union.push(-3..=3);
        assert_eq!(union.merged(), ranges(&[(i64::MIN, i64::MAX)]));
        assert_eq!(union.covered_count(), 1u128 << 64);
        assert_eq!(union.count_covered(&[i64::MIN, 0, i64::MAX]), 3);
    }

    #[test]
    fn span_covers_gaps() {
        let mut union = RangeUnion::default();
        assert_eq!(union.span(), None);
        union.push(10..=12);
        union.push(-4..=-1);
        union.push(3..=5);
        assert_eq!(union.span(), Some(InclusiveRange::new(-4, 12)));
        assert_eq!(union.covered_count(), 3 + 4 + 3);
    }

    #[test]
    fn coverage_and_count() {
        let union: RangeUnion = ranges(&[(1, 3), (5, 8)]).into_iter().collect();
        assert_eq!(union.count_covered(&[2, 4, 6]), 2);
        assert_eq!(union.covered_count(), 7);
    }

    #[test]
    fn overlapping_ranges_count_once() {
        let union: RangeUnion = ranges(&[(3, 5), (10, 14), (16, 20), (12, 18)])
            .into_iter()
            .collect();
        assert_eq!(union.covered_count(), 14);
        assert_eq!(union.count_covered(&[1, 5, 8, 11, 17, 32]), 3);
    }

    fn small_ranges(raw: Vec<(i8, u8)>) -> Vec<InclusiveRange> {
        raw.into_iter()
            .map(|(start, width)| {
                let start = i64::from(start);
                InclusiveRange::new(start, start + i64::from(width % 16))
            })
            .collect()
    }

    #[quickcheck]
    fn merging_twice_changes_nothing(raw: Vec<(i8, u8)>) -> bool {
        let once = merge_ranges(&small_ranges(raw));
        merge_ranges(&once) == once
    }

    #[quickcheck]
    fn merged_segments_are_sorted_and_separated(raw: Vec<(i8, u8)>) -> bool {
        merge_ranges(&small_ranges(raw))
            .windows(2)
            .all(|w| w[0].end + 1 < w[1].start)
    }

    #[quickcheck]
    fn merged_count_matches_brute_force(raw: Vec<(i8, u8)>) -> bool {
        let ranges = small_ranges(raw);
        let brute_force = (-200..=200)
            .filter(|&id| is_covered(id, &ranges))
            .count() as u128;
        let union: RangeUnion = ranges.into_iter().collect();
        union.covered_count() == brute_force
    }
}
