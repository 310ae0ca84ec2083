/// Outcome of [`binary_search_by_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// Index of an item whose key equals the searched value.
    /// With duplicate keys any of the matching indices may be returned.
    Found(usize),
    /// First index whose key is not less than the searched value
    NotFound(usize),
}

impl SearchResult {
    /// Index where scanning for keys `>= value` has to start
    pub fn insertion_index(self) -> usize {
        match self {
            SearchResult::Found(idx) | SearchResult::NotFound(idx) => idx,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// Single signed integer as used by older callers: the index if found, `-(insertion_point + 1)` otherwise
    pub fn encoded(self) -> isize {
        match self {
            SearchResult::Found(idx) => idx as isize,
            SearchResult::NotFound(idx) => -(idx as isize) - 1,
        }
    }

    pub fn from_encoded(value: isize) -> Self {
        if value >= 0 {
            SearchResult::Found(value as usize)
        } else {
            SearchResult::NotFound((-value - 1) as usize)
        }
    }
}

///
/// Classic bisection over `items`, which have to be sorted ascending by `key`.
/// Unsorted input yields an unspecified, but in-bounds, result.
///
pub fn binary_search_by_key<T, K: Ord>(
    items: &[T],
    value: K,
    mut key: impl FnMut(&T) -> K,
) -> SearchResult {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match key(&items[mid]).cmp(&value) {
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
            std::cmp::Ordering::Equal => return SearchResult::Found(mid),
        }
    }
    SearchResult::NotFound(low)
}
