/// Tracks which stops still have to be visited.
#[derive(Debug, Clone)]
pub struct Unvisited {
    visited: Vec<bool>,
    remaining: usize,
}

impl Unvisited {
    pub fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            remaining: n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn contains(&self, index: usize) -> bool {
        self.visited.get(index).is_some_and(|visited| !visited)
    }

    pub fn mark_visited(&mut self, index: usize) {
        if let Some(slot) = self.visited.get_mut(index) {
            if !*slot {
                *slot = true;
                self.remaining -= 1;
            }
        }
    }

    /// Unvisited indices paired with their value in `values`, in ascending index order.
    /// Entries that are absent or not a number are not candidates.
    pub fn candidates<'a, I>(&'a self, values: I) -> impl Iterator<Item = (usize, f64)> + 'a
    where
        I: IntoIterator<Item = Option<f64>> + 'a,
        I::IntoIter: 'a,
    {
        values
            .into_iter()
            .enumerate()
            .filter(move |&(index, _)| self.contains(index))
            .filter_map(|(index, value)| value.filter(|v| !v.is_nan()).map(|v| (index, v)))
    }
}

/// First minimum in scan order: on ties the lowest index wins.
pub fn first_minimum(candidates: impl IntoIterator<Item = (usize, f64)>) -> Option<(usize, f64)> {
    candidates.into_iter().fold(None, |best, (index, value)| match best {
        Some((_, best_value)) if value >= best_value => best,
        _ => Some((index, value)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_minimum_prefers_lowest_index_on_ties() {
        let picked = first_minimum(vec![(0, 3.0), (1, 1.0), (2, 1.0), (3, 2.0)]);
        assert_eq!(picked, Some((1, 1.0)));
    }

    #[test]
    fn first_minimum_of_nothing_is_none() {
        assert_eq!(first_minimum(Vec::new()), None);
    }

    #[test]
    fn candidates_skip_visited_absent_and_nan_entries() {
        let mut unvisited = Unvisited::new(4);
        unvisited.mark_visited(0);
        let row = vec![Some(0.5), None, Some(f64::NAN), Some(2.0)];

        let found: Vec<(usize, f64)> = unvisited.candidates(row).collect();
        assert_eq!(found, vec![(3, 2.0)]);
    }

    #[test]
    fn marking_twice_counts_once() {
        let mut unvisited = Unvisited::new(2);
        unvisited.mark_visited(1);
        unvisited.mark_visited(1);
        assert_eq!(unvisited.remaining(), 1);
        assert!(unvisited.contains(0));
        assert!(!unvisited.contains(1));
        assert!(!unvisited.contains(5));
    }
}
