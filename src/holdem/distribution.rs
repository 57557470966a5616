use crate::core::Category;

/// How many board completions ended in each hand category.
///
/// Distributions over disjoint sets of completions can be combined with
/// `merge`, which is a per category sum.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandDistribution {
    /// Indexed by `Category::index`.
    counts: [u64; 9],
    /// Total number of completions evaluated.
    total: u64,
}

impl HandDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completion that ended in `category`.
    #[inline]
    pub fn add(&mut self, category: Category) {
        self.counts[category.index()] += 1;
        self.total += 1;
    }

    /// Sum two tallies.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Category;
    /// use holdem_odds::holdem::HandDistribution;
    ///
    /// let mut a = HandDistribution::new();
    /// a.add(Category::Flush);
    /// let mut b = HandDistribution::new();
    /// b.add(Category::Flush);
    /// b.add(Category::OnePair);
    ///
    /// let both = a.merge(b);
    /// assert_eq!(3, both.total());
    /// assert_eq!(2, both.count(Category::Flush));
    /// ```
    pub fn merge(mut self, other: HandDistribution) -> HandDistribution {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self.total += other.total;
        self
    }

    pub fn count(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Percentage (0.0 - 100.0) of completions that ended in `category`.
    pub fn percentage(&self, category: Category) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.count(category) as f64 / self.total as f64) * 100.0
    }

    /// Every category with its count and percentage, weakest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Category, u64, f64)> + '_ {
        Category::ALL
            .iter()
            .map(move |&c| (c, self.count(c), self.percentage(c)))
    }

    /// Every category with its count and percentage, strongest first.
    pub fn iter_strongest_first(&self) -> impl Iterator<Item = (Category, u64, f64)> + '_ {
        self.iter().rev()
    }

    /// The category that came up the most. Ties go to the stronger one.
    pub fn most_likely(&self) -> Option<Category> {
        if self.total == 0 {
            return None;
        }
        Category::ALL
            .iter()
            .copied()
            .max_by_key(|c| self.count(*c))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_empty() {
        let dist = HandDistribution::new();
        assert_eq!(0, dist.total());
        assert_eq!(0.0, dist.percentage(Category::Flush));
        assert_eq!(None, dist.most_likely());
    }

    #[test]
    fn test_percentages() {
        let mut dist = HandDistribution::new();
        for _ in 0..3 {
            dist.add(Category::OnePair);
        }
        dist.add(Category::Straight);

        assert_eq!(4, dist.total());
        assert_relative_eq!(75.0, dist.percentage(Category::OnePair));
        assert_relative_eq!(25.0, dist.percentage(Category::Straight));
        assert_eq!(Some(Category::OnePair), dist.most_likely());

        let sum: f64 = dist.iter().map(|(_, _, pct)| pct).sum();
        assert_relative_eq!(100.0, sum);
    }

    #[test]
    fn test_iter_orders() {
        let dist = HandDistribution::new();
        let weakest: Vec<Category> = dist.iter().map(|(c, _, _)| c).collect();
        assert_eq!(Category::ALL.to_vec(), weakest);

        let strongest: Vec<Category> = dist.iter_strongest_first().map(|(c, _, _)| c).collect();
        assert_eq!(Some(&Category::StraightFlush), strongest.first());
        assert_eq!(Some(&Category::HighCard), strongest.last());
    }

    #[test]
    fn test_merge_is_associative() {
        let mut a = HandDistribution::new();
        a.add(Category::HighCard);
        let mut b = HandDistribution::new();
        b.add(Category::TwoPair);
        b.add(Category::TwoPair);
        let mut c = HandDistribution::new();
        c.add(Category::FullHouse);

        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        assert_eq!(left, right);
        assert_eq!(4, left.total());
    }

    #[test]
    fn test_most_likely_tie_goes_stronger() {
        let mut dist = HandDistribution::new();
        dist.add(Category::OnePair);
        dist.add(Category::Flush);
        assert_eq!(Some(Category::Flush), dist.most_likely());
    }
}
