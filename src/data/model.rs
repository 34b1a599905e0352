// ---------------------------------------------------------------------------
// SampleTable – one measurement series
// ---------------------------------------------------------------------------

/// Paired age/mass measurements for one animal, in file order.
///
/// Tables written by the generator have strictly increasing, evenly spaced
/// ages; loaded tables keep whatever order the file had.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    /// Age axis in months.
    pub ages: Vec<f64>,
    /// Mass axis in pounds – same length as `ages`.
    pub masses: Vec<f64>,
}

impl SampleTable {
    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.ages.len()
    }

    /// Whether the table holds no measurements.
    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Iterate `(age, mass)` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.ages.iter().copied().zip(self.masses.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_pairs_columns_in_order() {
        let table = SampleTable {
            ages: vec![0.0, 2.5, 5.0],
            masses: vec![264.0, 364.0, 464.0],
        };
        let pairs: Vec<(f64, f64)> = table.points().collect();
        assert_eq!(pairs, vec![(0.0, 264.0), (2.5, 364.0), (5.0, 464.0)]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }
}
