use std::fmt;

use crate::domain::model::FlowerRecord;
use crate::utils::error::{BouquetError, Result};

/// 花束：保持插入順序並同步維護總價
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bouquet {
    flowers: Vec<FlowerRecord>,
    total_cost: f64,
}

impl Bouquet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_flower(&mut self, flower: FlowerRecord) {
        self.total_cost += flower.cost;
        self.flowers.push(flower);
    }

    /// Stable: flowers with equal freshness keep their relative order.
    pub fn sort_by_freshness_desc(&mut self) {
        self.flowers
            .sort_by(|a, b| b.freshness_level.cmp(&a.freshness_level));
    }

    /// Returns the first flower, in current order, whose stem length lies in
    /// `[min, max]`.
    pub fn find_by_stem_length(&self, min: i32, max: i32) -> Result<&FlowerRecord> {
        self.flowers
            .iter()
            .find(|f| f.stem_length >= min && f.stem_length <= max)
            .ok_or(BouquetError::NotFound { min, max })
    }

    pub fn flowers(&self) -> &[FlowerRecord] {
        &self.flowers
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlowerRecord> {
        self.flowers.iter()
    }

    pub fn into_flowers(self) -> Vec<FlowerRecord> {
        self.flowers
    }
}

impl FromIterator<FlowerRecord> for Bouquet {
    fn from_iter<I: IntoIterator<Item = FlowerRecord>>(iter: I) -> Self {
        let mut bouquet = Bouquet::new();
        for flower in iter {
            bouquet.add_flower(flower);
        }
        bouquet
    }
}

impl From<Vec<FlowerRecord>> for Bouquet {
    fn from(flowers: Vec<FlowerRecord>) -> Self {
        flowers.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Bouquet {
    type Item = &'a FlowerRecord;
    type IntoIter = std::slice::Iter<'a, FlowerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Bouquet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bouquet contains:")?;
        for flower in &self.flowers {
            writeln!(f, "{}", flower)?;
        }
        writeln!(f, "Total cost: {}", self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bouquet() -> Bouquet {
        let mut bouquet = Bouquet::new();
        bouquet.add_flower(FlowerRecord::rose(5.0, 7, 40));
        bouquet.add_flower(FlowerRecord::tulip(3.0, 5, 30));
        bouquet.add_flower(FlowerRecord::lily(4.0, 8, 35));
        bouquet
    }

    fn names(bouquet: &Bouquet) -> Vec<&str> {
        bouquet.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_add_flower_to_bouquet() {
        let mut bouquet = Bouquet::new();
        bouquet.add_flower(FlowerRecord::rose(5.0, 7, 40));
        assert_eq!(bouquet.len(), 1);
        assert_eq!(bouquet.total_cost(), 5.0);
    }

    #[test]
    fn test_total_cost_tracks_every_add() {
        let costs = [0.1, 2.25, 3.0, 0.0, 7.75];
        let mut bouquet = Bouquet::new();
        for (i, cost) in costs.iter().enumerate() {
            bouquet.add_flower(FlowerRecord::new(format!("F{}", i), *cost, 1, 1));
            let expected: f64 = costs[..=i].iter().sum();
            assert!((bouquet.total_cost() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sort_by_freshness() {
        let mut bouquet = sample_bouquet();
        bouquet.sort_by_freshness_desc();
        assert_eq!(names(&bouquet), vec!["Lily", "Rose", "Tulip"]);
        assert_eq!(bouquet.total_cost(), 12.0);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut bouquet: Bouquet = vec![
            FlowerRecord::new("A", 1.0, 3, 10),
            FlowerRecord::new("B", 1.0, 9, 10),
            FlowerRecord::new("C", 1.0, 3, 10),
            FlowerRecord::new("D", 1.0, 9, 10),
            FlowerRecord::new("E", 1.0, 3, 10),
        ]
        .into();

        bouquet.sort_by_freshness_desc();
        assert_eq!(names(&bouquet), vec!["B", "D", "A", "C", "E"]);

        for pair in bouquet.flowers().windows(2) {
            assert!(pair[0].freshness_level >= pair[1].freshness_level);
        }
    }

    #[test]
    fn test_find_flower_by_stem_length() {
        let bouquet = sample_bouquet();
        let found = bouquet.find_by_stem_length(30, 40).unwrap();
        assert_eq!(found.name, "Rose");
    }

    #[test]
    fn test_find_uses_current_order() {
        let mut bouquet = sample_bouquet();
        bouquet.sort_by_freshness_desc();
        assert_eq!(bouquet.find_by_stem_length(30, 40).unwrap().name, "Lily");
        assert_eq!(bouquet.find_by_stem_length(30, 30).unwrap().name, "Tulip");
    }

    #[test]
    fn test_find_not_found() {
        let bouquet = sample_bouquet();
        match bouquet.find_by_stem_length(41, 100) {
            Err(BouquetError::NotFound { min, max }) => {
                assert_eq!((min, max), (41, 100));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(Bouquet::new().find_by_stem_length(0, i32::MAX).is_err());
    }

    #[test]
    fn test_collect_keeps_total_cost() {
        let bouquet: Bouquet = sample_bouquet().into_flowers().into_iter().collect();
        assert_eq!(bouquet.total_cost(), 12.0);
        assert_eq!(bouquet.len(), 3);
    }

    #[test]
    fn test_display_bouquet() {
        let mut bouquet = Bouquet::new();
        bouquet.add_flower(FlowerRecord::rose(5.0, 7, 40));
        bouquet.add_flower(FlowerRecord::new("Daisy", 2.5, 5, 25));

        assert_eq!(
            bouquet.to_string(),
            "Bouquet contains:\n\
             Flower: Rose, Cost: 5, Freshness: 7, Stem Length: 40\n\
             Flower: Daisy, Cost: 2.5, Freshness: 5, Stem Length: 25\n\
             Total cost: 7.5\n"
        );
    }
}
