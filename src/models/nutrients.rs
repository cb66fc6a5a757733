use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Calories and macronutrients for some amount of food.
///
/// Used both for per-100g ingredient figures and for absolute amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Nutrients {
    pub fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_finite(&self) -> bool {
        self.calories.is_finite()
            && self.protein_g.is_finite()
            && self.carbs_g.is_finite()
            && self.fat_g.is_finite()
    }

    /// Every field multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, other: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, other: Nutrients) {
        *self = *self + other;
    }
}

impl Mul<f64> for Nutrients {
    type Output = Nutrients;

    fn mul(self, factor: f64) -> Nutrients {
        self.scaled(factor)
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrients::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_scale() {
        let a = Nutrients::new(100.0, 10.0, 20.0, 5.0);
        let b = Nutrients::new(50.0, 1.0, 2.0, 0.5);

        let sum = a + b;
        assert_eq!(sum, Nutrients::new(150.0, 11.0, 22.0, 5.5));

        let doubled = a * 2.0;
        assert_eq!(doubled, Nutrients::new(200.0, 20.0, 40.0, 10.0));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Nutrients = Vec::<Nutrients>::new().into_iter().sum();
        assert_eq!(total, Nutrients::zero());
    }
}
