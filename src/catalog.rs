//! Unit catalog - the fixed table of categories and their units
//!
//! Every unit carries an affine transform to its category's base unit, so a
//! conversion only ever needs two lookups instead of a pairwise table.

/// Affine mapping from a unit's value to its category's base unit:
/// `base = (value + shift) * num / den`.
///
/// Keeping the scale as a ratio lets Fahrenheit round-trip its fixed points
/// exactly, where a pre-divided `5/9` would be off by an ulp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub num: f64,
    pub den: f64,
    pub shift: f64,
}

impl Transform {
    /// Pure scale factor (length, time, volume)
    pub const fn linear(scale: f64) -> Self {
        Self { num: scale, den: 1.0, shift: 0.0 }
    }

    pub const fn affine(num: f64, den: f64, shift: f64) -> Self {
        Self { num, den, shift }
    }

    /// Unit value -> base value
    pub fn apply(&self, value: f64) -> f64 {
        (value + self.shift) * self.num / self.den
    }

    /// Base value -> unit value. `num` and `den` are never zero for catalog units.
    pub fn invert(&self, base: f64) -> f64 {
        base * self.den / self.num - self.shift
    }
}

/// A named unit within a category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub label: &'static str,
    pub transform: Transform,
}

impl Unit {
    const fn new(label: &'static str, transform: Transform) -> Self {
        Self { label, transform }
    }
}

// =============================================================================
// UNIT TABLES - first entry of each table is the base unit
// =============================================================================

static TEMPERATURE_UNITS: [Unit; 3] = [
    Unit::new("Celsius", Transform::linear(1.0)),
    Unit::new("Fahrenheit", Transform::affine(5.0, 9.0, -32.0)),
    Unit::new("Kelvin", Transform::affine(1.0, 1.0, -273.15)),
];

static LENGTH_UNITS: [Unit; 5] = [
    Unit::new("Meters", Transform::linear(1.0)),
    Unit::new("Kilometers", Transform::linear(1000.0)),
    Unit::new("Feet", Transform::linear(0.3048)),
    Unit::new("Yards", Transform::linear(0.9144)),
    Unit::new("Miles", Transform::linear(1609.344)),
];

static TIME_UNITS: [Unit; 3] = [
    Unit::new("Seconds", Transform::linear(1.0)),
    Unit::new("Minutes", Transform::linear(60.0)),
    Unit::new("Hours", Transform::linear(3600.0)),
];

// Liters are the base unit here, so it is the second table entry
static VOLUME_UNITS: [Unit; 5] = [
    Unit::new("Milliliters", Transform::linear(0.001)),
    Unit::new("Liters", Transform::linear(1.0)),
    Unit::new("Cups", Transform::linear(0.24)), // metric cup
    Unit::new("Pints", Transform::linear(0.473176473)), // US liquid pint
    Unit::new("Gallons", Transform::linear(3.785411784)), // US liquid gallon
];

/// Unit category. Discriminants are the category's position in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Temperature,
    Length,
    Time,
    Volume,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Temperature,
        Category::Length,
        Category::Time,
        Category::Volume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Time => "Time",
            Category::Volume => "Volume",
        }
    }

    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Temperature => &TEMPERATURE_UNITS,
            Category::Length => &LENGTH_UNITS,
            Category::Time => &TIME_UNITS,
            Category::Volume => &VOLUME_UNITS,
        }
    }

    pub fn unit(self, index: usize) -> Option<&'static Unit> {
        self.units().get(index)
    }

    /// The unit whose transform is the identity
    pub fn base_unit(self) -> &'static Unit {
        match self {
            Category::Volume => &VOLUME_UNITS[1],
            _ => &self.units()[0],
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn categories_are_in_picker_order() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Temperature", "Length", "Time", "Volume"]);
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(Category::ALL.len()), None);
    }

    #[test]
    fn every_category_has_invertible_uniquely_labelled_units() {
        for category in Category::ALL {
            let units = category.units();
            assert!(!units.is_empty(), "{} has no units", category.name());

            let labels: HashSet<_> = units.iter().map(|u| u.label).collect();
            assert_eq!(labels.len(), units.len(), "duplicate label in {}", category.name());

            for unit in units {
                let t = unit.transform;
                assert!(t.num != 0.0 && t.den != 0.0, "{} is not invertible", unit.label);
                assert!(t.num.is_finite() && t.den.is_finite() && t.shift.is_finite());
            }
        }
    }

    #[test]
    fn base_unit_has_identity_transform() {
        for category in Category::ALL {
            let base = category.base_unit();
            assert_eq!(base.transform, Transform::linear(1.0), "{}", category.name());
        }
        assert_eq!(Category::Volume.base_unit().label, "Liters");
        assert_eq!(Category::Temperature.base_unit().label, "Celsius");
    }

    #[test]
    fn scale_only_categories_have_no_offset() {
        for category in [Category::Length, Category::Time, Category::Volume] {
            assert!(category.units().iter().all(|u| u.transform.shift == 0.0));
        }
    }

    #[test]
    fn transform_invert_undoes_apply() {
        let fahrenheit = Category::Temperature.unit(1).unwrap().transform;
        assert_eq!(fahrenheit.apply(32.0), 0.0);
        assert_eq!(fahrenheit.apply(212.0), 100.0);
        assert_eq!(fahrenheit.invert(100.0), 212.0);
        approx::assert_relative_eq!(fahrenheit.invert(fahrenheit.apply(98.6)), 98.6, max_relative = 1e-12);
    }

    #[test]
    fn temperature_transforms_are_affine() {
        // a = apply(1) - apply(0), b = apply(0)
        let fahrenheit = Category::Temperature.unit(1).unwrap().transform;
        let b = fahrenheit.apply(0.0);
        approx::assert_relative_eq!(fahrenheit.apply(1.0) - b, 5.0 / 9.0, max_relative = 1e-12);
        approx::assert_relative_eq!(b, -160.0 / 9.0, max_relative = 1e-15);
        let kelvin = Category::Temperature.unit(2).unwrap().transform;
        assert_eq!(kelvin.apply(0.0), -273.15);
        assert_eq!(kelvin.invert(0.0), 273.15);
    }

    #[test]
    fn unit_lookup_is_bounds_checked() {
        assert_eq!(Category::Time.unit(2).map(|u| u.label), Some("Hours"));
        assert!(Category::Time.unit(3).is_none());
    }
}
