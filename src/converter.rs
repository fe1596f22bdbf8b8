//! Converter - routes a value through its category's base unit

use crate::catalog::Category;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("category index {index} out of range ({len} categories)")]
    CategoryOutOfRange { index: usize, len: usize },

    #[error("unit index {index} out of range for {category} ({len} units)")]
    UnitOutOfRange {
        category: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{from} to {to} is too large to represent")]
    Overflow { from: &'static str, to: &'static str },
}

/// Convert `value` from the unit at `from` to the unit at `to` within `category`.
///
/// No rounding is applied; formatting is the caller's concern. A finite input
/// whose result leaves the f64 range is reported as [`ConversionError::Overflow`].
pub fn convert(value: f64, category: Category, from: usize, to: usize) -> Result<f64, ConversionError> {
    let units = category.units();
    let lookup = |index: usize| {
        units.get(index).ok_or(ConversionError::UnitOutOfRange {
            category: category.name(),
            index,
            len: units.len(),
        })
    };
    let source = lookup(from)?;
    let target = lookup(to)?;

    if from == to {
        return Ok(value);
    }

    let result = target.transform.invert(source.transform.apply(value));
    if value.is_finite() && !result.is_finite() {
        return Err(ConversionError::Overflow {
            from: source.label,
            to: target.label,
        });
    }
    Ok(result)
}

/// Same as [`convert`], with the category selected by its picker index.
pub fn convert_indexed(
    value: f64,
    category_index: usize,
    from: usize,
    to: usize,
) -> Result<f64, ConversionError> {
    let category = Category::from_index(category_index).ok_or(ConversionError::CategoryOutOfRange {
        index: category_index,
        len: Category::ALL.len(),
    })?;
    convert(value, category, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLES: [f64; 7] = [0.0, 1.0, -40.0, 12.5, 1e-6, 98_765.4321, -1e9];

    // Unit indices by label, so the tests read like the picker does
    fn idx(category: Category, label: &str) -> usize {
        category
            .units()
            .iter()
            .position(|u| u.label == label)
            .unwrap_or_else(|| panic!("no unit {label} in {}", category.name()))
    }

    fn conv(value: f64, category: Category, from: &str, to: &str) -> f64 {
        convert(value, category, idx(category, from), idx(category, to)).unwrap()
    }

    #[test]
    fn identity_conversion_is_exact() {
        for category in Category::ALL {
            for unit in 0..category.units().len() {
                for x in SAMPLES {
                    assert_eq!(convert(x, category, unit, unit).unwrap(), x);
                }
            }
        }
    }

    #[test]
    fn round_trip_within_tolerance() {
        for category in Category::ALL {
            let n = category.units().len();
            for a in 0..n {
                for b in 0..n {
                    for x in SAMPLES {
                        let there = convert(x, category, a, b).unwrap();
                        let back = convert(there, category, b, a).unwrap();
                        assert_relative_eq!(back, x, epsilon = 1e-9, max_relative = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn temperature_fixed_points() {
        let t = Category::Temperature;
        assert_eq!(conv(0.0, t, "Celsius", "Fahrenheit"), 32.0);
        assert_eq!(conv(100.0, t, "Celsius", "Fahrenheit"), 212.0);
        assert_eq!(conv(0.0, t, "Celsius", "Kelvin"), 273.15);
        assert_eq!(conv(32.0, t, "Fahrenheit", "Celsius"), 0.0);
        assert_eq!(conv(212.0, t, "Fahrenheit", "Celsius"), 100.0);
        assert_eq!(conv(-40.0, t, "Fahrenheit", "Celsius"), -40.0);
        assert_relative_eq!(conv(0.0, t, "Kelvin", "Fahrenheit"), -459.67, max_relative = 1e-12);
    }

    #[test]
    fn length_scales() {
        let l = Category::Length;
        assert_relative_eq!(conv(1.0, l, "Miles", "Feet"), 5280.0, max_relative = 1e-12);
        assert_eq!(conv(1.0, l, "Kilometers", "Meters"), 1000.0);
        assert_relative_eq!(conv(1.0, l, "Yards", "Feet"), 3.0, max_relative = 1e-12);
        assert_relative_eq!(conv(1.0, l, "Miles", "Kilometers"), 1.609344, max_relative = 1e-12);
    }

    #[test]
    fn time_scales() {
        let t = Category::Time;
        assert_eq!(conv(1.0, t, "Hours", "Minutes"), 60.0);
        assert_eq!(conv(1.0, t, "Hours", "Seconds"), 3600.0);
        assert_eq!(conv(90.0, t, "Minutes", "Hours"), 1.5);
    }

    #[test]
    fn volume_scales() {
        let v = Category::Volume;
        assert_relative_eq!(conv(1.0, v, "Liters", "Milliliters"), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(conv(1.0, v, "Gallons", "Pints"), 8.0, max_relative = 1e-12);
        assert_relative_eq!(conv(1.0, v, "Cups", "Milliliters"), 240.0, max_relative = 1e-12);
    }

    #[test]
    fn out_of_range_unit_is_an_error() {
        let err = convert(1.0, Category::Time, 0, 3).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnitOutOfRange { category: "Time", index: 3, len: 3 }
        );
        assert!(convert(1.0, Category::Length, 7, 0).is_err());
        // Same out-of-range index on both sides must not short-circuit to identity
        assert!(convert(1.0, Category::Temperature, 5, 5).is_err());
        assert_eq!(err.to_string(), "unit index 3 out of range for Time (3 units)");
    }

    #[test]
    fn result_past_f64_range_is_an_error() {
        let l = Category::Length;
        let err = convert(1e308, l, idx(l, "Miles"), idx(l, "Feet")).unwrap_err();
        assert_eq!(err, ConversionError::Overflow { from: "Miles", to: "Feet" });
        // Shrinking conversions of the same magnitude stay finite
        assert_relative_eq!(conv(1e308, l, "Feet", "Miles"), 1e308 * 0.3048 / 1609.344, max_relative = 1e-12);
        assert_eq!(conv(f64::MAX, l, "Miles", "Miles"), f64::MAX);
    }

    #[test]
    fn indexed_conversion_validates_category() {
        assert_eq!(convert_indexed(1.0, 2, 2, 1).unwrap(), 60.0);
        assert_eq!(
            convert_indexed(1.0, 4, 0, 0).unwrap_err(),
            ConversionError::CategoryOutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn conversion_is_repeatable() {
        let first = convert(37.0, Category::Temperature, 0, 1).unwrap();
        for _ in 0..10 {
            assert_eq!(convert(37.0, Category::Temperature, 0, 1).unwrap(), first);
        }
    }
}
