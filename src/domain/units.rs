//! Static registry of measurement dimensions and their convertible units.
//!
//! Every unit belongs to exactly one dimension and carries a fixed multiplier
//! to that dimension's base unit (ml for volume, g for weight, single units
//! for count). The tables are plain `match` arms, so the registry has no
//! runtime state and cannot be mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    #[default]
    Volume,
    Weight,
    Count,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Volume, Dimension::Weight, Dimension::Count];

    /// Stable lowercase key used in persisted data and select inputs.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Volume => "volume",
            Dimension::Weight => "weight",
            Dimension::Count => "count",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Volume => "Volume",
            Dimension::Weight => "Weight",
            Dimension::Count => "Count",
        }
    }

    /// Units convertible within this dimension, default unit first.
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Dimension::Volume => &[Unit::Milliliter, Unit::Liter, Unit::FluidOunce, Unit::Gallon],
            Dimension::Weight => &[Unit::Gram, Unit::Kilogram, Unit::Ounce, Unit::Pound],
            Dimension::Count => &[Unit::Each, Unit::Dozen],
        }
    }

    pub fn default_unit(&self) -> Unit {
        self.units()[0]
    }

    /// Symbol of the unit all amounts in this dimension normalize to.
    pub fn base_symbol(&self) -> &'static str {
        self.default_unit().symbol()
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.key() == input)
            .ok_or_else(|| UnitError::UnknownDimension(input.to_string()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "fl oz")]
    FluidOunce,
    #[serde(rename = "gal")]
    Gallon,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "unit")]
    Each,
    #[serde(rename = "dozen")]
    Dozen,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Milliliter => "ml",
            Unit::Liter => "L",
            Unit::FluidOunce => "fl oz",
            Unit::Gallon => "gal",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Each => "unit",
            Unit::Dozen => "dozen",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Milliliter | Unit::Liter | Unit::FluidOunce | Unit::Gallon => Dimension::Volume,
            Unit::Gram | Unit::Kilogram | Unit::Ounce | Unit::Pound => Dimension::Weight,
            Unit::Each | Unit::Dozen => Dimension::Count,
        }
    }

    /// How many base units one of this unit represents. Always positive.
    pub fn base_multiplier(&self) -> f64 {
        match self {
            Unit::Milliliter => 1.0,
            Unit::Liter => 1000.0,
            Unit::FluidOunce => 29.5735,
            Unit::Gallon => 3785.41,
            Unit::Gram => 1.0,
            Unit::Kilogram => 1000.0,
            Unit::Ounce => 28.3495,
            Unit::Pound => 453.592,
            Unit::Each => 1.0,
            Unit::Dozen => 12.0,
        }
    }

    /// Looks up a unit symbol within one dimension's unit set.
    pub fn parse(dimension: Dimension, symbol: &str) -> Result<Unit, UnitError> {
        dimension
            .units()
            .iter()
            .copied()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| UnitError::UnknownUnit {
                dimension,
                symbol: symbol.to_string(),
            })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Registry misuse. Only reachable from the string boundary (persisted data
/// edited by hand); UI selects are populated from the registry itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("unknown unit '{symbol}' for dimension '{dimension}'")]
    UnknownUnit { dimension: Dimension, symbol: String },
    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_belongs_to_exactly_one_dimension() {
        for dimension in Dimension::ALL {
            for unit in dimension.units() {
                assert_eq!(unit.dimension(), dimension);
                let others = Dimension::ALL.into_iter().filter(|d| *d != dimension);
                for other in others {
                    assert!(!other.units().contains(unit));
                }
            }
        }
    }

    #[test]
    fn multipliers_are_positive_and_base_is_one() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.default_unit().base_multiplier(), 1.0);
            for unit in dimension.units() {
                assert!(unit.base_multiplier() > 0.0);
            }
        }
    }

    #[test]
    fn parse_resolves_symbols_within_a_dimension() {
        assert_eq!(Unit::parse(Dimension::Volume, "L"), Ok(Unit::Liter));
        assert_eq!(Unit::parse(Dimension::Weight, "kg"), Ok(Unit::Kilogram));
        assert!(matches!(
            Unit::parse(Dimension::Weight, "L"),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn dimension_keys_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.key().parse::<Dimension>(), Ok(dimension));
        }
        assert!(matches!(
            "length".parse::<Dimension>(),
            Err(UnitError::UnknownDimension(_))
        ));
    }

    #[test]
    fn units_serialize_as_their_symbols() {
        assert_eq!(serde_json::to_string(&Unit::Liter).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Dimension::Volume).unwrap(), "\"volume\"");
        assert_eq!(
            serde_json::from_str::<Unit>("\"fl oz\"").unwrap(),
            Unit::FluidOunce
        );
    }
}
