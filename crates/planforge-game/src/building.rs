use std::fmt;

use crate::recipe::PowerRange;

/// Power draw of a building. Variable consumption takes its actual range
/// from the recipe being crafted.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(tag = "type")]
pub enum PowerConsumption {
    #[serde(rename = "fixed", rename_all = "camelCase")]
    Fixed { value_mw: f64, exponent: f64 },
    #[serde(rename = "variable", rename_all = "camelCase")]
    Variable {
        min_mw: f64,
        max_mw: f64,
        exponent: f64,
    },
}

impl PowerConsumption {
    /// Average draw at 100% clock speed. Variable consumers average over
    /// the recipe's power range.
    pub fn average_mw(&self, recipe_power: &PowerRange) -> f64 {
        match self {
            Self::Fixed { value_mw, .. } => *value_mw,
            Self::Variable { .. } => (recipe_power.min_mw + recipe_power.max_mw) / 2.0,
        }
    }
}

impl fmt::Display for PowerConsumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { value_mw, .. } => write!(f, "{value_mw} MW"),
            Self::Variable { min_mw, max_mw, .. } => write!(f, "{min_mw} - {max_mw} MW"),
        }
    }
}

/// A building that crafts recipes (Constructor, Assembler, Refinery, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Manufacturer {
    pub key: String,
    pub name: String,
    pub power_consumption: PowerConsumption,
}

/// A fuel-burning generator (Biomass Burner, Coal Generator, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct PowerGenerator {
    pub key: String,
    pub name: String,
    pub power_consumption: PowerConsumption,
    pub power_production_mw: f64,
}

/// A building that produces items from nothing (e.g. the FICSMAS tree).
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProducer {
    pub key: String,
    pub name: String,
    pub power_consumption: PowerConsumption,
    pub craft_time_secs: f64,
    pub output: crate::recipe::ItemRate,
}

/// A miner or pump extracting a raw resource from a node.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceExtractor {
    pub key: String,
    pub name: String,
    pub power_consumption: PowerConsumption,
    /// Items per minute at a normal-purity node, 100% clock.
    pub extraction_rate: f64,
    /// Keys of the items this extractor may sit on.
    pub allowed_resources: Vec<String>,
}

/// A pressurizer over a resource well with satellite extraction sites.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceWell {
    pub key: String,
    pub name: String,
    pub power_consumption: PowerConsumption,
    pub extraction_rate: f64,
    pub allowed_resources: Vec<String>,
}

/// A building definition, discriminated by kind. The variant set is fixed
/// by game data, so matching is exhaustive.
#[derive(Debug, Clone, PartialEq)]
pub enum Building {
    Manufacturer(Manufacturer),
    PowerGenerator(PowerGenerator),
    ItemProducer(ItemProducer),
    ResourceExtractor(ResourceExtractor),
    ResourceWell(ResourceWell),
}

impl Building {
    pub fn key(&self) -> &str {
        match self {
            Self::Manufacturer(m) => &m.key,
            Self::PowerGenerator(pg) => &pg.key,
            Self::ItemProducer(ip) => &ip.key,
            Self::ResourceExtractor(re) => &re.key,
            Self::ResourceWell(rw) => &rw.key,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Manufacturer(m) => &m.name,
            Self::PowerGenerator(pg) => &pg.name,
            Self::ItemProducer(ip) => &ip.name,
            Self::ResourceExtractor(re) => &re.name,
            Self::ResourceWell(rw) => &rw.name,
        }
    }

    pub fn power_consumption(&self) -> &PowerConsumption {
        match self {
            Self::Manufacturer(m) => &m.power_consumption,
            Self::PowerGenerator(pg) => &pg.power_consumption,
            Self::ItemProducer(ip) => &ip.power_consumption,
            Self::ResourceExtractor(re) => &re.power_consumption,
            Self::ResourceWell(rw) => &rw.power_consumption,
        }
    }

    pub fn is_manufacturer(&self) -> bool {
        matches!(self, Self::Manufacturer(..))
    }

    pub fn is_extractor(&self) -> bool {
        matches!(self, Self::ResourceExtractor(..) | Self::ResourceWell(..))
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
