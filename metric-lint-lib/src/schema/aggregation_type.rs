use strum::{Display, EnumIter, EnumString, VariantNames};

/// Statistical reduction applied to raw samples within a time grain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, VariantNames)]
pub enum AggregationType {
    Average,
    Maximum,
    Minimum,
    Total,
    Count,
}
