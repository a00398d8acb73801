use strum::{Display, EnumIter, EnumString, VariantNames};

/// Comparison applied between a metric value and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, VariantNames)]
pub enum ComparisonOperator {
    GreaterThan,
    GreaterOrEquals,
    LowerThan,
    LowerOrEquals,
}
