use strum::{Display, EnumIter, EnumString, VariantNames};

/// Model used to derive a dynamic threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, VariantNames)]
pub enum DynamicModel {
    AnomalyDetection,
}
