use strum::{Display, EnumIter, EnumString, VariantNames};

/// Units recognized out of the box for the optional `unit` property.
///
/// The set accepted during validation comes from configuration and defaults to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, VariantNames)]
pub enum Unit {
    Count,
    Percent,
    Bytes,
    Seconds,
    MilliSeconds,
    CountPerSecond,
    BytesPerSecond,
    BitsPerSecond,
    ByteSeconds,
    Cores,
    MilliCores,
    NanoCores,
    Unspecified,
}
