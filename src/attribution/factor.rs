//! Attribution factors

use std::fmt;

/// Factor explained by the attribution engine
///
/// Variants are declared in ranking tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributionFactor {
    ContactTime,
    InitialPh,
    Concentration,
    AdsorbentType,
    PollutantType,
    Competition,
}

impl AttributionFactor {
    /// Every factor, in declaration order
    pub const ALL: [AttributionFactor; 6] = [
        AttributionFactor::ContactTime,
        AttributionFactor::InitialPh,
        AttributionFactor::Concentration,
        AttributionFactor::AdsorbentType,
        AttributionFactor::PollutantType,
        AttributionFactor::Competition,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AttributionFactor::ContactTime => "Contact Time",
            AttributionFactor::InitialPh => "Initial pH",
            AttributionFactor::Concentration => "Concentration",
            AttributionFactor::AdsorbentType => "Adsorbent Type",
            AttributionFactor::PollutantType => "Pollutant Type",
            AttributionFactor::Competition => "Competition",
        }
    }
}

impl fmt::Display for AttributionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
