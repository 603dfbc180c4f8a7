//! Responses for Network Service Commands
use atat::atat_derive::AtatResp;

/// 6.2 Signal quality report +CSQ
///
/// One reading, immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatResp)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalQuality {
    /// Received signal strength, raw 0-31 scale (99: not detectable).
    #[at_arg(position = 0)]
    pub rssi: u8,
    /// Channel bit error rate, raw 0-99 scale.
    #[at_arg(position = 1)]
    pub ber: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_signal_quality() {
        assert_eq!(
            atat::serde_at::from_str("+CSQ: 18,99"),
            Ok(SignalQuality { rssi: 18, ber: 99 })
        );

        assert_eq!(
            atat::serde_at::from_str("+CSQ: 0,0"),
            Ok(SignalQuality { rssi: 0, ber: 0 })
        );
    }
}
