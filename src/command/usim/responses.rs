//! Responses for (U)SIM Related Commands
use super::types::PinStatusCode;
use atat::atat_derive::AtatResp;
use heapless::String;

/// 5.3 Enter PIN +CPIN
///
/// The status token is kept verbatim, trimmed; [`PinStatus::code`]
/// classifies the documented tokens.
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct PinStatus {
    #[at_arg(position = 0)]
    pub token: String<24>,
}

impl PinStatus {
    #[must_use]
    pub fn code(&self) -> PinStatusCode {
        PinStatusCode::from(self.token.as_str())
    }
}
