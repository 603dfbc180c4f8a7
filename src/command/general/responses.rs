//! Responses for General Commands
use atat::atat_derive::AtatResp;
use heapless::String;

/// 2.1 Product identification information I
///
/// First line of the identification text.
#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct Identification {
    #[at_arg(position = 0)]
    pub line: String<64>,
}

/// Module identity as surfaced on the dashboard.
///
/// The first one or two information lines of an `ATI` response, kept as
/// opaque display strings. For the EC200U these are the manufacturer
/// (`Quectel`) and the module name (`EC200U`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModuleIdentity {
    pub manufacturer: String<64>,
    pub model: Option<String<64>>,
}
