//! ### 6 - Network Service Commands

pub mod responses;

use atat::atat_derive::AtatCmd;
use responses::*;

/// 6.2 Signal quality report +CSQ
///
/// Returns the received signal strength indication <rssi> and the channel
/// bit error rate <ber>. <rssi> uses the raw 0-31 scale (99 when not known
/// or not detectable); it is not a dBm value, see
/// [`rssi_to_dbm`](crate::rssi_to_dbm) for the mapping.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSQ", SignalQuality)]
pub struct GetSignalQuality;
