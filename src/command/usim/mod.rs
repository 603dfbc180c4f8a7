//! ### 5 - (U)SIM Related Commands

pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use responses::*;

/// 5.3 Enter PIN +CPIN
///
/// The read command reports whether the MT is waiting for a password. The
/// dashboard only ever queries; entering a PIN is done out of band.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPIN?", PinStatus, timeout_ms = 5000)]
pub struct GetPinStatus;

#[cfg(test)]
mod tests {
    use super::*;
    use atat::AtatCmd;

    #[test]
    fn serialize_pin_status_command() {
        let mut buf = [0u8; 16];
        let len = GetPinStatus.write(&mut buf);
        assert_eq!(&buf[..len], b"AT+CPIN?\r\n");
    }
}
