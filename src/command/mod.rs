//! AT Commands for the Quectel EC200U module family\
//! Following the [Quectel EC200U series AT commands manual](https://www.quectel.com/download/quectel_ec200u_series_at_commands_manual_v1-0/)
//!
//! Only the commands the status dashboard issues are defined here; the
//! module speaks a far larger set.

pub mod general;
pub mod network_service;
pub mod usim;

use atat::atat_derive::{AtatCmd, AtatResp};

#[derive(Debug, Clone, PartialEq, AtatResp)]
pub struct NoResponse;

/// Attention probe.
///
/// Used to detect the AT command port: the first port answering `OK` within
/// the probe timeout is the one to keep.
#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse, timeout_ms = 1000)]
pub struct AT;

/// 2.10 Set command echo mode ATE
///
/// Issued once after the port is opened, so response lines are not prefixed
/// with an echo of the command that produced them.
#[derive(Clone, AtatCmd)]
#[at_cmd("E0", NoResponse)]
pub struct SetEchoOff;

#[cfg(test)]
mod tests {
    use super::*;
    use atat::AtatCmd;

    #[test]
    fn serialize_probe_and_echo_commands() {
        let mut buf = [0u8; 16];

        let len = AT.write(&mut buf);
        assert_eq!(&buf[..len], b"AT\r\n");

        let len = SetEchoOff.write(&mut buf);
        assert_eq!(&buf[..len], b"ATE0\r\n");
    }
}
