//! ### 2 - General Commands

pub mod responses;

use atat::atat_derive::AtatCmd;
use responses::*;

/// 2.1 Display product identification information I
///
/// Returns the product identification text (manufacturer, module name and
/// firmware revision, one per line). The dashboard shows the leading lines
/// verbatim.
#[derive(Clone, AtatCmd)]
#[at_cmd("I", Identification)]
pub struct GetIdentification;

#[cfg(test)]
mod tests {
    use super::*;
    use atat::AtatCmd;

    #[test]
    fn serialize_identification_command() {
        let mut buf = [0u8; 8];
        let len = GetIdentification.write(&mut buf);
        assert_eq!(&buf[..len], b"ATI\r\n");
    }
}
