//! Line-oriented interpretation of relayed AT responses.
//!
//! The backend-relayed dashboard variant receives response text as arrays of
//! lines rather than as a framed byte stream, so the usual
//! [`atat`] digestion path is not available there. The functions here scan
//! such line sets for the fields the dashboard displays. They are pure: the
//! only failure mode is "no matching field in the input", reported as `None`
//! and never as an error.

use heapless::String;

use crate::command::general::responses::ModuleIdentity;
use crate::command::network_service::responses::SignalQuality;
use crate::command::usim::responses::PinStatus;

const CSQ_MARKER: &str = "+CSQ:";
const CPIN_MARKER: &str = "+CPIN:";

/// Extract a signal reading from a `+CSQ` response.
///
/// Only the first line containing `+CSQ:` is considered. The expected shape
/// is `+CSQ: <rssi>,<ber>`: optional whitespace after the colon, then the
/// two decimal fields separated by a bare comma. Anything trailing the <ber>
/// digits is ignored. A missing line or a malformed pair yields `None`.
pub fn signal_quality<'a, I>(lines: I) -> Option<SignalQuality>
where
    I: IntoIterator<Item = &'a str>,
{
    let line = lines.into_iter().find(|l| l.contains(CSQ_MARKER))?;
    let (_, fields) = line.split_once(CSQ_MARKER)?;

    let (rssi, rest) = fields.trim_start().split_once(',')?;
    let ber = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);

    Some(SignalQuality {
        rssi: rssi.parse().ok()?,
        ber: ber.parse().ok()?,
    })
}

/// Extract the SIM status token from a `+CPIN` response.
///
/// The token is everything after the first `:` of the first line containing
/// `+CPIN:`, trimmed but otherwise verbatim, so undocumented states remain
/// displayable.
pub fn pin_status<'a, I>(lines: I) -> Option<PinStatus>
where
    I: IntoIterator<Item = &'a str>,
{
    let line = lines.into_iter().find(|l| l.contains(CPIN_MARKER))?;
    let (_, token) = line.split_once(':')?;

    Some(PinStatus {
        token: String::try_from(token.trim()).ok()?,
    })
}

/// Extract the module identity from an `ATI` response.
///
/// Takes the first one or two non-empty information lines, stopping at the
/// final result code. The lines are opaque display strings.
pub fn module_identity<'a, I>(lines: I) -> Option<ModuleIdentity>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut info = lines
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take_while(|l| *l != "OK" && !l.contains("ERROR"));

    let manufacturer = String::try_from(info.next()?).ok()?;
    let model = info.next().and_then(|l| String::try_from(l).ok());

    Some(ModuleIdentity {
        manufacturer,
        model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_from_relayed_lines() {
        let lines = ["AT+CSQ", "+CSQ: 18,99", "OK"];
        assert_eq!(
            signal_quality(lines),
            Some(SignalQuality { rssi: 18, ber: 99 })
        );

        assert_eq!(
            signal_quality(["+CSQ: 0,0"]),
            Some(SignalQuality { rssi: 0, ber: 0 })
        );

        // No whitespace after the colon is accepted.
        assert_eq!(
            signal_quality(["+CSQ:25,0"]),
            Some(SignalQuality { rssi: 25, ber: 0 })
        );
    }

    #[test]
    fn signal_uses_first_match_only() {
        let lines = ["+CSQ: 7,0", "+CSQ: 31,0"];
        assert_eq!(signal_quality(lines), Some(SignalQuality { rssi: 7, ber: 0 }));
    }

    #[test]
    fn signal_absent_without_csq_line() {
        assert_eq!(signal_quality(["OK"]), None);
        assert_eq!(signal_quality([]), None);
    }

    #[test]
    fn signal_absent_on_malformed_pair() {
        assert_eq!(signal_quality(["+CSQ: ,99"]), None);
        assert_eq!(signal_quality(["+CSQ: abc,99"]), None);
        assert_eq!(signal_quality(["+CSQ: 18"]), None);
        assert_eq!(signal_quality(["+CSQ: 18,"]), None);
        assert_eq!(signal_quality(["+CSQ: 300,99"]), None);
    }

    #[test]
    fn signal_ignores_trailing_text_after_ber() {
        assert_eq!(
            signal_quality(["+CSQ: 18,99 OK"]),
            Some(SignalQuality { rssi: 18, ber: 99 })
        );
    }

    #[test]
    fn signal_parse_is_pure() {
        let lines = ["+CSQ: 12,3"];
        assert_eq!(signal_quality(lines), signal_quality(lines));
    }

    #[test]
    fn pin_token_from_relayed_lines() {
        let status = pin_status(["+CPIN: READY", "OK"]).unwrap();
        assert_eq!(status.token.as_str(), "READY");

        // No space after the colon.
        let status = pin_status(["+CPIN:SIM PIN"]).unwrap();
        assert_eq!(status.token.as_str(), "SIM PIN");
    }

    #[test]
    fn pin_absent_without_cpin_line() {
        assert_eq!(pin_status(["+CSQ: 18,99", "OK"]), None);
    }

    #[test]
    fn identity_takes_leading_info_lines() {
        let lines = ["Quectel", "EC200U", "Revision: EC200UCNAAR03A12M08", "OK"];
        let identity = module_identity(lines).unwrap();
        assert_eq!(identity.manufacturer.as_str(), "Quectel");
        assert_eq!(identity.model.as_deref(), Some("EC200U"));
    }

    #[test]
    fn identity_skips_blank_lines_and_stops_at_result_code() {
        let identity = module_identity(["", "Quectel", "OK"]).unwrap();
        assert_eq!(identity.manufacturer.as_str(), "Quectel");
        assert_eq!(identity.model, None);

        assert_eq!(module_identity(["OK"]), None);
        assert_eq!(module_identity(["+CME ERROR: 3"]), None);
    }
}
