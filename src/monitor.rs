//! Dashboard session state.
//!
//! The readings shown on the dashboard, the link to the module, and the
//! refresh bookkeeping live in one explicit session object owned by the
//! refresh loop. The monitor never reads a clock; the loop passes
//! timestamps in.

use embassy_time::Instant;

use crate::command::general::responses::ModuleIdentity;
use crate::command::network_service::responses::SignalQuality;
use crate::command::usim::responses::PinStatus;
use crate::config::MonitorConfig;
use crate::error::Error;
use crate::interpreter;

/// Whether the dashboard currently has a module behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    #[default]
    Down,
    Up,
}

/// Latest readings plus refresh bookkeeping.
///
/// Each `apply_*` operation runs the corresponding
/// [`interpreter`] function over one response's lines. When the
/// interpreter finds nothing, the previously stored reading stays: a
/// dashboard tick with a garbled response keeps showing the last good
/// value instead of blanking.
#[derive(Debug)]
pub struct MonitorState {
    link_state: LinkState,
    signal: Option<SignalQuality>,
    pin: Option<PinStatus>,
    identity: Option<ModuleIdentity>,
    last_update: Option<Instant>,
    refresh_in_flight: bool,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorState {
    pub const fn new() -> Self {
        Self {
            link_state: LinkState::Down,
            signal: None,
            pin: None,
            identity: None,
            last_update: None,
            refresh_in_flight: false,
        }
    }

    pub fn link_state(&self) -> LinkState {
        self.link_state
    }

    /// Taking the link down clears all readings, so a later reconnect
    /// starts from placeholders rather than stale values.
    pub fn set_link_state(&mut self, state: LinkState) {
        if self.link_state == state {
            return;
        }
        self.link_state = state;
        if state == LinkState::Down {
            info!("link down, clearing readings");
            self.reset();
        }
    }

    /// Claim the single refresh slot.
    ///
    /// At most one refresh may be outstanding; a tick that fires while the
    /// previous one is still running is rejected with [`Error::Busy`].
    pub fn begin_refresh(&mut self) -> Result<(), Error> {
        if self.refresh_in_flight {
            return Err(Error::Busy);
        }
        self.refresh_in_flight = true;
        Ok(())
    }

    /// Complete the outstanding refresh, stamping the last-update instant.
    pub fn finish_refresh(&mut self, now: Instant) {
        self.refresh_in_flight = false;
        self.last_update = Some(now);
    }

    /// Release the refresh slot without stamping, for refreshes that died
    /// on the transport.
    pub fn abort_refresh(&mut self) {
        self.refresh_in_flight = false;
    }

    /// Whether the refresh loop should poll now.
    pub fn refresh_due<C: MonitorConfig>(&self, now: Instant) -> bool {
        if self.refresh_in_flight {
            return false;
        }
        match self.last_update {
            None => true,
            Some(at) => now
                .checked_duration_since(at)
                .is_some_and(|elapsed| elapsed >= C::REFRESH_PERIOD),
        }
    }

    /// Interpret a `+CSQ` response. Returns whether the stored reading was
    /// replaced.
    pub fn apply_signal<'a, I>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match interpreter::signal_quality(lines) {
            Some(reading) => {
                debug!("signal: rssi {}, ber {}", reading.rssi, reading.ber);
                self.signal = Some(reading);
                true
            }
            None => false,
        }
    }

    /// Interpret a `+CPIN` response. Returns whether the stored status was
    /// replaced.
    pub fn apply_pin<'a, I>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match interpreter::pin_status(lines) {
            Some(status) => {
                self.pin = Some(status);
                true
            }
            None => false,
        }
    }

    /// Interpret an `ATI` response. Returns whether the stored identity was
    /// replaced.
    pub fn apply_identity<'a, I>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match interpreter::module_identity(lines) {
            Some(identity) => {
                self.identity = Some(identity);
                true
            }
            None => false,
        }
    }

    pub fn signal(&self) -> Option<&SignalQuality> {
        self.signal.as_ref()
    }

    pub fn pin_status(&self) -> Option<&PinStatus> {
        self.pin.as_ref()
    }

    pub fn identity(&self) -> Option<&ModuleIdentity> {
        self.identity.as_ref()
    }

    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    pub fn reset(&mut self) {
        self.signal = None;
        self.pin = None;
        self.identity = None;
        self.last_update = None;
        self.refresh_in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultConfig;

    #[test]
    fn absent_parse_keeps_prior_reading() {
        let mut state = MonitorState::new();
        state.set_link_state(LinkState::Up);

        assert!(state.apply_signal(["+CSQ: 18,99", "OK"]));
        assert!(!state.apply_signal(["garbage"]));

        assert_eq!(state.signal().map(|s| s.rssi), Some(18));
    }

    #[test]
    fn link_down_clears_readings() {
        let mut state = MonitorState::new();
        state.set_link_state(LinkState::Up);
        state.apply_signal(["+CSQ: 18,99"]);
        state.apply_pin(["+CPIN: READY"]);
        state.finish_refresh(Instant::from_ticks(1000));

        state.set_link_state(LinkState::Down);
        assert_eq!(state.signal(), None);
        assert_eq!(state.pin_status(), None);
        assert_eq!(state.last_update(), None);
    }

    #[test]
    fn only_one_refresh_in_flight() {
        let mut state = MonitorState::new();

        assert_eq!(state.begin_refresh(), Ok(()));
        assert_eq!(state.begin_refresh(), Err(Error::Busy));

        state.finish_refresh(Instant::from_ticks(0));
        assert_eq!(state.begin_refresh(), Ok(()));

        state.abort_refresh();
        assert_eq!(state.begin_refresh(), Ok(()));
    }

    #[test]
    fn refresh_cadence() {
        let mut state = MonitorState::new();
        let start = Instant::from_ticks(0);

        // Nothing fetched yet.
        assert!(state.refresh_due::<DefaultConfig>(start));

        state.begin_refresh().unwrap();
        assert!(!state.refresh_due::<DefaultConfig>(start));
        state.finish_refresh(start);

        let half = start + DefaultConfig::REFRESH_PERIOD / 2;
        assert!(!state.refresh_due::<DefaultConfig>(half));

        let due = start + DefaultConfig::REFRESH_PERIOD;
        assert!(state.refresh_due::<DefaultConfig>(due));
    }

    #[test]
    fn full_refresh_round() {
        let mut state = MonitorState::new();
        state.set_link_state(LinkState::Up);

        state.begin_refresh().unwrap();
        state.apply_signal(["+CSQ: 22,0", "OK"]);
        state.apply_pin(["+CPIN: READY", "OK"]);
        state.apply_identity(["Quectel", "EC200U", "OK"]);
        state.finish_refresh(Instant::from_ticks(2_000_000));

        let signal = state.signal().unwrap();
        assert_eq!(signal.active_bars(), 3);
        assert_eq!(state.pin_status().unwrap().token.as_str(), "READY");
        assert_eq!(
            state.identity().unwrap().manufacturer.as_str(),
            "Quectel"
        );
        assert_eq!(state.last_update(), Some(Instant::from_ticks(2_000_000)));
    }
}
