#![cfg_attr(not(test), no_std)]

//! # EC200U status monitor
//!
//! Device-facing core of a cellular status dashboard for Quectel EC200U
//! modules (and other modems speaking the same AT command subset). The crate
//! contains no transport: it interprets line-oriented AT response text and
//! keeps the latest readings in an explicit session object, so the same core
//! serves both dashboard variants:
//!
//! * a backend-relayed variant, where an HTTP service collects the response
//!   lines of `AT+CSQ` / `AT+CPIN?` / `ATI` and forwards them as text arrays,
//! * a serial-direct variant, where raw lines are read from the module and
//!   first run through [`ResponseCollector`].
//!
//! ## Example
//!
//! ```
//! use ec200u_monitor::{LinkState, MonitorState};
//! use embassy_time::Instant;
//!
//! let mut state = MonitorState::new();
//! state.set_link_state(LinkState::Up);
//!
//! state.begin_refresh().unwrap();
//! state.apply_signal(["+CSQ: 18,99"]);
//! state.apply_pin(["+CPIN: READY"]);
//! state.finish_refresh(Instant::now());
//!
//! let signal = state.signal().unwrap();
//! assert_eq!(signal.rssi, 18);
//! assert_eq!(signal.active_bars(), 3);
//! ```
//!
//! Parsing failures are never hard errors: each interpreter operation returns
//! `Option`, and [`MonitorState`] keeps the previous reading when a refresh
//! yields nothing usable.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod collector;
pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
mod monitor;
mod signal;

pub use collector::{CollectOutcome, ResponseCollector};
pub use config::{DefaultConfig, MonitorConfig};
pub use monitor::{LinkState, MonitorState};
pub use signal::{active_bars, rssi_to_dbm, SignalCategory, BAR_THRESHOLDS};

// Re-export atat
pub use atat;
