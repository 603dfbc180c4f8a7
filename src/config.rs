use embassy_time::Duration;

/// Compile-time knobs of the status monitor.
///
/// The timing constants come from the reference deployment: a 2 s dashboard
/// refresh against a module on a 115200 baud port. `COMMAND_TIMEOUT`,
/// `PROBE_TIMEOUT` and `BAUD_RATE` are advisory for the transport driving
/// the module; the crate itself only consumes `REFRESH_PERIOD`.
pub trait MonitorConfig {
    /// Cadence of the status poll.
    const REFRESH_PERIOD: Duration = Duration::from_secs(2);

    /// How long the transport should wait for a command's final result
    /// code.
    const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);

    /// How long the `AT` probe waits for `OK` when scanning ports.
    const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

    const BAUD_RATE: u32 = 115_200;
}

pub struct DefaultConfig;

impl MonitorConfig for DefaultConfig {}
