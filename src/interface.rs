//! Bus and GPIO plumbing
//!
//! [`DisplayInterface`] is the seam between the driver and the hardware. The
//! provided [`Interface`] implements it for any embedded-hal 1.0 SPI device
//! plus three GPIO lines:
//!
//! | Line | Direction | Idle | Meaning |
//! |------|-----------|------|---------|
//! | DC   | output    | low  | low selects an opcode, high selects payload bytes |
//! | RST  | output    | high | pulled low to reset the controller |
//! | BUSY | input     | -    | asserted while the controller is working |
//!
//! The SPI device must be set up in [`SPI_MODE`].
//!
//! ## Example
//!
//! ```
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::SpiDevice;
//! use inky_phat::Interface;
//!
//! fn wire<SPI, DC, RST, BUSY>(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Interface<SPI, DC, RST, BUSY>
//! where
//!     SPI: SpiDevice,
//!     DC: OutputPin,
//!     RST: OutputPin,
//!     BUSY: InputPin,
//! {
//!     let mut interface = Interface::new(spi, dc, rst, busy);
//!     // A full refresh of the red panel takes around 15 s
//!     interface.set_busy_timeout(20_000);
//!     interface
//! }
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::{MODE_0, Mode, SpiDevice};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// SPI mode expected by the controller (CPOL 0, CPHA 0)
///
/// `SpiDevice` has no way to change its mode, so pass this to the HAL when
/// creating the bus.
pub const SPI_MODE: Mode = MODE_0;

/// Capabilities the driver needs from the hardware
///
/// [`Display`](crate::display::Display) is generic over this trait. Use
/// [`Interface`] for real SPI and GPIO, or implement it on a test double that
/// records what the driver sends.
pub trait DisplayInterface {
    /// Failure reported by the hardware
    type Error: Debug;

    /// Drive the output lines to their initial levels
    ///
    /// Called once by [`Display::new`](crate::Display::new). DC must end low
    /// (command) and RST high (not in reset).
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be driven.
    fn configure(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Write one opcode with DC low
    ///
    /// # Errors
    ///
    /// Returns an error if DC cannot be driven or the SPI write fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Write payload bytes with DC high
    ///
    /// # Errors
    ///
    /// Returns an error if DC cannot be driven or the SPI write fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Pulse RST low for 10 ms, then hold it high for 10 ms
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Block until BUSY is released
    ///
    /// # Errors
    ///
    /// Returns an error if BUSY cannot be read or stays asserted past the
    /// implementation's timeout.
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Return the lines to idle before the interface is handed back
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be driven. Lines may then stay in a
    /// state that confuses the controller on the next open.
    fn release(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Failure inside [`Interface`]
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI write failed
    Spi(SpiErr),
    /// A GPIO line could not be driven or read
    Pin(PinErr),
    /// BUSY stayed asserted past the configured timeout
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI write failed: {e:?}"),
            Self::Pin(e) => write!(f, "GPIO failed: {e:?}"),
            Self::Timeout => write!(f, "Panel stayed busy past the timeout"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Default busy-wait timeout in milliseconds
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 30_000;

/// [`DisplayInterface`] over embedded-hal SPI and GPIO
///
/// All three pins must share one error type, which is the case for every
/// common HAL.
pub struct Interface<SPI, DC, RST, BUSY> {
    spi: SPI,
    /// Low for opcodes, high for payload
    dc: DC,
    /// Active low
    rst: RST,
    busy: BUSY,
    /// 0 waits forever
    busy_timeout_ms: u32,
    busy_active_high: bool,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Wrap an SPI device and the DC, RST and BUSY lines
    ///
    /// No line is touched until [`DisplayInterface::configure`] runs. BUSY is
    /// treated as active high and waits time out after
    /// [`DEFAULT_BUSY_TIMEOUT_MS`].
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            busy_active_high: true,
        }
    }

    /// Give up waiting on BUSY after `timeout_ms` (0 waits forever)
    pub fn set_busy_timeout(&mut self, timeout_ms: u32) -> &mut Self {
        self.busy_timeout_ms = timeout_ms;
        self
    }

    /// Busy-wait timeout in milliseconds
    pub fn busy_timeout(&self) -> u32 {
        self.busy_timeout_ms
    }

    /// Pass `false` if BUSY is wired active low
    pub fn set_busy_active_high(&mut self, active_high: bool) -> &mut Self {
        self.busy_active_high = active_high;
        self
    }

    /// True if a high BUSY line means busy
    pub fn busy_active_high(&self) -> bool {
        self.busy_active_high
    }

    /// Give back the SPI device and pins
    pub fn into_parts(self) -> (SPI, DC, RST, BUSY) {
        (self.spi, self.dc, self.rst, self.busy)
    }

    fn is_busy(&mut self) -> Result<bool, BUSY::Error> {
        if self.busy_active_high {
            self.busy.is_high()
        } else {
            self.busy.is_low()
        }
    }

    fn idle_lines(&mut self) -> Result<(), DC::Error>
    where
        RST: OutputPin<Error = DC::Error>,
    {
        self.dc.set_low()?;
        self.rst.set_high()
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn configure(&mut self) -> InterfaceResult<(), Self::Error> {
        self.idle_lines().map_err(InterfaceError::Pin)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        Ok(())
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let mut waited_ms = 0u32;
        while self.is_busy().map_err(InterfaceError::Pin)? {
            if self.busy_timeout_ms != 0 && waited_ms >= self.busy_timeout_ms {
                log::error!("busy line still asserted after {waited_ms}ms");
                return Err(InterfaceError::Timeout);
            }
            delay.delay_ms(1);
            waited_ms += 1;
        }
        Ok(())
    }

    fn release(&mut self) -> InterfaceResult<(), Self::Error> {
        self.idle_lines().map_err(InterfaceError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Write(Vec<u8>),
        Dc(bool),
        Rst(bool),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockSpi(Log);

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.0.borrow_mut().push(Event::Write(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct MockDc(Log);
    struct MockRst {
        log: Log,
        fail: bool,
    }

    /// Busy pin that reports busy for a fixed number of samples
    struct MockBusy {
        busy_samples: u32,
    }

    impl ErrorType for MockDc {
        type Error = MockError;
    }
    impl ErrorType for MockRst {
        type Error = MockError;
    }
    impl ErrorType for MockBusy {
        type Error = MockError;
    }

    impl OutputPin for MockDc {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Dc(false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Dc(true));
            Ok(())
        }
    }

    impl OutputPin for MockRst {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            self.log.borrow_mut().push(Event::Rst(false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            self.log.borrow_mut().push(Event::Rst(true));
            Ok(())
        }
    }

    impl InputPin for MockBusy {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            if self.busy_samples == 0 {
                return Ok(false);
            }
            self.busy_samples -= 1;
            Ok(true)
        }
        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    struct MockDelay {
        elapsed_ms: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ms += ns / 1_000_000;
        }
    }

    fn interface(
        busy_samples: u32,
        rst_fail: bool,
    ) -> (Interface<MockSpi, MockDc, MockRst, MockBusy>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let interface = Interface::new(
            MockSpi(log.clone()),
            MockDc(log.clone()),
            MockRst {
                log: log.clone(),
                fail: rst_fail,
            },
            MockBusy {
                busy_samples,
            },
        );
        (interface, log)
    }

    #[test]
    fn test_default_busy_timeout() {
        assert_eq!(DEFAULT_BUSY_TIMEOUT_MS, 30_000);
    }

    #[test]
    fn test_set_busy_timeout() {
        let (mut interface, _) = interface(0, false);
        assert_eq!(interface.busy_timeout(), DEFAULT_BUSY_TIMEOUT_MS);

        interface.set_busy_timeout(5_000);
        assert_eq!(interface.busy_timeout(), 5_000);

        interface.set_busy_timeout(0);
        assert_eq!(interface.busy_timeout(), 0);
    }

    #[test]
    fn test_configure_sets_idle_levels() {
        let (mut interface, log) = interface(0, false);
        interface.configure().unwrap();
        assert_eq!(*log.borrow(), [Event::Dc(false), Event::Rst(true)]);
    }

    #[test]
    fn test_configure_failure_surfaces_pin_error() {
        let (mut interface, _) = interface(0, true);
        assert!(matches!(
            interface.configure(),
            Err(InterfaceError::Pin(MockError))
        ));
    }

    #[test]
    fn test_command_then_data_phases() {
        let (mut interface, log) = interface(0, false);
        interface.send_command(0x3C).unwrap();
        interface.send_data(&[0xFF]).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Dc(false),
                Event::Write(alloc::vec![0x3C]),
                Event::Dc(true),
                Event::Write(alloc::vec![0xFF]),
            ]
        );
    }

    #[test]
    fn test_busy_wait_polls_until_ready() {
        let (mut interface, _) = interface(5, false);
        let mut delay = MockDelay { elapsed_ms: 0 };
        interface.busy_wait(&mut delay).unwrap();
        assert_eq!(delay.elapsed_ms, 5);
    }

    #[test]
    fn test_busy_wait_times_out() {
        let (mut interface, _) = interface(u32::MAX, false);
        interface.set_busy_timeout(20);
        let mut delay = MockDelay { elapsed_ms: 0 };
        assert!(matches!(
            interface.busy_wait(&mut delay),
            Err(InterfaceError::Timeout)
        ));
        assert_eq!(delay.elapsed_ms, 20);
    }

    #[test]
    fn test_busy_active_low() {
        // Line stays low, which active-low wiring reads as busy
        let (mut interface, _) = interface(0, false);
        interface.set_busy_active_high(false);
        assert!(!interface.busy_active_high());
        let mut delay = MockDelay { elapsed_ms: 0 };
        interface.set_busy_timeout(3);
        assert!(matches!(
            interface.busy_wait(&mut delay),
            Err(InterfaceError::Timeout)
        ));
    }

    #[test]
    fn test_reset_pulses_low_then_high() {
        let (mut interface, log) = interface(0, false);
        let mut delay = MockDelay { elapsed_ms: 0 };
        interface.reset(&mut delay).unwrap();
        assert_eq!(*log.borrow(), [Event::Rst(false), Event::Rst(true)]);
        assert_eq!(delay.elapsed_ms, 20);
    }

    #[test]
    fn test_release_failure() {
        let (mut interface, _) = interface(0, true);
        assert!(interface.release().is_err());
    }
}
