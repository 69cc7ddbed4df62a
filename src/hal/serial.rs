//! Byte transport for the command link.
//!
//! One byte at a time, both directions blocking, no timeout.
//! A stalled sender stalls the console loop; that is the contract.

/// Blocking single-byte serial link.
pub trait ByteTransport {
    /// Driver failure. The wire protocol itself defines no errors.
    type Error;

    /// Send one byte, returning once it has left the wire.
    fn send(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Wait for the next received byte.
    fn receive(&mut self) -> Result<u8, Self::Error>;

    /// Send every byte of `bytes` in order.
    fn send_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &b in bytes {
            self.send(b)?;
        }
        Ok(())
    }
}

impl<T: ByteTransport + ?Sized> ByteTransport for &mut T {
    type Error = T::Error;

    #[inline]
    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).send(byte)
    }

    #[inline]
    fn receive(&mut self) -> Result<u8, Self::Error> {
        (**self).receive()
    }
}

#[cfg(target_os = "espidf")]
pub use esp::EspSerial;

#[cfg(target_os = "espidf")]
mod esp {
    use super::ByteTransport;
    use crate::config::SerialConfig;

    use esp_idf_svc::hal::delay::BLOCK;
    use esp_idf_svc::hal::gpio;
    use esp_idf_svc::hal::peripheral::Peripheral;
    use esp_idf_svc::hal::uart::{self, Uart, UartDriver};
    use esp_idf_svc::sys::EspError;

    /// Command link on a hardware UART, 8N1.
    pub struct EspSerial<'d> {
        uart: UartDriver<'d>,
    }

    impl<'d> EspSerial<'d> {
        /// Configure the UART and discard anything already in the RX FIFO.
        pub fn new<U: Uart>(
            uart: impl Peripheral<P = U> + 'd,
            tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
            rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
            config: &SerialConfig,
        ) -> Result<Self, EspError> {
            let uart_config = uart::config::Config::default()
                .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

            let uart = UartDriver::new(
                uart,
                tx_pin,
                rx_pin,
                Option::<gpio::AnyIOPin>::None, // CTS
                Option::<gpio::AnyIOPin>::None, // RTS
                &uart_config,
            )?;
            uart.clear_rx()?;

            Ok(Self { uart })
        }
    }

    impl ByteTransport for EspSerial<'_> {
        type Error = EspError;

        fn send(&mut self, byte: u8) -> Result<(), EspError> {
            self.uart.write(&[byte])?;
            // Equivalent of polling TC: return only once the byte is out.
            self.uart.wait_tx_done(BLOCK)
        }

        fn receive(&mut self) -> Result<u8, EspError> {
            let mut buf = [0u8; 1];
            loop {
                if self.uart.read(&mut buf, BLOCK)? == 1 {
                    return Ok(buf[0]);
                }
            }
        }
    }
}
