// felica-tag/src/transport/traits.rs

use crate::Result;

/// Transceiver abstracts the host's NFC-F link away from protocol logic.
///
/// Implementations report a card leaving the field as `Error::TagLost`.
/// Retrying or reconnecting is the implementation's business; the session
/// never retries.
pub trait Transceiver {
    /// Acquire the link before an exchange.
    fn connect(&mut self) -> Result<()> {
        Ok(())
    }

    /// Send one command packet and return the card's raw reply.
    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Release the link after an exchange.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(data)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Run a single bracketed exchange: connect, transceive, close.
///
/// `close` runs whenever `connect` succeeded, including when `transceive`
/// fails. A transceive error wins over a close error.
pub fn exchange(transceiver: &mut dyn Transceiver, data: &[u8]) -> Result<Vec<u8>> {
    #[cfg(feature = "diagnostics")]
    log::trace!("-> [{}]", crate::utils::bytes_to_hex_spaced(data));

    transceiver.connect()?;
    let result = transceiver.transceive(data);
    let closed = transceiver.close();

    let reply = result?;
    closed?;

    log::trace!("exchange: sent {} bytes, received {} bytes", data.len(), reply.len());
    #[cfg(feature = "diagnostics")]
    log::trace!("<- [{}]", crate::utils::bytes_to_hex_spaced(&reply));

    Ok(reply)
}
