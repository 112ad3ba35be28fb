// pn532/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use crate::device::config::SessionConfig;
use crate::device::dispatcher::Dispatcher;
use crate::error::ErrorClass;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{
    BlockData, CardBaud, FirmwareVersion, KeyType, MifareKey, PassiveTarget, SamMode, Uid,
};
use crate::utils::firmware_version_timeout;
use crate::{Error, Result};

/// Type-state marker: constructed, chip not yet confirmed.
pub struct Uninitialized;
/// Type-state marker: bootstrap succeeded, commands available.
pub struct Initialized;

/// Session with one PN532. Commands are only available once
/// [`Device::initialize`] has confirmed the chip answers.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: SessionConfig,
    dispatcher: Dispatcher,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    /// Settings the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Dispatch a typed command and decode its result.
    fn exchange(&mut self, cmd: &Command, timeout: Duration) -> Result<Option<Response>> {
        let data = self.dispatcher.call_function(
            &mut *self.transport,
            cmd.command_code(),
            &cmd.params(),
            cmd.response_len(),
            timeout,
        )?;
        data.map(|d| Response::decode(cmd, &d)).transpose()
    }

    fn query_firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.exchange(&Command::GetFirmwareVersion, firmware_version_timeout())? {
            Some(Response::FirmwareVersion(fw)) => Ok(fw),
            Some(other) => Err(unexpected(other)),
            None => Err(Error::DeviceNotFound),
        }
    }
}

fn unexpected(resp: Response) -> Error {
    Error::FrameFormat(format!("unexpected response: {:?}", resp))
}

impl Device<Uninitialized> {
    /// Create a session over an existing transport with default settings.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Result<Self> {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create a session with explicit settings.
    pub fn with_config(transport: Box<dyn Transport>, config: SessionConfig) -> Result<Self> {
        Ok(Self {
            transport,
            dispatcher: Dispatcher::new(config.debug),
            config,
            _state: PhantomData,
        })
    }

    /// Bring the chip up: optional reset pulse, then a wake pulse and a
    /// firmware probe whose failure is only logged, then a second probe
    /// whose failure fails initialization.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        if let Some(pin) = self.config.reset_pin {
            log::debug!("pulsing reset line {}", pin);
            self.transport.reset(pin)?;
        }
        // the wake pulse belongs to the unreliable first attempt
        let first = self
            .transport
            .wakeup()
            .and_then(|()| self.query_firmware_version());
        match first {
            Ok(fw) => log::trace!("first firmware probe answered: {}", fw),
            Err(e) if matches!(e.class(), ErrorClass::Transient | ErrorClass::Protocol) => {
                log::debug!("ignoring failed first firmware probe: {}", e);
            }
            Err(e) => return Err(e),
        }

        let fw = self.query_firmware_version()?;
        log::info!("found {} (support {:#04x})", fw, fw.support);

        Ok(Device {
            transport: self.transport,
            config: self.config,
            dispatcher: self.dispatcher,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Execute a command and return the parsed Response, or `None` when
    /// the chip did not answer within `timeout`.
    pub fn execute(&mut self, cmd: &Command, timeout: Duration) -> Result<Option<Response>> {
        self.exchange(cmd, timeout)
    }

    /// Raw access to the dispatcher for commands without a typed wrapper.
    /// Returns the result bytes after the D5/code header.
    pub fn call_function(
        &mut self,
        command: u8,
        params: &[u8],
        response_len: usize,
        timeout: Duration,
    ) -> Result<Option<Vec<u8>>> {
        self.dispatcher
            .call_function(&mut *self.transport, command, params, response_len, timeout)
    }

    /// Query IC, version, revision and supported card families.
    /// Silence is reported as [`Error::DeviceNotFound`].
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        self.query_firmware_version()
    }

    /// SAMConfiguration. `timeout` is in 50 ms units and only matters in
    /// virtual-card mode. Silence counts as success.
    pub fn sam_configuration(&mut self, mode: SamMode, timeout: u8, use_irq: bool) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode,
            timeout,
            use_irq,
        };
        let call_timeout = self.config.timeout;
        match self.exchange(&cmd, call_timeout)? {
            Some(Response::SamConfiguration) | None => Ok(()),
            Some(other) => Err(unexpected(other)),
        }
    }

    /// SAMConfiguration for plain card reading: normal mode, 1 s, IRQ pin.
    pub fn configure_for_card_reading(&mut self) -> Result<()> {
        self.sam_configuration(
            SamMode::Normal,
            crate::protocol::commands::DEFAULT_SAM_TIMEOUT,
            true,
        )
    }

    /// Wait up to `timeout` for a single card of type `baud`.
    ///
    /// `Ok(None)` means no card answered. More than one card in the field
    /// is an error.
    pub fn list_passive_target(
        &mut self,
        baud: CardBaud,
        timeout: Duration,
    ) -> Result<Option<PassiveTarget>> {
        match self.exchange(&Command::detect_single(baud), timeout) {
            Ok(Some(Response::PassiveTarget(target))) => Ok(Some(target)),
            Ok(Some(other)) => Err(unexpected(other)),
            Ok(None) => Ok(None),
            // the chip is still searching the field
            Err(Error::Busy) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Like [`Device::list_passive_target`] but returns only the UID.
    pub fn read_passive_target(&mut self, baud: CardBaud, timeout: Duration) -> Result<Option<Uid>> {
        Ok(self.list_passive_target(baud, timeout)?.map(|t| t.uid))
    }

    /// Authenticate `block` of the card `uid` with a sector key.
    pub fn mifare_classic_authenticate_block(
        &mut self,
        uid: &Uid,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        let cmd = Command::MifareAuthenticate {
            uid: uid.clone(),
            block,
            key_type,
            key: *key,
        };
        self.card_exchange(&cmd).and_then(expect_completed)
    }

    /// Read one 16 byte block. The sector must be authenticated first.
    pub fn mifare_classic_read_block(&mut self, block: u8) -> Result<BlockData> {
        match self.card_exchange(&Command::MifareRead { block })? {
            Response::Block(data) => Ok(data),
            other => Err(unexpected(other)),
        }
    }

    /// Write one 16 byte block. `data` is checked before any bus access.
    pub fn mifare_classic_write_block(&mut self, block: u8, data: &[u8]) -> Result<()> {
        let data = BlockData::try_from(data).map_err(|_| {
            Error::InvalidArgument(format!("block data must be 16 bytes, got {}", data.len()))
        })?;
        self.card_exchange(&Command::MifareWrite { block, data })
            .and_then(expect_completed)
    }

    // A silent chip on the card-exchange path is a timeout, not "no card".
    fn card_exchange(&mut self, cmd: &Command) -> Result<Response> {
        let timeout = self.config.timeout;
        self.exchange(cmd, timeout)?.ok_or(Error::Timeout)
    }
}

fn expect_completed(resp: Response) -> Result<()> {
    match resp {
        Response::Completed => Ok(()),
        other => Err(unexpected(other)),
    }
}
