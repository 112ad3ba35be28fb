//! Dump the first two sectors of a MIFARE Classic card over I2C.
//!
//! Usage:
//!   cargo run -p pn532 --example dump_mifare --features i2c -- [expected.txt]
//!
//! `expected.txt` holds one block per line as hex in either case, with or
//! without spaces (`E5 01 54 23 ...`); when given, the dump is compared
//! byte for byte against it.

use std::time::Duration;

use anyhow::{Context, bail};
use pn532::prelude::*;
use pn532::transport::I2cTransport;

const RESET_PIN: u8 = 20;
const REQ_PIN: u8 = 16;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let expected = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let blocks = text
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| parse_hex(l).map_err(anyhow::Error::msg))
                .collect::<anyhow::Result<Vec<Vec<u8>>>>()
                .with_context(|| format!("parsing {path}"))?;
            Some(blocks)
        }
        None => None,
    };

    let transport = I2cTransport::open(Some(REQ_PIN))?;
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_reset_pin(RESET_PIN)
        .build_uninitialized()?
        .initialize()
        .context("PN532 did not answer")?;

    let fw = dev.get_firmware_version()?;
    println!("Found PN532 with firmware version: {}.{}", fw.ver, fw.rev);

    dev.configure_for_card_reading()?;

    println!("Waiting for RFID/NFC card to read from!");
    let target = loop {
        let found = dev.list_passive_target(CardBaud::Iso14443A, Duration::from_millis(500))?;
        if let Some(t) = found {
            break t;
        }
    };
    let card = Card::new(target);
    println!("Found card with UID: {}", card.uid());

    let dump = card.dump_blocks(&mut dev, 0..=7, KeyType::A, &MifareKey::DEFAULT)?;
    let blocks: Vec<Vec<u8>> = dump.iter().map(|(_, data)| data.as_bytes().to_vec()).collect();
    for (block, data) in &dump {
        println!("{:2}: {}  |{}|", block, data.to_hex(), data.to_ascii_safe());
    }

    if let Some(expected) = expected {
        if blocks != expected {
            bail!(
                "dump differs from expected ({} of {} blocks read)",
                blocks.len(),
                expected.len()
            );
        }
        println!("dump matches expected");
    }
    Ok(())
}
