// pn532/src/protocol/responses/inlist.rs

use crate::constants::MAX_UID_LEN;
use crate::protocol::parser::{byte_at, slice_at};
use crate::types::{PassiveTarget, Uid};
use crate::{Error, Result};

/// Decode an InListPassiveTarget result for ISO14443A:
/// NbTg (1) + Tg (1) + SENS_RES (2) + SEL_RES (1) + NFCIDLength (1) + NFCID (n)
///
/// A result always describes exactly one target; any other NbTg is fatal
/// since arbitration between cards is not supported. "No card" is the
/// absence of a result, handled by the caller.
pub fn decode_passive_target(data: &[u8]) -> Result<PassiveTarget> {
    let targets = byte_at(data, 0)?;
    if targets != 1 {
        return Err(Error::TargetCount(targets));
    }

    let uid_len = byte_at(data, 5)? as usize;
    if uid_len > MAX_UID_LEN {
        return Err(Error::ImplausibleUidLength(uid_len));
    }

    let header = slice_at(data, 1, 4)?;
    let uid = Uid::try_from(slice_at(data, 6, uid_len)?)?;
    Ok(PassiveTarget {
        target: header[0],
        sens_res: [header[1], header[2]],
        sel_res: header[3],
        uid,
    })
}
