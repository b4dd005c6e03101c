//! Bit-exact Bitcoin transaction parsing, kept as a pure, side-effect-free
//! module so it can be reasoned about (and tested) independently of any
//! contract's storage. Every function here fails closed on malformed input —
//! no silent truncation, no out-of-bounds reads.

use bitcoin::blockdata::opcodes::all::{
    OP_CHECKSIG, OP_DUP, OP_EQUAL, OP_EQUALVERIFY, OP_HASH160,
};
use bitcoin::blockdata::script::Builder;
use bitcoin::consensus::Decodable;
use bitcoin::{OutPoint, Script, Transaction, Txid};
use cosmwasm_schema::cw_serde;

use crate::error::{ContractError, ContractResult};

/// The five Bitcoin output script templates a burn request's destination may
/// use, per the peg's supported-script-types table. `Non-goals`: no other
/// script type is recognized.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum ScriptType {
    P2pk,
    P2pkh,
    P2sh,
    P2wpkh,
    P2wsh,
    P2tr,
}

impl ScriptType {
    /// The length, in bytes, of the raw payload (pubkey/hash) this script
    /// type expects in a `userScript` field.
    pub fn payload_len(self) -> usize {
        match self {
            ScriptType::P2pk => 32,
            ScriptType::P2pkh => 20,
            ScriptType::P2sh => 20,
            ScriptType::P2wpkh => 20,
            ScriptType::P2wsh => 32,
            ScriptType::P2tr => 32,
        }
    }
}

/// Validates that `user_script` has the length this script type's template
/// requires (20 bytes for {P2PKH, P2SH, P2WPKH}, 32 bytes for {P2PK, P2WSH,
/// P2TR}).
pub fn validate_script_length(script_type: ScriptType, user_script: &[u8]) -> ContractResult<()> {
    if user_script.len() != script_type.payload_len() {
        return Err(ContractError::Validation(format!(
            "user script must be {} bytes for {:?}, got {}",
            script_type.payload_len(),
            script_type,
            user_script.len()
        )));
    }
    Ok(())
}

/// Builds the canonical `scriptPubKey` for a given script type and raw
/// payload (pubkey or hash), per the supported-script-types table in §6.
pub fn build_locking_script(script_type: ScriptType, payload: &[u8]) -> ContractResult<Script> {
    validate_script_length(script_type, payload)?;

    let script = match script_type {
        ScriptType::P2pk => Builder::new()
            .push_slice(payload)
            .push_opcode(OP_CHECKSIG)
            .into_script(),
        ScriptType::P2pkh => Builder::new()
            .push_opcode(OP_DUP)
            .push_opcode(OP_HASH160)
            .push_slice(payload)
            .push_opcode(OP_EQUALVERIFY)
            .push_opcode(OP_CHECKSIG)
            .into_script(),
        ScriptType::P2sh => Builder::new()
            .push_opcode(OP_HASH160)
            .push_slice(payload)
            .push_opcode(OP_EQUAL)
            .into_script(),
        ScriptType::P2wpkh | ScriptType::P2wsh => Builder::new()
            .push_int(0)
            .push_slice(payload)
            .into_script(),
        ScriptType::P2tr => Builder::new()
            .push_int(1)
            .push_slice(payload)
            .into_script(),
    };

    Ok(script)
}

/// Parses a raw Bitcoin transaction (legacy or segwit; the segwit
/// marker/flag does not affect `txid()`, which the `bitcoin` crate already
/// excludes it from).
pub fn extract_tx(raw: &[u8]) -> ContractResult<Transaction> {
    Transaction::consensus_decode(&mut &raw[..]).map_err(ContractError::from)
}

/// The double-SHA256 transaction id, matching the network's canonical
/// little-endian display order.
pub fn calculate_txid(tx: &Transaction) -> Txid {
    tx.txid()
}

/// Returns the outpoint (prevout txid + vout) consumed by input `index`.
pub fn extract_outpoint(tx: &Transaction, index: usize) -> ContractResult<OutPoint> {
    tx.input
        .get(index)
        .map(|txin| txin.previous_output)
        .ok_or_else(|| ContractError::Validation(format!("input index {index} out of bounds")))
}

/// Sums the satoshi value of every output.
pub fn parse_outputs_total_value(tx: &Transaction) -> u64 {
    tx.output.iter().map(|o| o.value).sum()
}

/// Returns the raw `scriptPubKey` bytes of output `index`.
pub fn get_locking_script(tx: &Transaction, index: usize) -> ContractResult<Vec<u8>> {
    tx.output
        .get(index)
        .map(|o| o.script_pubkey.to_bytes())
        .ok_or_else(|| ContractError::Validation(format!("output index {index} out of bounds")))
}

/// Returns the satoshi value of output `index` only if its `scriptPubKey`
/// matches the canonical template for `script_type` built from
/// `expected_raw_script` (the 20- or 32-byte payload committed to by a burn
/// request's destination).
pub fn parse_value_from_specific_output_having_script(
    tx: &Transaction,
    index: usize,
    expected_raw_script: &[u8],
    script_type: ScriptType,
) -> ContractResult<Option<u64>> {
    let output = tx
        .output
        .get(index)
        .ok_or_else(|| ContractError::Validation(format!("output index {index} out of bounds")))?;

    let expected = build_locking_script(script_type, expected_raw_script)?;
    if output.script_pubkey == expected {
        Ok(Some(output.value))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::consensus::Encodable;
    use bitcoin::{OutPoint as BOutPoint, Sequence, TxIn, TxOut, Witness};

    fn sample_tx(outputs: Vec<(u64, Script)>) -> Transaction {
        Transaction {
            version: 2,
            lock_time: bitcoin::PackedLockTime(0),
            input: vec![TxIn {
                previous_output: BOutPoint::null(),
                script_sig: Script::new(),
                sequence: Sequence::MAX,
                witness: Witness::new(),
            }],
            output: outputs
                .into_iter()
                .map(|(value, script_pubkey)| TxOut {
                    value,
                    script_pubkey,
                })
                .collect(),
        }
    }

    #[test]
    fn build_locking_script_rejects_wrong_payload_length() {
        let err = build_locking_script(ScriptType::P2pkh, &[0u8; 32]).unwrap_err();
        assert!(matches!(err, ContractError::Validation(_)));
    }

    #[test]
    fn p2wpkh_script_matches_canonical_template() {
        let hash = [7u8; 20];
        let script = build_locking_script(ScriptType::P2wpkh, &hash).unwrap();
        let bytes = script.to_bytes();
        assert_eq!(bytes[0], 0x00);
        assert_eq!(bytes[1], 0x14);
        assert_eq!(&bytes[2..], &hash);
    }

    #[test]
    fn parse_value_matches_only_expected_output() {
        let hash = [9u8; 20];
        let matching_script = build_locking_script(ScriptType::P2wpkh, &hash).unwrap();
        let other_script = build_locking_script(ScriptType::P2wpkh, &[1u8; 20]).unwrap();
        let tx = sample_tx(vec![(1_000, other_script), (2_000, matching_script)]);

        let value =
            parse_value_from_specific_output_having_script(&tx, 1, &hash, ScriptType::P2wpkh)
                .unwrap();
        assert_eq!(value, Some(2_000));

        let no_match =
            parse_value_from_specific_output_having_script(&tx, 0, &hash, ScriptType::P2wpkh)
                .unwrap();
        assert_eq!(no_match, None);
    }

    #[test]
    fn total_output_value_sums_all_outputs() {
        let script = build_locking_script(ScriptType::P2sh, &[0u8; 20]).unwrap();
        let tx = sample_tx(vec![(500, script.clone()), (1_500, script)]);
        assert_eq!(parse_outputs_total_value(&tx), 2_000);
    }

    #[test]
    fn extract_tx_round_trips_through_consensus_encoding() {
        let script = build_locking_script(ScriptType::P2tr, &[2u8; 32]).unwrap();
        let tx = sample_tx(vec![(42, script)]);
        let mut raw = vec![];
        tx.consensus_encode(&mut raw).unwrap();

        let parsed = extract_tx(&raw).unwrap();
        assert_eq!(calculate_txid(&parsed), tx.txid());
    }

    #[test]
    fn extract_outpoint_out_of_bounds_fails_closed() {
        let tx = sample_tx(vec![]);
        let err = extract_outpoint(&tx, 5).unwrap_err();
        assert!(matches!(err, ContractError::Validation(_)));
    }
}
