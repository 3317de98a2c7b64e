//! Validation helpers for the election contracts
//!
//! Input checks shared by every entry point, returning the matching
//! `ElectionError` so callers can propagate with `?`.

use crate::constants::FIRST_PROPOSAL_INDEX;
use crate::errors::ElectionError;
use crate::types::ElectionPhase;
use soroban_sdk::{xdr::ToXdr, Bytes, String};

/// Length of the XDR header (`ScVal` tag + length) before string bytes
const XDR_STRING_HEADER_LEN: u32 = 8;

/// Bytes decoded per step when scanning a description
const SCAN_CHUNK_LEN: u32 = 64;

/// Longest UTF-8 sequence that can straddle two chunks
const MAX_UTF8_CARRY: usize = 3;

// ===== Phase Validation =====

/// Validate that the election is in `required`
pub fn validate_phase(current: ElectionPhase, required: ElectionPhase) -> Result<(), ElectionError> {
    if current != required {
        return Err(ElectionError::wrong_phase(required));
    }
    Ok(())
}

// ===== Proposal Validation =====

/// Validate a proposal description
///
/// # Returns
/// `Err(ElectionError::EmptyProposal)` for an empty description or one made
/// only of Unicode whitespace. Length is not limited.
pub fn validate_description(description: &String) -> Result<(), ElectionError> {
    let len = description.len();
    if len == 0 {
        return Err(ElectionError::EmptyProposal);
    }

    let env = description.env();
    let encoded = description.clone().to_xdr(env);
    let text = encoded.slice(XDR_STRING_HEADER_LEN..XDR_STRING_HEADER_LEN + len);
    if is_blank(&text) {
        return Err(ElectionError::EmptyProposal);
    }
    Ok(())
}

/// True when `bytes` is UTF-8 made only of whitespace.
///
/// Decodes in fixed chunks, carrying a split multi-byte character over to
/// the next chunk. Invalid UTF-8 is never blank.
fn is_blank(bytes: &Bytes) -> bool {
    let len = bytes.len();
    let mut buf = [0u8; SCAN_CHUNK_LEN as usize + MAX_UTF8_CARRY];
    let mut carry = 0usize;
    let mut offset = 0u32;

    while offset < len {
        let end = core::cmp::min(offset + SCAN_CHUNK_LEN, len);
        let filled = carry + (end - offset) as usize;
        bytes
            .slice(offset..end)
            .copy_into_slice(&mut buf[carry..filled]);

        let valid = match core::str::from_utf8(&buf[..filled]) {
            Ok(_) => filled,
            // Truncated sequence at the end of the chunk
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => return false,
        };
        let all_whitespace = core::str::from_utf8(&buf[..valid])
            .map(|s| s.chars().all(char::is_whitespace))
            .unwrap_or(false);
        if !all_whitespace {
            return false;
        }

        buf.copy_within(valid..filled, 0);
        carry = filled - valid;
        offset = end;
    }
    carry == 0
}

/// Validate that `index` names a submitted proposal (1..=count)
pub fn validate_proposal_index(index: u32, proposal_count: u32) -> Result<(), ElectionError> {
    if index < FIRST_PROPOSAL_INDEX || index > proposal_count {
        return Err(ElectionError::ProposalNotFound);
    }
    Ok(())
}

// ===== Arithmetic Helpers =====

/// Increment a counter, returning error on overflow
pub fn safe_increment(value: u32) -> Result<u32, ElectionError> {
    value.checked_add(1).ok_or(ElectionError::Overflow)
}
