use anchor_lang::prelude::*;

/// Seed of the keyless address that owns every escrowed vault.
pub const CUSTODY_SEED: &[u8] = b"escrow";

/// Derives the custody authority of `program_id` and its canonical bump.
///
/// Clients use this to verify that a vault has been handed over; the program
/// relies on the same derivation through its account constraints.
pub fn derive_custody_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_SEED], program_id)
}
