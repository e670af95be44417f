use anchor_lang::prelude::*;

use crate::errors::EscrowError;

/// Terms of one pending swap. Written once by `open` and closed by either
/// `execute` or `abort`; never updated in place.
#[account]
#[derive(InitSpace)]
pub struct EscrowRecord {
    pub initializer_key: Pubkey,                   // only this key may abort
    pub initializer_deposit_token_account: Pubkey, // vault held by the custody authority
    pub initializer_receive_token_account: Pubkey, // where the taker's tokens land
    pub initializer_amount: u64,                   // token A locked in the vault
    pub taker_amount: u64,                         // token B the taker must deliver
    pub custody_bump: u8,                          // bump of the custody authority PDA
}

impl EscrowRecord {
    /// Allocated size including the account discriminator.
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Checks the terms proposed at `open` against the vault being handed over.
    pub fn check_terms(initializer_amount: u64, taker_amount: u64, vault_balance: u64) -> Result<()> {
        require!(initializer_amount > 0, EscrowError::InvalidAmount);
        require!(taker_amount > 0, EscrowError::InvalidAmount);
        require_eq!(
            vault_balance,
            initializer_amount,
            EscrowError::DepositAmountMismatch
        );
        Ok(())
    }

    /// The release leg moves the whole vault, so it must still hold exactly
    /// what was recorded.
    pub fn check_release(&self, vault_balance: u64) -> Result<()> {
        require_eq!(
            vault_balance,
            self.initializer_amount,
            EscrowError::DepositAmountMismatch
        );
        Ok(())
    }

    pub fn check_taker_balance(&self, taker_balance: u64) -> Result<()> {
        require_gte!(
            taker_balance,
            self.taker_amount,
            EscrowError::InsufficientTakerBalance
        );
        Ok(())
    }
}
