use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod errors;
pub mod events;
pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;

#[program]
pub mod token_escrow {
    use super::*;
    use crate::events::{EscrowAborted, EscrowExecuted, EscrowOpened};

    /// Opens an escrow: records the terms and hands the initializer's pre-funded
    /// vault over to the custody authority
    pub fn open(ctx: Context<Open>, initializer_amount: u64, taker_amount: u64) -> Result<()> {
        ctx.accounts
            .save_escrow(initializer_amount, taker_amount, &ctx.bumps)?;
        ctx.accounts.hand_off_custody()?;

        emit!(EscrowOpened {
            escrow: ctx.accounts.escrow_record.key(),
            initializer: ctx.accounts.initializer.key(),
            vault: ctx.accounts.vault.key(),
            initializer_amount,
            taker_amount,
        });
        Ok(())
    }

    /// Swaps both sides atomically. The taker's leg runs first so custody only
    /// releases the vault once token B has already moved in this transaction
    pub fn execute(ctx: Context<Execute>) -> Result<()> {
        ctx.accounts.check_balances()?;
        ctx.accounts.deliver_taker_tokens()?;
        ctx.accounts.release_and_close_vault()?;

        emit!(EscrowExecuted {
            escrow: ctx.accounts.escrow_record.key(),
            initializer: ctx.accounts.initializer.key(),
            taker: ctx.accounts.taker.key(),
            initializer_amount: ctx.accounts.escrow_record.initializer_amount,
            taker_amount: ctx.accounts.escrow_record.taker_amount,
        });
        Ok(())
    }

    /// Cancels the escrow; only the initializer may call it
    pub fn abort(ctx: Context<Abort>) -> Result<()> {
        ctx.accounts.return_custody()?;

        emit!(EscrowAborted {
            escrow: ctx.accounts.escrow_record.key(),
            initializer: ctx.accounts.initializer.key(),
            vault: ctx.accounts.vault.key(),
        });
        Ok(())
    }
}
