use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    set_authority, spl_token_2022::instruction::AuthorityType, SetAuthority, TokenAccount,
    TokenInterface,
};

use crate::{errors::EscrowError, EscrowRecord, CUSTODY_SEED};

#[derive(Accounts)]
pub struct Abort<'info> {
    /// Must be the initializer stored in the record
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Closed into the initializer after custody is returned
    #[account(
        mut,
        close = initializer,
        constraint = escrow_record.initializer_key == initializer.key() @ EscrowError::NotInitializer
    )]
    pub escrow_record: Account<'info, EscrowRecord>,

    /// The recorded vault, handed back to the initializer untouched
    #[account(
        mut,
        address = escrow_record.initializer_deposit_token_account @ EscrowError::VaultMismatch,
        constraint = vault.owner == custody_authority.key() @ EscrowError::CustodyAuthorityMismatch
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: keyless PDA re-derived from the bump stored in the record
    #[account(seeds = [CUSTODY_SEED], bump = escrow_record.custody_bump)]
    pub custody_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Abort<'info> {
    /// Returns ownership of the vault to the initializer. Balances are not touched.
    pub fn return_custody(&mut self) -> Result<()> {
        let bump = [self.escrow_record.custody_bump];
        let signer_seeds: [&[&[u8]]; 1] = [&[CUSTODY_SEED, &bump]];

        let accounts = SetAuthority {
            current_authority: self.custody_authority.to_account_info(),
            account_or_mint: self.vault.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        set_authority(
            ctx,
            AuthorityType::AccountOwner,
            Some(self.initializer.key()),
        )?;

        msg!("custody of vault {} returned", self.vault.key());
        Ok(())
    }
}
