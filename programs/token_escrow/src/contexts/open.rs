use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    set_authority, spl_token_2022::instruction::AuthorityType, SetAuthority, TokenAccount,
    TokenInterface,
};

use crate::{errors::EscrowError, EscrowRecord, CUSTODY_SEED};

/// Accounts needed to open an escrow: the initializer, the pre-funded vault being
/// handed to the custody authority, and a fresh record account.
#[derive(Accounts)]
pub struct Open<'info> {
    /// Signs the hand-off of the vault and pays for the record
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Token A account funded by the initializer; its owner becomes the custody authority
    #[account(
        mut,
        constraint = vault.owner == initializer.key() @ EscrowError::VaultOwnerMismatch,
        // custody has to be able to close the vault once it is drained
        constraint = vault.close_authority.is_none() @ EscrowError::VaultHasCloseAuthority
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Token B account that will receive the taker's side of the swap
    #[account(
        constraint = initializer_receive_token_account.mint != vault.mint @ EscrowError::SameMint
    )]
    pub initializer_receive_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Fresh account chosen by the caller; `init` fails if it is already in use
    #[account(
        init,
        payer = initializer,
        space = EscrowRecord::SPACE
    )]
    pub escrow_record: Account<'info, EscrowRecord>,

    /// CHECK: keyless PDA, only its address and bump are used
    #[account(seeds = [CUSTODY_SEED], bump)]
    pub custody_authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Open<'info> {
    /// Validates the proposed terms and writes the record.
    pub fn save_escrow(
        &mut self,
        initializer_amount: u64,
        taker_amount: u64,
        bumps: &OpenBumps,
    ) -> Result<()> {
        EscrowRecord::check_terms(initializer_amount, taker_amount, self.vault.amount)?;

        self.escrow_record.set_inner(EscrowRecord {
            initializer_key: self.initializer.key(),
            initializer_deposit_token_account: self.vault.key(),
            initializer_receive_token_account: self.initializer_receive_token_account.key(),
            initializer_amount,
            taker_amount,
            custody_bump: bumps.custody_authority,
        });
        Ok(())
    }

    /// Reassigns the vault to the custody authority. From here on only `execute`
    /// or `abort` can move it.
    pub fn hand_off_custody(&mut self) -> Result<()> {
        let accounts = SetAuthority {
            current_authority: self.initializer.to_account_info(),
            account_or_mint: self.vault.to_account_info(),
        };
        let ctx = CpiContext::new(self.token_program.to_account_info(), accounts);
        set_authority(
            ctx,
            AuthorityType::AccountOwner,
            Some(self.custody_authority.key()),
        )?;

        msg!(
            "vault {} now held by custody authority {}",
            self.vault.key(),
            self.custody_authority.key()
        );
        Ok(())
    }
}
