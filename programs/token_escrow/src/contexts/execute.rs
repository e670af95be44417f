use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::{errors::EscrowError, EscrowRecord, CUSTODY_SEED};

/// Accounts needed for the `execute` instruction: both legs of the swap, the
/// custody-held vault and the record being consumed.
#[derive(Accounts)]
pub struct Execute<'info> {
    /// The counterparty delivering token B
    pub taker: Signer<'info>,

    /// The original initializer, refunded the vault and record rent; does not sign
    #[account(
        mut,
        address = escrow_record.initializer_key @ EscrowError::InitializerMismatch
    )]
    pub initializer: SystemAccount<'info>,

    /// Terms of the swap, closed into the initializer once both legs have landed
    #[account(
        mut,
        close = initializer
    )]
    pub escrow_record: Box<Account<'info, EscrowRecord>>,

    /// Vault holding token A, must be the one recorded and still under custody
    #[account(
        mut,
        address = escrow_record.initializer_deposit_token_account @ EscrowError::VaultMismatch,
        constraint = vault.owner == custody_authority.key() @ EscrowError::CustodyAuthorityMismatch,
        constraint = vault.mint == mint_a.key() @ EscrowError::MintMismatch
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: keyless PDA re-derived from the bump stored in the record
    #[account(seeds = [CUSTODY_SEED], bump = escrow_record.custody_bump)]
    pub custody_authority: UncheckedAccount<'info>,

    /// Token A, deposited by the initializer
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    /// Token B, delivered by the taker
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    /// Taker's token B account, source of the first leg
    #[account(
        mut,
        constraint = taker_deposit_token_account.owner == taker.key() @ EscrowError::TakerNotOwner,
        constraint = taker_deposit_token_account.mint == mint_b.key() @ EscrowError::MintMismatch
    )]
    pub taker_deposit_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Taker's token A account, destination of the released vault
    #[account(
        mut,
        constraint = taker_receive_token_account.mint == mint_a.key() @ EscrowError::MintMismatch
    )]
    pub taker_receive_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Initializer's token B account as recorded at open
    #[account(
        mut,
        address = escrow_record.initializer_receive_token_account @ EscrowError::ReceiveAccountMismatch,
        constraint = initializer_receive_token_account.mint == mint_b.key() @ EscrowError::MintMismatch
    )]
    pub initializer_receive_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Execute<'info> {
    /// Rejects the exchange before anything moves if the vault drifted from the
    /// recorded amount or the taker cannot pay.
    pub fn check_balances(&self) -> Result<()> {
        self.escrow_record.check_release(self.vault.amount)?;
        self.escrow_record
            .check_taker_balance(self.taker_deposit_token_account.amount)
    }

    /// First leg: the taker pays exactly `taker_amount` of token B to the initializer.
    pub fn deliver_taker_tokens(&mut self) -> Result<()> {
        let accounts = TransferChecked {
            from: self.taker_deposit_token_account.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.initializer_receive_token_account.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let ctx = CpiContext::new(self.token_program.to_account_info(), accounts);
        transfer_checked(ctx, self.escrow_record.taker_amount, self.mint_b.decimals)
    }

    /// Second leg: the custody authority releases the whole vault to the taker,
    /// then closes it into the initializer.
    pub fn release_and_close_vault(&mut self) -> Result<()> {
        let bump = [self.escrow_record.custody_bump];
        let signer_seeds: [&[&[u8]]; 1] = [&[CUSTODY_SEED, &bump]];

        let accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.taker_receive_token_account.to_account_info(),
            authority: self.custody_authority.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, self.vault.amount, self.mint_a.decimals)?;

        let accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.custody_authority.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        close_account(ctx)?;

        msg!("custody released vault {}", self.vault.key());
        Ok(())
    }
}
