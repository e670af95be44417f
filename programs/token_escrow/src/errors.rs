use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: both sides of the swap must be greater than zero")]
    InvalidAmount,
    #[msg("Vault balance does not equal the escrowed amount")]
    DepositAmountMismatch,
    #[msg("Vault is not owned by the initializer")]
    VaultOwnerMismatch,
    #[msg("Vault must not carry a close authority")]
    VaultHasCloseAuthority,
    #[msg("Deposit and receive accounts hold the same mint")]
    SameMint,
    #[msg("Vault does not match the escrow record")]
    VaultMismatch,
    #[msg("Receive account does not match the escrow record")]
    ReceiveAccountMismatch,
    #[msg("Token account holds an unexpected mint")]
    MintMismatch,
    #[msg("Initializer does not match the escrow record")]
    InitializerMismatch,
    #[msg("Vault is not held by the custody authority")]
    CustodyAuthorityMismatch,
    #[msg("Taker balance does not cover the requested amount")]
    InsufficientTakerBalance,
    #[msg("Only the initializer may abort the escrow")]
    NotInitializer,
    #[msg("Taker does not own the deposit account")]
    TakerNotOwner,
}
