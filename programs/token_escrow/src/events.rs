use anchor_lang::prelude::*;

#[event]
pub struct EscrowOpened {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub vault: Pubkey,
    pub initializer_amount: u64,
    pub taker_amount: u64,
}

#[event]
pub struct EscrowExecuted {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub taker: Pubkey,
    pub initializer_amount: u64,
    pub taker_amount: u64,
}

#[event]
pub struct EscrowAborted {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub vault: Pubkey,
}
