#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] supply_index: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] borrow_index: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] reserves: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("mint")]
    fn mint_event(
        &self,
        #[indexed] minter: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] tokens: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("redeem")]
    fn redeem_event(
        &self,
        #[indexed] redeemer: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] tokens: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] position: &AccountPosition<Self::Api>,
    );

    // payer differs from borrower on repay-on-behalf and liquidations
    #[event("repay_borrow")]
    fn repay_borrow_event(
        &self,
        #[indexed] payer: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] position: &AccountPosition<Self::Api>,
    );

    #[event("liquidate_borrow")]
    fn liquidate_borrow_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] repay_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] collateral_market: &ManagedAddress,
        #[indexed] seize_tokens: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("new_reserve_factor")]
    fn new_reserve_factor_event(
        &self,
        #[indexed] old_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] new_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("reserves_reduced")]
    fn reserves_reduced_event(
        &self,
        #[indexed] admin: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] reserves: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("new_interest_rate_model")]
    fn new_interest_rate_model_event(
        &self,
        #[indexed] old_model: &ManagedAddress,
        #[indexed] new_model: &ManagedAddress,
    );

    #[event("market_listed")]
    fn market_listed_event(
        &self,
        #[indexed] market: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
    );

    #[event("market_entered")]
    fn market_entered_event(&self, #[indexed] market: &ManagedAddress, #[indexed] account: &ManagedAddress);

    #[event("market_exited")]
    fn market_exited_event(&self, #[indexed] market: &ManagedAddress, #[indexed] account: &ManagedAddress);

    #[event("new_collateral_factor")]
    fn new_collateral_factor_event(
        &self,
        #[indexed] market: &ManagedAddress,
        #[indexed] old_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] new_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("new_price_oracle")]
    fn new_price_oracle_event(
        &self,
        #[indexed] old_oracle: Option<&ManagedAddress>,
        #[indexed] new_oracle: &ManagedAddress,
    );

    #[event("new_close_factor")]
    fn new_close_factor_event(&self, #[indexed] close_factor: &ManagedDecimal<Self::Api, NumDecimals>);

    #[event("new_liquidation_incentive")]
    fn new_liquidation_incentive_event(
        &self,
        #[indexed] liquidation_incentive: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("price_posted")]
    fn price_posted_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] previous_price: Option<&BigUint>,
        #[indexed] new_price: &BigUint,
    );

    #[event("new_pending_admin")]
    fn new_pending_admin_event(&self, #[indexed] pending_admin: &ManagedAddress);

    #[event("new_admin")]
    fn new_admin_event(&self, #[indexed] old_admin: &ManagedAddress, #[indexed] new_admin: &ManagedAddress);
}
