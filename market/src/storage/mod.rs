multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{AccountPosition, MarketParams};

/// The Storage trait provides on-chain storage mappers and view functions
/// for accessing the core state variables of the market.
///
/// The storage keys are part of the market interface: the controller reads
/// them directly to value positions without calling into the market.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the market parameters.
    ///
    /// These include the asset, its decimals, the reserve factor and the
    /// interest rate model address.
    ///
    /// # Returns
    /// - `MarketParams<Self::Api>`: The market configuration.
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<MarketParams<Self::Api>>;

    /// Returns the controller this market asks before risky operations.
    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    /// Retrieves the total scaled supply of the market.
    ///
    /// # Returns
    /// - `ManagedDecimal`: The sum of every account's supply tokens.
    #[view(getTotalSupply)]
    #[storage_mapper("supplied")]
    fn supplied(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Retrieves the total scaled borrows of the market.
    ///
    /// Multiply by the borrow index to get the outstanding debt.
    #[view(getTotalBorrowsScaled)]
    #[storage_mapper("borrowed")]
    fn borrowed(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Retrieves the uninvested underlying held by the market.
    #[view(getCash)]
    #[storage_mapper("cash")]
    fn cash(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Retrieves the protocol share of accrued interest, part of cash once repaid.
    #[view(getTotalReserves)]
    #[storage_mapper("reserves")]
    fn reserves(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Retrieves the current borrow index.
    ///
    /// The borrow index is used to calculate accrued interest on borrow positions.
    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Retrieves the current supply index.
    ///
    /// The supply index is used to compute the yield for suppliers.
    #[view(getSupplyIndex)]
    #[storage_mapper("supply_index")]
    fn supply_index(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Retrieves the last update timestamp for the interest indexes.
    #[view(getLastTimestamp)]
    #[storage_mapper("last_timestamp")]
    fn last_timestamp(&self) -> SingleValueMapper<u64>;

    /// Scaled balances of an account. Empty while the account holds nothing.
    #[view(getAccountPosition)]
    #[storage_mapper("positions")]
    fn positions(&self, account: &ManagedAddress) -> SingleValueMapper<AccountPosition<Self::Api>>;
}
