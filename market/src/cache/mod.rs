use common_structs::{MarketIndex, MarketParams};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of the market's state, cached from on-chain storage for the
/// duration of one endpoint call.
///
/// **Scope**: Holds the totals, the indexes and the timestamps every market
/// operation reads and mutates.
///
/// **Goal**: Load the state once, mutate it in memory and write it back in a
/// single place when the endpoint is done.
///
/// **Fields**:
/// - Monetary values (`supplied`, `borrowed`, `cash`, `reserves`) use the
///   asset decimals; `supplied` and `borrowed` are scaled.
/// - Indexes (`borrow_index`, `supply_index`) use RAY precision.
/// - Timestamps are in seconds.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    /// Total scaled supply.
    pub supplied: ManagedDecimal<C::Api, NumDecimals>,
    /// Total scaled borrows.
    pub borrowed: ManagedDecimal<C::Api, NumDecimals>,
    /// Uninvested underlying held by the market.
    pub cash: ManagedDecimal<C::Api, NumDecimals>,
    /// Protocol share of the accrued interest.
    pub reserves: ManagedDecimal<C::Api, NumDecimals>,
    /// The timestamp of the current block.
    pub timestamp: u64,
    pub params: MarketParams<C::Api>,
    pub borrow_index: ManagedDecimal<C::Api, NumDecimals>,
    pub supply_index: ManagedDecimal<C::Api, NumDecimals>,
    /// Zero with the asset decimals.
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
    /// The timestamp of the last accrual.
    pub last_timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Constructs a new Cache by reading the current state from on-chain storage.
    pub fn new(sc_ref: &'a C) -> Self {
        let params = sc_ref.params().get();
        Cache {
            zero: sc_ref.zero_with(params.asset_decimals),
            supplied: sc_ref.supplied().get(),
            borrowed: sc_ref.borrowed().get(),
            cash: sc_ref.cash().get(),
            reserves: sc_ref.reserves().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            params,
            borrow_index: sc_ref.borrow_index().get(),
            supply_index: sc_ref.supply_index().get(),
            last_timestamp: sc_ref.last_timestamp().get(),
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the mutable fields back to storage when the Cache is dropped.
    fn drop(&mut self) {
        self.sc_ref.supplied().set(&self.supplied);
        self.sc_ref.borrowed().set(&self.borrowed);
        self.sc_ref.cash().set(&self.cash);
        self.sc_ref.reserves().set(&self.reserves);
        self.sc_ref.borrow_index().set(&self.borrow_index);
        self.sc_ref.supply_index().set(&self.supply_index);
        self.sc_ref.last_timestamp().set(self.last_timestamp);
        self.sc_ref.params().set(&self.params);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule + common_rates::InterestRates,
{
    /// Converts a raw BigUint value into a ManagedDecimal with the asset decimals.
    pub fn get_decimal_value(&self, value: &BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_decimal(value.clone(), self.params.asset_decimals)
    }

    pub fn get_index(&self) -> MarketIndex<C::Api> {
        MarketIndex {
            supply_index: self.supply_index.clone(),
            borrow_index: self.borrow_index.clone(),
        }
    }

    /// Outstanding debt of the whole market in underlying units.
    pub fn get_total_borrows(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.get_original_borrow_amount(&self.borrowed)
    }

    pub fn get_utilization(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.calc_utilization(
            self.cash.into_raw_units(),
            self.get_total_borrows().into_raw_units(),
            self.reserves.into_raw_units(),
        )
    }

    /// Checks if the market holds enough uninvested underlying for `amount`.
    pub fn has_cash(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        self.cash >= *amount
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.asset_id == *asset
    }

    pub fn get_scaled_supply_amount(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .original_to_scaled(amount, &self.supply_index, self.params.asset_decimals)
    }

    pub fn get_scaled_borrow_amount(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .original_to_scaled(amount, &self.borrow_index, self.params.asset_decimals)
    }

    pub fn get_original_supply_amount(
        &self,
        scaled_amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .scaled_to_original(scaled_amount, &self.supply_index, self.params.asset_decimals)
    }

    pub fn get_original_borrow_amount(
        &self,
        scaled_amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .scaled_to_original(scaled_amount, &self.borrow_index, self.params.asset_decimals)
    }
}
