multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_structs::{AccountLiquidity, AccountPosition};

use crate::{cache::Cache, oracle, storage};

/// A change applied to one market before valuing an account, as if the
/// account had already redeemed or borrowed. Amounts are raw asset units.
pub struct HypotheticalChange<M: ManagedTypeApi> {
    pub market: ManagedAddress<M>,
    pub redeem_tokens: BigUint<M>,
    pub borrow_amount: BigUint<M>,
}

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + oracle::OracleModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Returns the liquidity and the shortfall of `account`, both WAD.
    /// At most one of them is nonzero.
    #[view(getAccountLiquidity)]
    fn get_account_liquidity(
        &self,
        account: ManagedAddress,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        let mut cache = Cache::new(self);
        let liquidity = self.compute_account_liquidity(&account, None, &mut cache);

        (liquidity.liquidity(), liquidity.shortfall()).into()
    }

    /// Same as `getAccountLiquidity`, as if `account` had redeemed
    /// `redeem_tokens` and borrowed `borrow_amount` in `market`.
    #[view(getHypotheticalAccountLiquidity)]
    fn get_hypothetical_account_liquidity(
        &self,
        account: ManagedAddress,
        market: ManagedAddress,
        redeem_tokens: BigUint,
        borrow_amount: BigUint,
    ) -> MultiValue2<ManagedDecimal<Self::Api, NumDecimals>, ManagedDecimal<Self::Api, NumDecimals>>
    {
        let mut cache = Cache::new(self);
        let change = HypotheticalChange {
            market,
            redeem_tokens,
            borrow_amount,
        };
        let liquidity = self.compute_account_liquidity(&account, Some(&change), &mut cache);

        (liquidity.liquidity(), liquidity.shortfall()).into()
    }

    /// Values the collateral and the debt of an account across every listed
    /// market.
    ///
    /// **Process**:
    /// 1. Skips markets where the account holds nothing, unless the
    ///    hypothetical change targets them.
    /// 2. Brings the market indexes to the current timestamp and converts
    ///    the scaled balances into underlying amounts.
    /// 3. Applies the hypothetical redeem and borrow to the target market.
    /// 4. Prices the asset only if the market contributes: supply counts when
    ///    the market was entered and has a nonzero collateral factor, debt
    ///    always counts.
    ///
    /// # Returns
    /// - `AccountLiquidity`: Risk-adjusted collateral and debt values (WAD).
    fn compute_account_liquidity(
        &self,
        account: &ManagedAddress,
        change: Option<&HypotheticalChange<Self::Api>>,
        cache: &mut Cache<Self>,
    ) -> AccountLiquidity<Self::Api> {
        let entered_markets = self.account_markets(account);
        let mut liquidity = AccountLiquidity::new();

        for market in self.markets().iter() {
            let target = change.filter(|change| change.market == market);
            let position_mapper = self.market_positions(market.clone(), account.clone());
            if position_mapper.is_empty() && target.is_none() {
                continue;
            }

            let snapshot = cache.get_cached_market(&market);
            let asset_decimals = snapshot.params.asset_decimals;
            let position = if position_mapper.is_empty() {
                AccountPosition::new(asset_decimals)
            } else {
                position_mapper.get()
            };

            let mut supply_tokens = position.supply_tokens;
            let mut borrow_balance = self.scaled_to_original(
                &position.borrow_scaled,
                &snapshot.index.borrow_index,
                asset_decimals,
            );

            if let Some(change) = target {
                let redeemed = self.to_decimal(change.redeem_tokens.clone(), asset_decimals);
                supply_tokens = self.saturating_sub(&supply_tokens, &redeemed);
                borrow_balance += &self.to_decimal(change.borrow_amount.clone(), asset_decimals);
            }

            let collateral_factor = self.market_config(&market).get().collateral_factor;
            let counts_as_collateral = entered_markets.contains(&market)
                && !self.is_zero(&supply_tokens)
                && !self.is_zero(&collateral_factor);
            let has_debt = !self.is_zero(&borrow_balance);
            if !counts_as_collateral && !has_debt {
                continue;
            }

            let price = cache.get_cached_price(&snapshot.params.asset_id);

            if counts_as_collateral {
                let supply_underlying = self.scaled_to_original(
                    &supply_tokens,
                    &snapshot.index.supply_index,
                    asset_decimals,
                );
                let supply_value = self.get_asset_value(&supply_underlying, &price);
                liquidity.collateral_value +=
                    &self.mul_half_up(&supply_value, &collateral_factor, WAD_PRECISION);
            }

            if has_debt {
                liquidity.debt_value += &self.get_asset_value(&borrow_balance, &price);
            }
        }

        liquidity
    }

    /// WAD value of an underlying amount at a WAD price per whole unit.
    #[inline]
    fn get_asset_value(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_half_up(amount, price, WAD_PRECISION)
    }
}
