use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule: storage::Storage {
    #[view(isListed)]
    fn is_listed(&self, market: ManagedAddress) -> bool {
        self.markets().contains(&market)
    }

    /// Checks whether `account` entered `market`.
    #[view(checkMembership)]
    fn check_membership(&self, account: ManagedAddress, market: ManagedAddress) -> bool {
        self.account_markets(&account).contains(&market)
    }
}
