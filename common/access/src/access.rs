#![no_std]

use common_errors::ERROR_UNAUTHORIZED;

multiversx_sc::imports!();

/// Admin role shared by every protocol contract.
///
/// Privileged endpoints take the caller explicitly and check it against the
/// stored admin. The role is handed over in two steps: the current admin
/// proposes a pending admin, which then has to accept.
#[multiversx_sc::module]
pub trait AccessModule: common_events::EventsModule {
    fn require_admin(&self, caller: &ManagedAddress) {
        require!(*caller == self.admin().get(), ERROR_UNAUTHORIZED);
    }

    /// Returns the caller after checking it holds the admin role.
    fn caller_as_admin(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        self.require_admin(&caller);
        caller
    }

    #[endpoint(setPendingAdmin)]
    fn set_pending_admin(&self, pending_admin: ManagedAddress) {
        self.caller_as_admin();

        self.pending_admin().set(&pending_admin);
        self.new_pending_admin_event(&pending_admin);
    }

    #[endpoint(acceptAdmin)]
    fn accept_admin(&self) {
        let caller = self.blockchain().get_caller();
        let pending_admin = self.pending_admin();
        require!(
            !pending_admin.is_empty() && pending_admin.get() == caller,
            ERROR_UNAUTHORIZED
        );

        let old_admin = self.admin().get();
        self.admin().set(&caller);
        self.pending_admin().clear();

        self.new_admin_event(&old_admin, &caller);
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPendingAdmin)]
    #[storage_mapper("pending_admin")]
    fn pending_admin(&self) -> SingleValueMapper<ManagedAddress>;
}
