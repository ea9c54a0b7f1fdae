multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_ADMIN, ERR_NOT_ADMIN, ERR_NOT_AUTHORIZED};

/// Owner plus an owner-managed admin set. Admins may end and reset
/// rounds; configuration stays owner-only.
#[multiversx_sc::module]
pub trait AccessModule: crate::events::EventsModule {
    #[only_owner]
    #[endpoint(addAdmin)]
    fn add_admin(&self, address: ManagedAddress) {
        require!(self.admins().insert(address.clone()), ERR_ALREADY_ADMIN);
        self.admin_added_event(&address);
    }

    #[only_owner]
    #[endpoint(removeAdmin)]
    fn remove_admin(&self, address: ManagedAddress) {
        require!(self.admins().swap_remove(&address), ERR_NOT_ADMIN);
        self.admin_removed_event(&address);
    }

    fn require_owner_or_admin(&self) {
        let caller = self.blockchain().get_caller();
        let is_owner = caller == self.blockchain().get_owner_address();
        require!(
            is_owner || self.admins().contains(&caller),
            ERR_NOT_AUTHORIZED
        );
    }

    #[view(isAdmin)]
    fn is_admin(&self, address: ManagedAddress) -> bool {
        self.admins().contains(&address)
    }

    #[view(getAdmins)]
    fn get_admins(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for admin in self.admins().iter() {
            result.push(admin);
        }
        result
    }

    #[storage_mapper("admins")]
    fn admins(&self) -> UnorderedSetMapper<ManagedAddress>;
}
