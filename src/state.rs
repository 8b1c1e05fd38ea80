//! Dependency-injected application state.
//!
//! `LabState` is the single shared state object the UI shell owns —
//! wrapped in `Arc` at startup so every window/panel sees the same
//! stores. `RwLock` allows concurrent reads (rendering) while blocking
//! only on writes (user actions). All mutation happens inside the
//! triggering UI event; nothing here spawns background work.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::billing::BillingCart;
use crate::seed::Seed;
use crate::waitlist::Waitlist;
use crate::workflow::TestRegistry;

/// Errors from LabState accessors.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Internal lock error")]
    LockPoisoned,
}

pub struct LabState {
    registry: RwLock<TestRegistry>,
    cart: RwLock<BillingCart>,
    waitlist: RwLock<Waitlist>,
}

impl LabState {
    /// Build the three stores from a seed snapshot.
    pub fn new(seed: Seed) -> Self {
        let (registry, cart, waitlist) = build_stores(seed);
        Self {
            registry: RwLock::new(registry),
            cart: RwLock::new(cart),
            waitlist: RwLock::new(waitlist),
        }
    }

    pub fn empty() -> Self {
        Self::new(Seed::empty())
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn read_registry(
        &self,
    ) -> Result<RwLockReadGuard<'_, TestRegistry>, StateError> {
        self.registry.read().map_err(|_| StateError::LockPoisoned)
    }

    pub fn write_registry(
        &self,
    ) -> Result<RwLockWriteGuard<'_, TestRegistry>, StateError> {
        self.registry.write().map_err(|_| StateError::LockPoisoned)
    }

    pub fn read_cart(&self) -> Result<RwLockReadGuard<'_, BillingCart>, StateError> {
        self.cart.read().map_err(|_| StateError::LockPoisoned)
    }

    pub fn write_cart(&self) -> Result<RwLockWriteGuard<'_, BillingCart>, StateError> {
        self.cart.write().map_err(|_| StateError::LockPoisoned)
    }

    pub fn read_waitlist(&self) -> Result<RwLockReadGuard<'_, Waitlist>, StateError> {
        self.waitlist.read().map_err(|_| StateError::LockPoisoned)
    }

    pub fn write_waitlist(&self) -> Result<RwLockWriteGuard<'_, Waitlist>, StateError> {
        self.waitlist.write().map_err(|_| StateError::LockPoisoned)
    }

    /// Checkout needs the cart and the registry together; one lock scope
    /// keeps a renderer from observing the half-finished handoff.
    pub fn print_bill(
        &self,
    ) -> Result<Result<crate::billing::BillSummary, crate::billing::BillingError>, StateError>
    {
        let mut cart = self.cart.write().map_err(|_| StateError::LockPoisoned)?;
        let mut registry = self.registry.write().map_err(|_| StateError::LockPoisoned)?;
        Ok(cart.print_bill(&mut registry))
    }

    /// Waitlist selection spans two stores as well.
    pub fn select_waitlist_patient(&self, id: &str) -> Result<bool, StateError> {
        let mut waitlist = self.waitlist.write().map_err(|_| StateError::LockPoisoned)?;
        let mut cart = self.cart.write().map_err(|_| StateError::LockPoisoned)?;
        Ok(waitlist.select_patient(id, &mut cart))
    }

    // ── Reset ───────────────────────────────────────────────

    /// Swap in a fresh seeded snapshot — the "page reload" the source app
    /// got for free from the browser.
    pub fn reset(&self, seed: Seed) -> Result<(), StateError> {
        let (registry, cart, waitlist) = build_stores(seed);
        *self.registry.write().map_err(|_| StateError::LockPoisoned)? = registry;
        *self.cart.write().map_err(|_| StateError::LockPoisoned)? = cart;
        *self.waitlist.write().map_err(|_| StateError::LockPoisoned)? = waitlist;
        tracing::info!("State reset to seed snapshot");
        Ok(())
    }
}

impl Default for LabState {
    fn default() -> Self {
        Self::new(Seed::demo())
    }
}

fn build_stores(seed: Seed) -> (TestRegistry, BillingCart, Waitlist) {
    let mut registry = TestRegistry::new();
    for test in seed.tests {
        registry.insert(test);
    }
    (
        registry,
        BillingCart::with_customers(seed.customers),
        Waitlist::new(seed.waitlist),
    )
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
