//! Reusable-object pools.
//!
//! Dead entities are recycled instead of allocated and dropped every tick.
//! `acquire` moves an instance *out* of the free list, so a live object can
//! never simultaneously sit in a pool — double-ownership is unrepresentable.
//! Pools grow on demand and never fail.

use survivor_core::components::{Enemy, Particle, Projectile};

/// An object that can live in a [`Pool`].
pub trait PoolItem: Default {
    /// Return the instance to an inert, off-screen, zero-lifetime state.
    /// Called by [`Pool::release`] before the object re-enters the free list.
    fn reset(&mut self);
}

/// A free-list allocator for one entity kind, pre-warmed at construction
/// to avoid early-session allocation spikes.
#[derive(Debug)]
pub struct Pool<T: PoolItem> {
    free: Vec<T>,
}

impl<T: PoolItem> Pool<T> {
    /// Create a pool holding `prewarm` inert instances.
    pub fn with_prewarm(prewarm: usize) -> Self {
        let mut free = Vec::with_capacity(prewarm);
        free.resize_with(prewarm, T::default);
        Self { free }
    }

    /// Check out an instance: a recycled one if available, else fresh.
    pub fn acquire(&mut self) -> T {
        self.free.pop().unwrap_or_default()
    }

    /// Reset `item` and return it to the free list.
    pub fn release(&mut self, mut item: T) {
        item.reset();
        self.free.push(item);
    }

    /// Drain every item from `live` back into the pool.
    pub fn release_all(&mut self, live: &mut Vec<T>) {
        for item in live.drain(..) {
            self.release(item);
        }
    }

    /// Current free-list size (observable for lifecycle accounting).
    pub fn free_len(&self) -> usize {
        self.free.len()
    }
}

impl PoolItem for Enemy {
    fn reset(&mut self) {
        *self = Enemy::default();
    }
}

impl PoolItem for Projectile {
    fn reset(&mut self) {
        *self = Projectile::default();
    }
}

impl PoolItem for Particle {
    fn reset(&mut self) {
        *self = Particle::default();
    }
}
