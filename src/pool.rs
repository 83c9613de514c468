//! Reuse objects that are no longer in use instead of allocating new ones.
//!
//! Projectiles are fired and disappear constantly, the pool keeps every projectile ever created and hands out the ones that went out of view.

/// An object that can be handed out by a [`Pool`].
pub trait Poolable {
    /// Whether the object is in use, active objects are never handed out.
    fn is_active(&self) -> bool;
}

/// Growing collection of reusable objects.
///
/// Never shrinks, the amount of objects is the maximum amount that was active at the same time.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    /// All objects, active or not.
    items: Vec<T>,
}

impl<T: Poolable> Pool<T> {
    /// Create an empty pool.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get the first inactive object, or create a new one when all are in use.
    ///
    /// The returned object is still inactive, the caller is responsible for activating it.
    ///
    /// # Arguments
    ///
    /// * `create` - Called to construct a new object when no inactive object exists.
    pub fn acquire_with(&mut self, create: impl FnOnce() -> T) -> &mut T {
        let index = if let Some(index) = self.items.iter().position(|item| !item.is_active()) {
            index
        } else {
            log::debug!("Growing pool to {} objects", self.items.len() + 1);

            self.items.push(create());
            self.items.len() - 1
        };

        &mut self.items[index]
    }

    /// Iterate over all objects that are in use.
    #[inline]
    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.is_active())
    }

    /// Iterate mutably over all objects, active or not.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Amount of objects created, active or not.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no object has been created yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Poolable> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Pool, Poolable};

    #[derive(Debug, Default)]
    struct Shot {
        active: bool,
        id: u32,
    }

    impl Poolable for Shot {
        fn is_active(&self) -> bool {
            self.active
        }
    }

    #[test]
    fn grows_when_everything_is_active() {
        let mut pool = Pool::new();

        pool.acquire_with(|| Shot { active: false, id: 1 }).active = true;
        pool.acquire_with(|| Shot { active: false, id: 2 }).active = true;

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.active().count(), 2);
    }

    #[test]
    fn reuses_first_inactive() {
        let mut pool = Pool::new();

        for id in 0..3 {
            pool.acquire_with(|| Shot { active: false, id }).active = true;
        }

        // Deactivate the middle and last shot
        pool.iter_mut().skip(1).for_each(|shot| shot.active = false);

        let reused = pool.acquire_with(|| unreachable!("pool must not grow"));
        assert_eq!(reused.id, 1);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn inactive_acquire_does_not_grow_twice() {
        let mut pool = Pool::<Shot>::new();

        // Acquiring without activating keeps handing out the same object
        pool.acquire_with(Shot::default);
        pool.acquire_with(Shot::default);

        assert_eq!(pool.len(), 1);
        assert!(pool.active().next().is_none());
    }
}
