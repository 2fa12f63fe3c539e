/// SharedOctree: an Octree behind one coarse-grained lock.
///
/// The octree itself needs `&mut self` to insert, which is enough inside
/// a single owner. When several threads need the same tree, wrap it here:
/// inserts take the write lock (a subdivision is never observed half
/// built), queries take the read lock and may run concurrently.
///
/// Lock poisoning (a thread panicked while holding the write lock) is
/// reported as `Error::LockPoisoned` and logged.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::error::{log_and_return_error, Error, Result};
use crate::geometry::{Point, Region};
use super::octree::Octree;

const SOURCE: &str = "sim::SharedOctree";

/// Cloneable, thread-safe handle to one Octree.
pub struct SharedOctree<T> {
    inner: Arc<RwLock<Octree<T>>>,
}

impl<T> Clone for SharedOctree<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedOctree<T> {
    /// Take ownership of an octree and share it.
    pub fn new(octree: Octree<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(octree)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Octree<T>>> {
        self.inner.read().map_err(|_| {
            log_and_return_error(SOURCE, Error::LockPoisoned("octree read lock".to_string()))
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Octree<T>>> {
        self.inner.write().map_err(|_| {
            log_and_return_error(SOURCE, Error::LockPoisoned("octree write lock".to_string()))
        })
    }

    /// Insert a point under the write lock.
    ///
    /// The inner `bool` is the octree's own accept/reject result.
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the lock is poisoned.
    pub fn insert(&self, point: Point<T>) -> Result<bool> {
        Ok(self.write()?.insert(point))
    }

    /// Number of stored points.
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Run `f` with shared read access to the tree.
    ///
    /// Query results borrow the tree, so they must be consumed inside `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use sim_octree::sim::{Octree, Point, Region, SharedOctree};
    ///
    /// let shared = SharedOctree::new(Octree::new(Region::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0), 4)?);
    /// shared.insert(Point::new(1.0, 1.0, 1.0, "beacon"))?;
    ///
    /// let window = Region::new(0.0, 0.0, 0.0, 2.0, 2.0, 2.0);
    /// let hits = shared.with_read(|tree| tree.query(&window).len())?;
    /// assert_eq!(hits, 1);
    /// # Ok::<(), sim_octree::sim::Error>(())
    /// ```
    pub fn with_read<R>(&self, f: impl FnOnce(&Octree<T>) -> R) -> Result<R> {
        let guard = self.read()?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive write access to the tree.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut Octree<T>) -> R) -> Result<R> {
        let mut guard = self.write()?;
        Ok(f(&mut guard))
    }
}

impl<T: Clone> SharedOctree<T> {
    /// Query under the read lock and return owned copies of the matches.
    ///
    /// # Errors
    ///
    /// Returns `Error::LockPoisoned` if the lock is poisoned.
    pub fn query_cloned(&self, range: &Region) -> Result<Vec<Point<T>>> {
        let tree = self.read()?;
        Ok(tree.query(range).into_iter().cloned().collect())
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
