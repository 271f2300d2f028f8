use hashbrown::{HashMap, HashSet};
use sculpt_geom::IVec3;

pub const DEFAULT_BUCKET: i32 = 16;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoxelStoreStats {
    pub buckets: usize,
    pub voxels: usize,
}

/// Set of occupied grid cells, bucketed by chunk. Emptied buckets are
/// dropped, so `stats().buckets` counts only chunks that hold voxels.
#[derive(Debug, Clone)]
pub struct VoxelStore {
    size: i32,
    // key=(cx,cy,cz) -> occupied world cells in that chunk
    inner: HashMap<(i32, i32, i32), HashSet<IVec3>>,
    count: usize,
}

impl Default for VoxelStore {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET)
    }
}

impl VoxelStore {
    pub fn new(bucket: i32) -> Self {
        Self {
            size: bucket.max(1),
            inner: HashMap::new(),
            count: 0,
        }
    }

    #[inline]
    fn bucket_key(&self, c: IVec3) -> (i32, i32, i32) {
        (
            c.x.div_euclid(self.size),
            c.y.div_euclid(self.size),
            c.z.div_euclid(self.size),
        )
    }

    pub fn stats(&self) -> VoxelStoreStats {
        VoxelStoreStats {
            buckets: self.inner.len(),
            voxels: self.count,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, c: IVec3) -> bool {
        self.inner
            .get(&self.bucket_key(c))
            .is_some_and(|s| s.contains(&c))
    }

    /// Returns false if the cell was already occupied.
    pub fn insert(&mut self, c: IVec3) -> bool {
        let k = self.bucket_key(c);
        let added = self.inner.entry(k).or_default().insert(c);
        if added {
            self.count += 1;
        }
        added
    }

    /// Returns false if the cell was empty.
    pub fn remove(&mut self, c: IVec3) -> bool {
        let k = self.bucket_key(c);
        let Some(set) = self.inner.get_mut(&k) else {
            return false;
        };
        let removed = set.remove(&c);
        if removed {
            self.count -= 1;
            if set.is_empty() {
                self.inner.remove(&k);
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.count = 0;
    }

    /// Every occupied cell, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.inner.values().flat_map(|s| s.iter().copied())
    }

    /// Occupied cells sorted by (x, y, z), for stable output.
    pub fn sorted(&self) -> Vec<IVec3> {
        let mut v: Vec<IVec3> = self.iter().collect();
        v.sort();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_counts() {
        let mut store = VoxelStore::new(4);
        assert!(store.insert(IVec3::new(0, 0, 0)));
        assert!(!store.insert(IVec3::new(0, 0, 0)));
        assert!(store.insert(IVec3::new(-1, 5, 3)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.stats(), VoxelStoreStats { buckets: 2, voxels: 2 });

        assert!(store.remove(IVec3::new(-1, 5, 3)));
        assert!(!store.remove(IVec3::new(-1, 5, 3)));
        // emptied bucket is dropped
        assert_eq!(store.stats(), VoxelStoreStats { buckets: 1, voxels: 1 });
    }

    #[test]
    fn negative_cells_bucket_with_floor_division() {
        let mut store = VoxelStore::new(4);
        store.insert(IVec3::new(-1, -1, -1));
        store.insert(IVec3::new(-4, -4, -4));
        // both negative cells share bucket (-1,-1,-1)
        assert_eq!(store.stats(), VoxelStoreStats { buckets: 1, voxels: 2 });
        store.insert(IVec3::new(0, 0, 0));
        store.insert(IVec3::new(3, 3, 3));
        assert_eq!(store.stats(), VoxelStoreStats { buckets: 2, voxels: 4 });
        assert!(store.contains(IVec3::new(-4, -4, -4)));
        assert!(!store.contains(IVec3::new(-5, -4, -4)));
        assert!(store.remove(IVec3::new(-1, -1, -1)));
        assert!(store.contains(IVec3::new(-4, -4, -4)));
        assert_eq!(store.stats().buckets, 2);
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = VoxelStore::default();
        for i in 0..40 {
            store.insert(IVec3::new(i, -i, i * 2));
        }
        assert_eq!(store.len(), 40);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn sorted_is_stable() {
        let mut store = VoxelStore::default();
        store.insert(IVec3::new(3, 0, 0));
        store.insert(IVec3::new(-3, 0, 0));
        store.insert(IVec3::new(0, 1, 0));
        assert_eq!(
            store.sorted(),
            vec![IVec3::new(-3, 0, 0), IVec3::new(0, 1, 0), IVec3::new(3, 0, 0)]
        );
    }
}
