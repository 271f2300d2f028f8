use proptest::prelude::*;
use sculpt_edit::{Shape, VoxelStore, fill_shape};
use sculpt_geom::IVec3;
use std::collections::BTreeSet;

fn cell() -> impl Strategy<Value = IVec3> {
    (-64i32..64, -64i32..64, -64i32..64).prop_map(|(x, y, z)| IVec3::new(x, y, z))
}

proptest! {
    // Inserting a fresh cell then removing it leaves the store as it was
    #[test]
    fn insert_then_remove_is_identity(seed in prop::collection::vec(cell(), 0..64), c in cell(), bucket in 1i32..9) {
        let mut store = VoxelStore::new(bucket);
        for s in &seed {
            store.insert(*s);
        }
        prop_assume!(!store.contains(c));
        let before = store.sorted();
        prop_assert!(store.insert(c));
        prop_assert!(store.contains(c));
        prop_assert!(store.remove(c));
        prop_assert_eq!(store.sorted(), before);
    }

    // The store behaves like a plain set regardless of bucket size
    #[test]
    fn matches_reference_set(ops in prop::collection::vec((any::<bool>(), cell()), 0..128), bucket in 1i32..9) {
        let mut store = VoxelStore::new(bucket);
        let mut reference = BTreeSet::new();
        for (add, c) in ops {
            if add {
                prop_assert_eq!(store.insert(c), reference.insert(c));
            } else {
                prop_assert_eq!(store.remove(c), reference.remove(&c));
            }
            prop_assert_eq!(store.len(), reference.len());
        }
        prop_assert_eq!(store.sorted(), reference.into_iter().collect::<Vec<_>>());
    }

    // Shapes never leave the [0, size) box and a sphere fits inside the cube
    #[test]
    fn shapes_stay_in_their_box(size in 1i32..20) {
        let mut sphere = VoxelStore::default();
        let mut cube = VoxelStore::default();
        let ns = fill_shape(&mut sphere, Shape::Sphere, size);
        let nc = fill_shape(&mut cube, Shape::Cube, size);
        prop_assert_eq!(nc as i32, size * size * size);
        prop_assert!(ns <= nc);
        for c in sphere.iter() {
            prop_assert!(cube.contains(c));
        }
    }
}
