use index_vec::IndexVec;
use thiserror::Error;

use crate::geometry::HitRecord;

index_vec::define_index_type! {
    /// Handle of a material stored in a `MaterialTable`.
    /// Primitives only carry the handle, any number of them can share one material.
    pub struct MaterialIdx = u32;
    IMPL_RAW_CONVERSIONS = true;
    DEFAULT = MaterialIdx::from_raw_unchecked(0);
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Material {index:?} is not in the table ({len} materials)")]
pub struct MaterialLookupError {
    pub index: MaterialIdx,
    pub len: usize,
}

/// Storage of materials referenced by primitives.
#[derive(Clone, Debug)]
pub struct MaterialTable<M> {
    materials: IndexVec<MaterialIdx, M>,
}

impl<M> MaterialTable<M> {
    pub fn new() -> Self {
        MaterialTable {
            materials: IndexVec::new(),
        }
    }

    pub fn push(&mut self, material: M) -> MaterialIdx {
        self.materials.push(material)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn get(&self, index: MaterialIdx) -> Result<&M, MaterialLookupError> {
        self.materials.get(index).ok_or(MaterialLookupError {
            index,
            len: self.materials.len(),
        })
    }

    /// Material of the surface that was hit.
    pub fn resolve(&self, rec: &HitRecord) -> Result<&M, MaterialLookupError> {
        self.get(rec.material)
    }
}

impl<M> Default for MaterialTable<M> {
    fn default() -> Self {
        Self::new()
    }
}
