//! Heap objects and generation regions.

use serde::Serialize;

/// The heap region a managed object currently lives in.
///
/// Eden and the two survivor spaces form the young generation; objects that
/// survive collection long enough are promoted to the old generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    /// Eden space, where new objects are born
    Eden,
    /// Survivor space 0
    Survivor0,
    /// Survivor space 1
    Survivor1,
    /// Old (tenured) generation
    Old,
}

impl Region {
    /// Returns true for Eden and the survivor spaces.
    pub fn is_young(self) -> bool {
        !matches!(self, Region::Old)
    }
}

/// A simulated heap object.
///
/// Objects are created by the allocation engine with a monotonically
/// increasing id that is never reused. Only the collection engine changes an
/// object's region (promotion) or removes it (reclamation).
///
/// # Examples
///
/// ```
/// use sim_types::{ManagedObject, Region};
///
/// let obj = ManagedObject::new(7);
/// assert_eq!(obj.id, 7);
/// assert_eq!(obj.region, Region::Eden);
/// assert_eq!(obj.name(), "Obj_7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedObject {
    /// Unique allocation id
    pub id: u64,
    /// Region the object currently occupies
    pub region: Region,
}

impl ManagedObject {
    /// Creates a new object in Eden with the given id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            region: Region::Eden,
        }
    }

    /// Display name of the object.
    pub fn name(&self) -> String {
        format!("Obj_{}", self.id)
    }
}
