use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Every resource kind in the economy. [`Resource::Gold`] is the wild token
/// that payment may substitute for any gem shortfall; [`Resource::Prestige`]
/// is a scoring unit and is never held as a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Diamond,
    Sapphire,
    Emerald,
    Ruby,
    Onyx,
    Gold,
    Prestige,
}

/// The five gem kinds in canonical order. The payment resolver settles
/// costs kind by kind in this order.
pub const GEMS: [Resource; 5] = [
    Resource::Diamond,
    Resource::Sapphire,
    Resource::Emerald,
    Resource::Ruby,
    Resource::Onyx,
];

const ALL: [Resource; 7] = [
    Resource::Diamond,
    Resource::Sapphire,
    Resource::Emerald,
    Resource::Ruby,
    Resource::Onyx,
    Resource::Gold,
    Resource::Prestige,
];

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Diamond => "diamond",
            Resource::Sapphire => "sapphire",
            Resource::Emerald => "emerald",
            Resource::Ruby => "ruby",
            Resource::Onyx => "onyx",
            Resource::Gold => "gold",
            Resource::Prestige => "prestige",
        };
        write!(f, "{}", name)
    }
}

/// A fixed-domain multiset over resource kinds.
///
/// Counts are signed: no legal operation leaves a count negative, but
/// subtraction is elementwise and a negative intermediate is exactly how
/// the payment resolver detects a shortfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceVec {
    counts: HashMap<Resource, i16>,
}

impl ResourceVec {
    pub fn empty() -> Self {
        Self {
            counts: ALL.iter().map(|&kind| (kind, 0)).collect(),
        }
    }

    /// A vector over the tradeable kinds, in canonical gem order plus gold.
    pub fn new(diamond: i16, sapphire: i16, emerald: i16, ruby: i16, onyx: i16, gold: i16) -> Self {
        let mut v = Self::empty();
        v.set(Resource::Diamond, diamond);
        v.set(Resource::Sapphire, sapphire);
        v.set(Resource::Emerald, emerald);
        v.set(Resource::Ruby, ruby);
        v.set(Resource::Onyx, onyx);
        v.set(Resource::Gold, gold);
        v
    }

    /// Tally a list of kinds into a vector, one count per occurrence.
    pub fn tally(kinds: &[Resource]) -> Self {
        let mut v = Self::empty();
        for &kind in kinds {
            v.add_to(kind, 1);
        }
        v
    }

    pub fn get(&self, kind: Resource) -> i16 {
        *self.counts.get(&kind).unwrap_or(&0)
    }

    pub fn set(&mut self, kind: Resource, count: i16) {
        self.counts.insert(kind, count);
    }

    pub fn add_to(&mut self, kind: Resource, delta: i16) {
        let count = self.get(kind);
        self.counts.insert(kind, count + delta);
    }

    /// Total token count: gems plus gold, excluding prestige.
    pub fn sum(&self) -> i16 {
        GEMS.iter()
            .map(|&kind| self.get(kind))
            .sum::<i16>()
            + self.get(Resource::Gold)
    }

    pub fn is_non_negative(&self) -> bool {
        ALL.iter().all(|&kind| self.get(kind) >= 0)
    }

    /// Whether this vector, treated as a supply, meets `cost`.
    ///
    /// Every kind must be met outright, or the total gem shortfall must be
    /// absorbable by the supply's gold. Gold is the only substitutable kind.
    pub fn can_afford(&self, cost: &ResourceVec) -> bool {
        let mut short = 0;
        for kind in GEMS {
            let missing = cost.get(kind) - self.get(kind);
            if missing > 0 {
                short += missing;
            }
        }
        self.get(Resource::Gold) - cost.get(Resource::Gold) >= short
    }
}

impl Default for ResourceVec {
    fn default() -> Self {
        Self::empty()
    }
}

impl Add for ResourceVec {
    type Output = ResourceVec;

    fn add(self, rhs: ResourceVec) -> ResourceVec {
        let mut out = self;
        for kind in ALL {
            out.add_to(kind, rhs.get(kind));
        }
        out
    }
}

impl Sub for ResourceVec {
    type Output = ResourceVec;

    fn sub(self, rhs: ResourceVec) -> ResourceVec {
        let mut out = self;
        for kind in ALL {
            out.add_to(kind, -rhs.get(kind));
        }
        out
    }
}
