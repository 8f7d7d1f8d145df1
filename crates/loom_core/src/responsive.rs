//! Responsive override resolution
//!
//! A block stores its desktop data as the base and optional partial
//! overrides for narrower breakpoints. Resolution layers the overrides that
//! apply at the active breakpoint on top of the base, widest first, so a
//! narrower breakpoint wins over a wider one and any key it leaves out keeps
//! the next-wider value.
//!
//! ```text
//! desktop:  base
//! tablet:   base ← tablet
//! mobile:   base ← tablet ← mobile
//! ```
//!
//! The merge is shallow: an override key replaces the base value wholesale.
//! Overrides are not checked against the block's schema here; that is the
//! data owner's job.

use crate::breakpoint::Breakpoint;
use crate::data::BlockData;
use crate::model::{Block, ResponsiveOverrides};

/// Effective data for `active`, given base data and optional overrides
pub fn resolve(
    base: &BlockData,
    overrides: Option<&ResponsiveOverrides>,
    active: Breakpoint,
) -> BlockData {
    let mut resolved = base.clone();

    let Some(overrides) = overrides else {
        return resolved;
    };

    for level in active.cascade() {
        if let Some(layer) = overrides.for_breakpoint(*level) {
            for (key, value) in layer {
                resolved.insert(key.clone(), value.clone());
            }
        }
    }

    resolved
}

/// [`resolve`] applied to a block's own data and overrides
pub fn resolve_block(block: &Block, active: Breakpoint) -> BlockData {
    resolve(&block.data, block.responsive_overrides.as_ref(), active)
}
