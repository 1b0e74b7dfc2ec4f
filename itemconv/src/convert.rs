use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    common::LEGACY_FORMAT,
    tables::{forward_lookup_g2, forward_lookup_g3, inverse_lookup_g2, inverse_lookup_g3},
};

/// Gets the held item code a record should carry after moving from the
/// `source` save format to the `destination` save format.
///
/// This never fails. Anything that can't be carried across becomes `0`,
/// which is also the code for "nothing held", so callers can't tell an empty
/// slot from an item that was dropped in transit.
///
/// Moving from a legacy format (3 or older) into a newer one returns the
/// canonical code straight from the forward table. That value may be the
/// `NO_EQUIVALENT` sentinel when the source item has no canonical
/// counterpart.
pub fn convert_held_item(item: i32, source: u8, destination: u8) -> i32 {
    if item <= 0 {
        trace!("gen{source} -> gen{destination}: nothing held");
        return 0;
    }

    let mut item = item;
    if destination != source && source <= LEGACY_FORMAT {
        if destination > LEGACY_FORMAT {
            let canonical = if source == 2 {
                forward_lookup_g2(item as u8)
            } else {
                forward_lookup_g3(item as u16)
            };
            trace!("gen{source} item {item} -> canonical {canonical}");
            return canonical.into();
        }

        if destination > source {
            trace!("gen{source} -> gen{destination} can't carry held items");
            return 0;
        }

        // Older destinations resolve through the generation 3 table, then
        // back down into generation 2 numbering.
        let canonical = forward_lookup_g3(item as u16);
        item = inverse_lookup_g2(canonical).into();
        trace!("gen{source} item via canonical {canonical} -> gen2 item {item}");
        if item <= 0 {
            return 0;
        }
    }

    project_to_format(item, destination)
}

/// Final per-format projection of an item code.
fn project_to_format(item: i32, destination: u8) -> i32 {
    match destination {
        3 => {
            let projected: i32 = inverse_lookup_g3(item as u16).into();
            trace!("canonical item {item} -> gen3 item {projected}");
            projected
        }
        2 => {
            trace!("item {item} -> gen2 low byte {}", item & 0xFF);
            item & 0xFF
        }
        1 => {
            trace!("gen1 can't hold item {item}");
            0
        }
        _ => {
            trace!("item {item} kept as is for gen{destination}");
            item
        }
    }
}

/// A held item together with the formats it is moving between.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[cfg_attr(feature = "wasm", derive(tsify::Tsify))]
#[cfg_attr(feature = "wasm", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HeldItemTransfer {
    pub item: i32,
    pub source: u8,
    pub destination: u8,
}

impl HeldItemTransfer {
    pub const fn new(item: i32, source: u8, destination: u8) -> Self {
        Self {
            item,
            source,
            destination,
        }
    }

    pub fn convert(&self) -> i32 {
        convert_held_item(self.item, self.source, self.destination)
    }
}
