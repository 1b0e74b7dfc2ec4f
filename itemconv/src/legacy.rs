//! Generation 1 to generation 2 held item fix-ups.
//!
//! Generation 1 stores a catch rate where later generations store the held
//! item. When a record crosses the link cable, generation 2 keeps that byte as
//! the held item unless it is one of a few codes that name no real item
//! there, which are rewritten to Leftovers, Bitter Berry, Gold Berry or Berry.
//!
//! Reference: <https://github.com/pret/pokecrystal/blob/edb624c20ceb50eef9d73a5df0ac041cc156dd32/engine/link/link.asm#L1093-L1115>

use std::collections::HashSet;

use log::debug;

const LEFTOVERS: u8 = 0x92;
const BITTER_BERRY: u8 = 0x53;
const BERRY: u8 = 0xAD;
const GOLD_BERRY: u8 = 0xAE;

/// Placeholder codes and the item the link routine substitutes for each.
const LEGACY_REMAP: [(u8, u8); 12] = [
    (0x19, LEFTOVERS),
    (0x2D, BITTER_BERRY),
    (0x32, GOLD_BERRY),
    (0x5A, BERRY),
    (0x64, BERRY),
    (0x78, BERRY),
    (0x87, BERRY),
    (0xBE, BERRY),
    (0xC3, BERRY),
    (0xDC, BERRY),
    (0xFA, BERRY),
    (0xFF, BERRY),
];

/// Last generation 2 item code (HM07).
const LAST_GSC_ITEM: u8 = 0xF9;

/// Set of generation 2 codes that transfer from generation 1 unchanged.
pub trait TransferAllowList {
    fn allows(&self, item: u16) -> bool;
}

impl TransferAllowList for [u16] {
    fn allows(&self, item: u16) -> bool {
        self.contains(&item)
    }
}

impl<const N: usize> TransferAllowList for [u16; N] {
    fn allows(&self, item: u16) -> bool {
        self.contains(&item)
    }
}

impl TransferAllowList for Vec<u16> {
    fn allows(&self, item: u16) -> bool {
        self.contains(&item)
    }
}

impl TransferAllowList for HashSet<u16> {
    fn allows(&self, item: u16) -> bool {
        self.contains(&item)
    }
}

impl<T: TransferAllowList + ?Sized> TransferAllowList for &T {
    fn allows(&self, item: u16) -> bool {
        (**self).allows(item)
    }
}

/// Every generation 2 item code that can be held, i.e. `1..=0xF9` minus the
/// placeholder codes in the link routine's remap table.
#[derive(Clone, Copy, Debug, Default)]
pub struct GscHeldItems;

static GSC_HELD_ITEMS: [bool; 256] = build_gsc_held_items();

const fn build_gsc_held_items() -> [bool; 256] {
    let mut items = [false; 256];
    let mut code = 1;
    while code <= LAST_GSC_ITEM as usize {
        items[code] = true;
        code += 1;
    }

    let mut i = 0;
    while i < LEGACY_REMAP.len() {
        items[LEGACY_REMAP[i].0 as usize] = false;
        i += 1;
    }
    items
}

impl GscHeldItems {
    pub fn iter(&self) -> impl Iterator<Item = u16> {
        (0u16..256).filter(|&code| GSC_HELD_ITEMS[code as usize])
    }
}

impl TransferAllowList for GscHeldItems {
    fn allows(&self, item: u16) -> bool {
        GSC_HELD_ITEMS
            .get(item as usize)
            .copied()
            .unwrap_or(false)
    }
}

pub fn is_item_transferrable_12(item: u16) -> bool {
    GscHeldItems.allows(item)
}

/// Applies the link routine's substitution table, ignoring any allow-list.
pub fn remap_legacy_item(item: u8) -> u8 {
    LEGACY_REMAP
        .iter()
        .find(|&&(from, _)| from == item)
        .map_or(item, |&(_, to)| to)
}

/// Converts a generation 1 held item to generation 2 using [GscHeldItems].
pub fn legacy_remap_g1_to_g2(item: u8) -> u8 {
    legacy_remap_g1_to_g2_with(item, &GscHeldItems)
}

/// Converts a generation 1 held item to generation 2.
///
/// Items on `allow_list` pass through as-is. Anything else goes through the
/// substitution table, and codes in neither pass through unchanged too.
pub fn legacy_remap_g1_to_g2_with<L: TransferAllowList + ?Sized>(item: u8, allow_list: &L) -> u8 {
    if allow_list.allows(item.into()) {
        return item;
    }

    let remapped = remap_legacy_item(item);
    if remapped != item {
        debug!("remapped legacy item {item:#04x} to {remapped:#04x}");
    }
    remapped
}
