//! Generation specific item tables.
//!
//! Each table is indexed by a generation's own item code and holds the
//! matching canonical (generation 4 onward) code. Slots for items with no
//! canonical counterpart hold [NO_EQUIVALENT].

use crate::common::{Generation, NO_EQUIVALENT, NO_ITEM};

const NA: u16 = NO_EQUIVALENT;

/// A fixed mapping from one generation's item codes to canonical codes.
#[derive(Debug)]
pub struct ItemTable {
    generation: Generation,
    entries: &'static [u16],
}

impl ItemTable {
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of slots. Valid native codes are `0..len()`.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts a native code to its canonical code.
    ///
    /// Codes past the end of the table yield [NO_EQUIVALENT], as do slots
    /// whose item never made it into the canonical space.
    pub fn canonical(&self, code: u16) -> u16 {
        self.entries
            .get(code as usize)
            .copied()
            .unwrap_or(NO_EQUIVALENT)
    }

    /// Converts a canonical code back to this generation's native code.
    ///
    /// Scans from index 0 and returns the first match, so when several
    /// native codes share a canonical code the lowest one wins. Returns
    /// [NO_ITEM] for [NO_EQUIVALENT] and for codes this generation can't
    /// represent.
    pub fn native(&self, canonical: u16) -> u16 {
        if canonical == NO_EQUIVALENT {
            return NO_ITEM;
        }

        self.entries
            .iter()
            .position(|&entry| entry == canonical)
            .map_or(NO_ITEM, |index| index as u16)
    }

    /// All `(native, canonical)` pairs in native order, sentinels included.
    pub fn entries(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(native, &canonical)| (native as u16, canonical))
    }

    /// Highest native code that maps to a real canonical item.
    pub fn last_populated(&self) -> Option<u16> {
        self.entries()
            .filter(|&(_, canonical)| canonical != NO_ITEM && canonical != NO_EQUIVALENT)
            .map(|(native, _)| native)
            .last()
    }
}

pub static G2_ITEMS: ItemTable = ItemTable {
    generation: Generation::Gen2,
    entries: &G2_TO_CANONICAL,
};

pub static G3_ITEMS: ItemTable = ItemTable {
    generation: Generation::Gen3,
    entries: &G3_TO_CANONICAL,
};

pub fn forward_lookup_g2(code: u8) -> u16 {
    G2_ITEMS.canonical(code.into())
}

pub fn forward_lookup_g3(code: u16) -> u16 {
    G3_ITEMS.canonical(code)
}

pub fn inverse_lookup_g2(canonical: u16) -> u8 {
    // The generation 2 table has exactly 256 slots.
    G2_ITEMS.native(canonical) as u8
}

pub fn inverse_lookup_g3(canonical: u16) -> u16 {
    G3_ITEMS.native(canonical)
}

/// Whether a generation 3 held item survives the move to generation 4.
pub fn is_item_transferrable_34(item: u16) -> bool {
    item != NO_EQUIVALENT && item > 0
}

#[rustfmt::skip]
const G2_TO_CANONICAL: [u16; 256] = [
      0,   1,   2, 213,   3,   4,  NA, 450,  81,  18, // 0
     19,  20,  21,  22,  23,  24,  25,  26,  17,  78, // 10
     79,  41,  82,  83,  84,  NA,  45,  46,  47,  48, // 20
    256,  49,  50,  60,  85, 257,  92,  63,  27,  28, // 30
     29,  55,  76,  77,  56,  NA,  30,  31,  32,  57, // 40
     NA,  58,  59,  61, 444,  NA,  NA, 216, 445, 446, // 50
     NA, 447,  51,  38,  39,  40, 478, 464, 456, 484, // 60
     NA, 482,  33, 217, 151,  NA, 237, 244, 149, 153, // 70
    152, 245, 221, 156, 150, 485,  86,  87, 222, 487, // 80
     NA, 223, 486, 488, 224, 243, 248, 490, 241, 491, // 90
     NA, 489, 240, 473,  NA, 259, 228, 246, 242, 157, // 100
     88,  89, 229, 247, 504,  NA,  NA, 239, 258, 230, // 110
     NA,  34,  35,  36,  37, 238, 231, 475, 481,  NA, // 120
     NA,  90,  91, 476, 480,  NA,  NA,  NA, 249,  43, // 130
    232,  NA,  NA, 233, 250,  NA, 234,  NA,  NA,  NA, // 140
    154, 235,  NA,  NA,  NA,  NA,  44, 495,  NA, 493, // 150
     NA, 492,  NA, 236, 497, 498, 496,  NA,  NA,  80, // 160
     NA,  NA, 252, 155, 158, 477,  NA, 500, 483,  NA, // 170
     NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 180
     NA, 328, 329, 330, 331, 331, 332, 333, 334, 335, // 190
    336, 337, 338, 339, 340, 341, 342, 343, 344, 345, // 200
    346, 347, 348, 349, 350, 351, 352, 353, 354, 355, // 210
    355, 356, 357, 358, 359, 360, 361, 362, 363, 364, // 220
    365, 366, 367, 368, 369, 370, 371, 372, 373, 374, // 230
    375, 376, 377, 420, 421, 422, 423, 424, 425, 426, // 240
    427,  NA,  NA,  NA,  NA,  NA, // 250
];

#[rustfmt::skip]
const G3_TO_CANONICAL: [u16; 339] = [
      0,   1,   2,   3,   4,   5,   6,   7,   8,   9, // 0
     10,  11,  12,  17,  18,  19,  20,  21,  22,  23, // 10
     24,  25,  26,  27,  28,  29,  30,  31,  32,  33, // 20
     34,  35,  36,  37,  38,  39,  40,  41,  42,  65, // 30
     66,  67,  68,  69,  43,  44,  70,  71,  72,  73, // 40
     74,  75,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 50
     NA,  NA,  NA,  45,  46,  47,  48,  49,  50,  51, // 60
     52,  53,  NA,  55,  56,  57,  58,  59,  60,  61, // 70
     63,  64,  NA,  76,  77,  78,  79,  NA,  NA,  NA, // 80
     NA,  NA,  NA,  80,  81,  82,  83,  84,  85,  NA, // 90
     NA,  NA,  NA,  86,  87,  NA,  88,  89,  90,  91, // 100
     92,  93,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 110
     NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 120
     NA,  NA,  NA, 149, 150, 151, 152, 153, 154, 155, // 130
    156, 157, 158, 159, 160, 161, 162, 163, 164, 165, // 140
    166, 167, 168, 169, 170, 171, 172, 173, 174, 175, // 150
    176, 177, 178, 179, 180, 181, 182, 183, 201, 202, // 160
    203, 204, 205, 206, 207, 208,  NA,  NA,  NA, 213, // 170
    214, 215, 216, 217, 218, 219, 220, 221, 222, 223, // 180
    224, 225, 226, 227, 228, 229, 230, 231, 232, 233, // 190
    234, 235, 236, 237, 238, 239, 240, 241, 242, 243, // 200
    244, 245, 246, 247, 248, 249, 250, 251, 252, 253, // 210
    254, 255, 256, 257, 258, 259,  NA,  NA,  NA,  NA, // 220
     NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 230
     NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 240
     NA,  NA,  NA,  NA, 260, 261, 262, 263, 264,  NA, // 250
     NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 260
     NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, // 270
     NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA,  NA, 328, // 280
    329, 330, 331, 332, 333, 334, 335, 336, 337, 338, // 290
    339, 340, 341, 342, 343, 344, 345, 346, 347, 348, // 300
    349, 350, 351, 352, 353, 354, 355, 356, 357, 358, // 310
    359, 360, 361, 362, 363, 364, 365, 366, 367, 368, // 320
    369, 370, 371, 372, 373, 374, 375, 376, 377, // 330
];
