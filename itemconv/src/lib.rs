pub mod common;
pub mod convert;
pub mod legacy;
pub mod tables;

pub use common::{Generation, NO_EQUIVALENT, NO_ITEM};
pub use convert::{convert_held_item, HeldItemTransfer};
pub use legacy::{
    is_item_transferrable_12, legacy_remap_g1_to_g2, legacy_remap_g1_to_g2_with, GscHeldItems,
    TransferAllowList,
};
pub use tables::{
    forward_lookup_g2, forward_lookup_g3, inverse_lookup_g2, inverse_lookup_g3,
    is_item_transferrable_34, ItemTable,
};
