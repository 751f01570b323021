//! Observation epochs: per satellite measurement rows
mod lli;
mod parsing;
mod record;
mod ssi;

pub use lli::LliFlags;
pub use record::{EpochRecord, ObservationField};
pub use ssi::{Error as SsiError, Ssi};

pub(crate) use parsing::{decode_epoch, RecordError};
