//! Well-Known Binary, including the PostGIS EWKB SRID extension on the reading side.

mod read;
mod write;

pub use byteorder::{BigEndian, LittleEndian};
pub use read::*;
pub use write::*;

const SRID_FLAG: u32 = 0x2000_0000;
const M_FLAG: u32 = 0x4000_0000;
const Z_FLAG: u32 = 0x8000_0000;
