//! Universal VTT interchange for battlemap
//!
//! Bidirectional mapping between the internal world-unit map model and the
//! UVTT/DD2VTT JSON format used to move maps between virtual-tabletop
//! tools. All legacy-format concerns (grid-unit wire coordinates, packed
//! `RRGGBBAA` colors, `pixels_per_grid` naming) are isolated here.

mod codec;
mod color;
mod document;
mod error;

pub use codec::{decode, encode, export_file_name, from_json_str, to_json_string, UvttFlavor};
pub use color::{pack_color, unpack_color, MIN_IMPORT_OPACITY};
pub use document::{
    Environment, LightDocument, PortalDocument, Resolution, UvttDocument, UVTT_FORMAT_VERSION,
};
pub use error::UvttError;
