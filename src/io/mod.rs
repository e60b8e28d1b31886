pub mod obj;

use std::path::Path;

use crate::core::model::{Err, ModelFile};

/// On-disk model formats.
#[remain::sorted]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Current binary format.
    Binary,
    /// Deprecated binary layouts. Written as revision 1, version 2.
    Legacy,
    /// Current text format.
    Text,
}

impl Format {
    pub fn read_file<P: AsRef<Path>>(self, model: &mut ModelFile, path: P) -> Result<(), Err> {
        match self {
            Format::Binary => model.read_binary_model_file(path),
            Format::Legacy => model.read_model_file(path),
            Format::Text => model.read_text_model_file(path),
        }
    }

    pub fn write_file<P: AsRef<Path>>(self, model: &ModelFile, path: P) -> Result<(), Err> {
        match self {
            Format::Binary => model.write_binary_model_file(path),
            Format::Legacy => model.write_model_file(path),
            Format::Text => model.write_text_model_file(path),
        }
    }
}
