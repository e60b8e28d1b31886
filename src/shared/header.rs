use crate::core::bit_coder::{ByteReader, ByteWriter, ReaderErr};

/// Version number of the current binary and text formats.
pub const CURRENT_VERSION: i32 = 1;

/// Width of the NUL-padded texture name field of legacy triangles.
pub const LEGACY_TEXTURE_NAME_LEN: usize = 20;

/// Header of the deprecated binary layouts. The (revision, version) pair
/// selects the triangle layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyHeader {
    pub revision: i32,
    pub version: i32,
    pub total_triangles: i32,
    pub reserved: [i32; 10],
}

impl LegacyHeader {
    /// Header written by the legacy encoder.
    pub fn current(total_triangles: i32) -> Self {
        Self {
            revision: 1,
            version: 2,
            total_triangles,
            reserved: [0; 10],
        }
    }

    pub fn read_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
        where R: ByteReader
    {
        let revision = reader.read_i32()?;
        let version = reader.read_i32()?;
        let total_triangles = reader.read_i32()?;
        let mut reserved = [0; 10];
        for r in reserved.iter_mut() {
            *r = reader.read_i32()?;
        }
        Ok(Self { revision, version, total_triangles, reserved })
    }

    pub fn write_to<W>(&self, writer: &mut W)
        where W: ByteWriter
    {
        writer.write_i32(self.revision);
        writer.write_i32(self.version);
        writer.write_i32(self.total_triangles);
        for &r in self.reserved.iter() {
            writer.write_i32(r);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelHeader {
    pub version: i32,
    pub total_triangles: i32,
}

impl ModelHeader {
    pub fn read_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
        where R: ByteReader
    {
        Ok(Self {
            version: reader.read_i32()?,
            total_triangles: reader.read_i32()?,
        })
    }

    pub fn write_to<W>(&self, writer: &mut W)
        where W: ByteWriter
    {
        writer.write_i32(self.version);
        writer.write_i32(self.total_triangles);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_header() {
        let mut buffer = Vec::new();
        LegacyHeader::current(7).write_to(&mut buffer);
        assert_eq!(buffer.len(), 13 * 4);
        assert_eq!(&buffer[..12], &[1, 0, 0, 0, 2, 0, 0, 0, 7, 0, 0, 0]);
        assert!(buffer[12..].iter().all(|&b| b == 0));

        let header = LegacyHeader::read_from(&mut buffer.into_iter()).unwrap();
        assert_eq!(header, LegacyHeader::current(7));
    }

    #[test]
    fn test_legacy_header_ignores_reserved() {
        let mut buffer = Vec::new();
        for v in [1, 1, 3, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9] {
            buffer.write_i32(v);
        }
        let header = LegacyHeader::read_from(&mut buffer.into_iter()).unwrap();
        assert_eq!((header.revision, header.version, header.total_triangles), (1, 1, 3));
    }

    #[test]
    fn test_truncated_header() {
        let buffer = vec![1, 0, 0, 0, 2];
        assert_eq!(ModelHeader::read_from(&mut buffer.into_iter()), Err(ReaderErr::NotEnoughData));
    }
}
