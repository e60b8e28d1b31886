use std::{io, vec};

pub trait ByteWriter: Sized {
    fn write_u8(&mut self, value: u8);
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_u8(b);
        }
    }
    fn write_u16(&mut self, value: u16) {
        self.write_u8(value as u8);
        self.write_u8((value >> 8) as u8);
    }
    fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16);
    }
    fn write_u32(&mut self, value: u32) {
        self.write_u16(value as u16);
        self.write_u16((value >> 16) as u16);
    }
    fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }
    fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }
    fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    /// Writes a string preceded by its byte length as a single byte.
    fn write_string_u8(&mut self, value: &str) -> Result<(), WriterErr> {
        let len = value.len();
        if len > u8::MAX as usize {
            return Err(WriterErr::StringTooLong(len));
        }
        self.write_u8(len as u8);
        self.write_bytes(value.as_bytes());
        Ok(())
    }

    /// Writes a string into a NUL-padded field of `N` bytes, truncating the excess.
    fn write_fixed_str<const N: usize>(&mut self, value: &str) {
        let mut field = [0_u8; N];
        let bytes = value.as_bytes();
        let len = bytes.len().min(N);
        field[..len].copy_from_slice(&bytes[..len]);
        self.write_bytes(&field);
    }
}

impl ByteWriter for Vec<u8> {
    fn write_u8(&mut self, value: u8) {
        self.push(value);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn write_u16(&mut self, value: u16) {
        self.extend_from_slice(&value.to_le_bytes());
    }

    fn write_u32(&mut self, value: u32) {
        self.extend_from_slice(&value.to_le_bytes());
    }
}


pub trait ByteReader {
    fn read_u8(&mut self) -> Result<u8, ReaderErr>;
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReaderErr> {
        let mut out = [0_u8; N];
        for b in out.iter_mut() {
            *b = self.read_u8()?;
        }
        Ok(out)
    }
    fn read_u16(&mut self) -> Result<u16, ReaderErr> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }
    fn read_i16(&mut self) -> Result<i16, ReaderErr> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }
    fn read_u32(&mut self) -> Result<u32, ReaderErr> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }
    fn read_i32(&mut self) -> Result<i32, ReaderErr> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }
    fn read_f32(&mut self) -> Result<f32, ReaderErr> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }
    /// Any non-zero byte reads as `true`.
    fn read_bool(&mut self) -> Result<bool, ReaderErr> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a string preceded by its byte length as a single byte.
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_string_u8(&mut self) -> Result<String, ReaderErr> {
        let len = self.read_u8()? as usize;
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            bytes.push(self.read_u8()?);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Reads a NUL-padded field of `N` bytes. The content ends at the first NUL.
    fn read_fixed_str<const N: usize>(&mut self) -> Result<String, ReaderErr> {
        let field = self.read_array::<N>()?;
        let end = field.iter().position(|&b| b == 0).unwrap_or(N);
        Ok(String::from_utf8_lossy(&field[..end]).into_owned())
    }
}

impl ByteReader for vec::IntoIter<u8> {
    fn read_u8(&mut self) -> Result<u8, ReaderErr> {
        self.next().ok_or(ReaderErr::NotEnoughData)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReaderErr> {
        let slice = self.as_slice();
        if slice.len() < N {
            return Err(ReaderErr::NotEnoughData);
        }
        let mut out = [0_u8; N];
        out.copy_from_slice(&slice[..N]);
        if N > 0 {
            self.nth(N - 1);
        }
        Ok(out)
    }
}


/// Adapts any `io::Read` to `ByteReader`.
pub struct StreamReader<R> {
    inner: R,
}

impl<R: io::Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: io::Read> ByteReader for StreamReader<R> {
    fn read_u8(&mut self) -> Result<u8, ReaderErr> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReaderErr> {
        let mut out = [0_u8; N];
        self.inner.read_exact(&mut out)?;
        Ok(out)
    }
}


#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErr {
    #[error("I/O error while reading: {0:?}")]
    Io(io::ErrorKind),
    #[error("Not enough data to read")]
    NotEnoughData,
}

impl From<io::Error> for ReaderErr {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => ReaderErr::NotEnoughData,
            kind => ReaderErr::Io(kind),
        }
    }
}

#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterErr {
    #[error("String of {0} bytes does not fit a one-byte length prefix")]
    StringTooLong(usize),
}
