/// A writer that places fields at fixed offsets of a zero-filled buffer.
///
/// Callers size the buffer up front, so every offset is in bounds.
#[derive(Debug, Clone)]
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub(crate) fn new(len: usize) -> Self {
        Self { buf: vec![0; len] }
    }

    #[inline]
    pub(crate) fn write_bytes(&mut self, offset: usize, bytes: &[u8]) {
        self.buf[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    #[inline]
    pub(crate) fn write_byte(&mut self, offset: usize, byte: u8) {
        self.buf[offset] = byte;
    }

    #[inline]
    pub(crate) fn write_u16_be(&mut self, offset: usize, value: u16) {
        self.write_bytes(offset, &value.to_be_bytes());
    }

    #[inline]
    pub(crate) fn write_u16_le(&mut self, offset: usize, value: u16) {
        self.write_bytes(offset, &value.to_le_bytes());
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.buf
    }
}
