/// A bounds-checked reader over a byte buffer.
#[derive(Debug, Clone)]
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    #[inline]
    pub(crate) fn jump(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// The number of bytes left after the current offset.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    #[inline]
    pub(crate) fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        let v = self.peek_bytes(len)?;
        self.offset += len;
        Some(v)
    }

    #[inline]
    pub(crate) fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.read_bytes(N)?.try_into().ok()
    }

    #[inline]
    pub(crate) fn read_u16_be(&mut self) -> Option<u16> {
        Some(u16::from_be_bytes(self.read_array()?))
    }

    #[inline]
    pub(crate) fn read_u16_le(&mut self) -> Option<u16> {
        Some(u16::from_le_bytes(self.read_array()?))
    }

    #[inline]
    pub(crate) fn peek_bytes(&self, len: usize) -> Option<&'a [u8]> {
        let end = self.offset.checked_add(len)?;
        self.data.get(self.offset..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_byte_order() {
        let mut r = Reader::new(&[0x01, 0x02, 0x01, 0x02]);
        assert_eq!(r.read_u16_be(), Some(0x0102));
        assert_eq!(r.read_u16_le(), Some(0x0201));
        assert_eq!(r.read_u16_le(), None);
    }

    #[test]
    fn short_read_does_not_advance() {
        let mut r = Reader::new(&[1, 2, 3]);
        r.jump(2);
        assert_eq!(r.read_bytes(2), None);
        assert_eq!(r.remaining(), 1);
        assert_eq!(r.read_bytes(1), Some(&[3][..]));
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn jump_past_end() {
        let mut r = Reader::new(&[1, 2]);
        r.jump(10);
        assert_eq!(r.remaining(), 0);
        assert_eq!(r.peek_bytes(0), None);
    }
}
