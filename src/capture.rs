// Classic libpcap capture-file container: one 24-byte global header followed
// by a sequence of records, each with a 16-byte header and a payload of
// exactly `captured_length` bytes.
//
// Error posture (best-effort, like packet tools generally):
// - bad magic / unreadable file: fatal, no records
// - truncated trailing record: stop, keep everything already produced
// - record claiming more than snaplen: skip that record, keep going while
//   the declared length still lands inside the buffer

use std::path::Path;

use crate::cursor::{ByteOrder, Cursor};
use crate::error::PcapLensError;

/// Magic number as written by a capturing host in its native byte order.
pub const MAGIC_NATIVE: u32 = 0xA1B2_C3D4;
/// The same magic observed byte-swapped: the file uses the opposite order.
pub const MAGIC_SWAPPED: u32 = 0xD4C3_B2A1;

const GLOBAL_HEADER_LEN: usize = 24;
const RECORD_HEADER_LEN: usize = 16;

/// Global capture header. Created once per file; its byte order governs
/// every integer field in every record of that file.
#[derive(Debug, Clone)]
pub struct CaptureHeader {
    pub version_major: u16,
    pub version_minor: u16,
    /// GMT offset of the capturing host, seconds.
    pub thiszone: i32,
    /// Timestamp accuracy; in practice always zero.
    pub sigfigs: u32,
    /// Maximum number of bytes captured per packet.
    pub snaplen: u32,
    /// Link-layer type (1 = Ethernet).
    pub linktype: u32,
    pub byte_order: ByteOrder,
}

/// One on-disk packet record. Timestamp seconds and microseconds are kept as
/// the two independent fields the format stores; they are only ever combined
/// at filter or display time.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub ts_sec: u32,
    pub ts_usec: u32,
    pub captured_length: u32,
    pub original_length: u32,
    pub data: Vec<u8>,
}

/// A parsed capture file: validated global header plus the raw file bytes.
///
/// Records are decoded lazily via [`Capture::records`]; each call restarts
/// iteration from the first record, so a caller can stop early and come back.
pub struct Capture {
    header: CaptureHeader,
    buf: Vec<u8>,
}

impl Capture {
    /// Read and parse a capture file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PcapLensError> {
        let buf = std::fs::read(path).map_err(PcapLensError::Io)?;
        Self::from_bytes(buf)
    }

    /// Parse a capture from an in-memory buffer.
    pub fn from_bytes(buf: Vec<u8>) -> Result<Self, PcapLensError> {
        if buf.len() < GLOBAL_HEADER_LEN {
            return Err(PcapLensError::InvalidFormat(format!(
                "file too short for global header: {} bytes",
                buf.len()
            )));
        }

        // The magic is written in the capturing host's byte order. Reading it
        // little-endian and seeing the swapped form means every integer field
        // in the file is big-endian.
        let magic = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let byte_order = match magic {
            MAGIC_NATIVE => ByteOrder::Little,
            MAGIC_SWAPPED => ByteOrder::Big,
            other => return Err(PcapLensError::BadMagic(other)),
        };

        let mut cursor = Cursor::new(&buf[4..GLOBAL_HEADER_LEN], byte_order);
        // Length is pre-checked above, so these cannot fail.
        let header = CaptureHeader {
            version_major: cursor.read_u16().unwrap_or(0),
            version_minor: cursor.read_u16().unwrap_or(0),
            thiszone: cursor.read_i32().unwrap_or(0),
            sigfigs: cursor.read_u32().unwrap_or(0),
            snaplen: cursor.read_u32().unwrap_or(0),
            linktype: cursor.read_u32().unwrap_or(0),
            byte_order,
        };

        log::debug!(
            "capture header: v{}.{}, snaplen {}, linktype {}, {:?} byte order",
            header.version_major,
            header.version_minor,
            header.snaplen,
            header.linktype,
            header.byte_order,
        );

        Ok(Self { header, buf })
    }

    pub fn header(&self) -> &CaptureHeader {
        &self.header
    }

    /// Iterate the records in file order.
    pub fn records(&self) -> Records<'_> {
        Records {
            cursor: Cursor::new(&self.buf[GLOBAL_HEADER_LEN..], self.header.byte_order),
            snaplen: self.header.snaplen,
            index: 0,
        }
    }
}

/// Lazy iterator over the raw records of a [`Capture`].
pub struct Records<'a> {
    cursor: Cursor<'a>,
    snaplen: u32,
    /// 1-based index of the next record, for log messages.
    index: u64,
}

impl Iterator for Records<'_> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        loop {
            if self.cursor.remaining() < RECORD_HEADER_LEN {
                if self.cursor.remaining() > 0 {
                    log::debug!(
                        "{} trailing bytes after record {}, ignoring",
                        self.cursor.remaining(),
                        self.index
                    );
                }
                return None;
            }
            self.index += 1;

            let ts_sec = self.cursor.read_u32()?;
            let ts_usec = self.cursor.read_u32()?;
            let captured_length = self.cursor.read_u32()?;
            let original_length = self.cursor.read_u32()?;

            if captured_length > self.snaplen {
                log::warn!(
                    "record {}: captured length {} exceeds snaplen {}, skipping record",
                    self.index,
                    captured_length,
                    self.snaplen
                );
                // Resume at the next offset the declared length implies, but
                // only while that offset still lands inside the buffer; a
                // declared length past the end means the rest of the stream
                // cannot be trusted.
                if self.cursor.skip(captured_length as usize) {
                    continue;
                }
                return None;
            }

            match self.cursor.take(captured_length as usize) {
                Some(data) => {
                    return Some(RawRecord {
                        ts_sec,
                        ts_usec,
                        captured_length,
                        original_length,
                        data: data.to_vec(),
                    });
                }
                None => {
                    log::debug!(
                        "record {}: payload truncated ({} of {} bytes), stopping",
                        self.index,
                        self.cursor.remaining(),
                        captured_length
                    );
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // CaptureBuilder — assembles synthetic capture files in either byte order
    // -----------------------------------------------------------------------

    pub(crate) struct CaptureBuilder {
        big_endian: bool,
        snaplen: u32,
        linktype: u32,
        bytes: Vec<u8>,
    }

    impl CaptureBuilder {
        pub fn new() -> Self {
            Self {
                big_endian: false,
                snaplen: 65535,
                linktype: 1,
                bytes: Vec::new(),
            }
        }

        pub fn big_endian(mut self) -> Self {
            self.big_endian = true;
            self
        }

        pub fn snaplen(mut self, snaplen: u32) -> Self {
            self.snaplen = snaplen;
            self
        }

        fn put_u16(&mut self, v: u16) {
            if self.big_endian {
                self.bytes.extend_from_slice(&v.to_be_bytes());
            } else {
                self.bytes.extend_from_slice(&v.to_le_bytes());
            }
        }

        fn put_u32(&mut self, v: u32) {
            if self.big_endian {
                self.bytes.extend_from_slice(&v.to_be_bytes());
            } else {
                self.bytes.extend_from_slice(&v.to_le_bytes());
            }
        }

        fn ensure_header(&mut self) {
            if !self.bytes.is_empty() {
                return;
            }
            let (snaplen, linktype) = (self.snaplen, self.linktype);
            self.put_u32(MAGIC_NATIVE);
            self.put_u16(2);
            self.put_u16(4);
            self.put_u32(0); // thiszone
            self.put_u32(0); // sigfigs
            self.put_u32(snaplen);
            self.put_u32(linktype);
        }

        /// Append a record with the given timestamp and payload, caplen =
        /// origlen = payload length.
        pub fn record(self, ts_sec: u32, ts_usec: u32, payload: &[u8]) -> Self {
            self.record_with_caplen(ts_sec, ts_usec, payload.len() as u32, payload)
        }

        /// Append a record with an explicit declared caplen (may disagree
        /// with the payload actually written).
        pub fn record_with_caplen(
            mut self,
            ts_sec: u32,
            ts_usec: u32,
            caplen: u32,
            payload: &[u8],
        ) -> Self {
            self.ensure_header();
            self.put_u32(ts_sec);
            self.put_u32(ts_usec);
            self.put_u32(caplen);
            self.put_u32(payload.len() as u32); // origlen
            self.bytes.extend_from_slice(payload);
            self
        }

        pub fn build(mut self) -> Vec<u8> {
            self.ensure_header();
            self.bytes
        }
    }

    fn collect(bytes: Vec<u8>) -> (CaptureHeader, Vec<RawRecord>) {
        let capture = Capture::from_bytes(bytes).unwrap();
        let header = capture.header().clone();
        let records = capture.records().collect();
        (header, records)
    }

    #[test]
    fn ut_parse_header_little_endian() {
        let (header, records) = collect(CaptureBuilder::new().snaplen(4096).build());
        assert_eq!(header.byte_order, ByteOrder::Little);
        assert_eq!(header.version_major, 2);
        assert_eq!(header.version_minor, 4);
        assert_eq!(header.snaplen, 4096);
        assert_eq!(header.linktype, 1);
        assert!(records.is_empty());
    }

    #[test]
    fn ut_parse_header_big_endian() {
        let (header, _) = collect(CaptureBuilder::new().big_endian().build());
        assert_eq!(header.byte_order, ByteOrder::Big);
        assert_eq!(header.version_major, 2);
        assert_eq!(header.snaplen, 65535);
    }

    #[test]
    fn ut_bad_magic_is_fatal() {
        let mut bytes = CaptureBuilder::new().build();
        bytes[0..4].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        match Capture::from_bytes(bytes) {
            Err(PcapLensError::BadMagic(m)) => assert_eq!(m, 0xDEAD_BEEF),
            Err(e) => panic!("expected BadMagic, got {e:?}"),
            Ok(_) => panic!("expected BadMagic, got a parsed capture"),
        }
    }

    #[test]
    fn ut_short_file_is_fatal() {
        match Capture::from_bytes(vec![0xD4, 0xC3, 0xB2]) {
            Err(PcapLensError::InvalidFormat(_)) => {}
            Err(e) => panic!("expected InvalidFormat, got {e:?}"),
            Ok(_) => panic!("expected InvalidFormat, got a parsed capture"),
        }
    }

    #[test]
    fn ut_records_in_file_order() {
        let bytes = CaptureBuilder::new()
            .record(100, 1, &[0xAA; 20])
            .record(200, 2, &[0xBB; 30])
            .record(300, 3, &[0xCC; 40])
            .build();
        let (_, records) = collect(bytes);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].ts_sec, 100);
        assert_eq!(records[1].ts_sec, 200);
        assert_eq!(records[2].ts_sec, 300);
        assert_eq!(records[1].data, vec![0xBB; 30]);
        assert_eq!(records[2].captured_length, 40);
        assert_eq!(records[2].original_length, 40);
    }

    #[test]
    fn ut_byte_orders_decode_identically() {
        let le = CaptureBuilder::new().record(1000, 500_000, &[1, 2, 3, 4]).build();
        let be = CaptureBuilder::new()
            .big_endian()
            .record(1000, 500_000, &[1, 2, 3, 4])
            .build();
        let (_, le_records) = collect(le);
        let (_, be_records) = collect(be);
        assert_eq!(le_records.len(), 1);
        assert_eq!(be_records.len(), 1);
        assert_eq!(le_records[0].ts_sec, be_records[0].ts_sec);
        assert_eq!(le_records[0].ts_usec, be_records[0].ts_usec);
        assert_eq!(le_records[0].data, be_records[0].data);
    }

    #[test]
    fn ut_truncated_record_header_keeps_prior_records() {
        let mut bytes = CaptureBuilder::new().record(1, 0, &[0xAA; 10]).build();
        bytes.extend_from_slice(&[0x00; 7]); // partial next record header
        let (_, records) = collect(bytes);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn ut_truncated_payload_keeps_prior_records() {
        let bytes = CaptureBuilder::new()
            .record(1, 0, &[0xAA; 10])
            .record_with_caplen(2, 0, 50, &[0xBB; 5]) // claims 50, only 5 present
            .build();
        let (_, records) = collect(bytes);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ts_sec, 1);
    }

    #[test]
    fn ut_caplen_over_snaplen_skips_record_and_continues() {
        // Middle record claims 100 bytes against a snaplen of 64; its payload
        // really is 100 bytes, so the following record parses cleanly.
        let bytes = CaptureBuilder::new()
            .snaplen(64)
            .record(1, 0, &[0xAA; 10])
            .record(2, 0, &[0xBB; 100])
            .record(3, 0, &[0xCC; 10])
            .build();
        let (_, records) = collect(bytes);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ts_sec, 1);
        assert_eq!(records[1].ts_sec, 3);
    }

    #[test]
    fn ut_caplen_over_snaplen_past_buffer_stops() {
        let bytes = CaptureBuilder::new()
            .snaplen(64)
            .record(1, 0, &[0xAA; 10])
            .record_with_caplen(2, 0, 1_000_000, &[0xBB; 5])
            .build();
        let (_, records) = collect(bytes);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn ut_records_iteration_is_restartable() {
        let bytes = CaptureBuilder::new()
            .record(1, 0, &[0xAA; 10])
            .record(2, 0, &[0xBB; 10])
            .build();
        let capture = Capture::from_bytes(bytes).unwrap();
        let first = capture.records().next().unwrap();
        assert_eq!(first.ts_sec, 1);
        // A fresh iterator starts over from the first record.
        assert_eq!(capture.records().count(), 2);
    }
}
