//! Shared test utilities: synthesized FIT fixtures
//!
//! Fixtures are assembled from the FIT wire layout directly (14-byte header,
//! definition and data messages, trailing CRC-16) so conversions exercise the
//! real decoder rather than a stub.

use std::path::{Path, PathBuf};

// FIT base type identifiers
pub const BASE_ENUM: u8 = 0x00;
pub const BASE_UINT8: u8 = 0x02;
pub const BASE_UINT16: u8 = 0x84;

// Global message numbers
const MESG_FILE_ID: u16 = 0;
const MESG_RECORD: u16 = 20;

// "record" message field definitions: (field number, size, base type)
pub const FIELD_HEART_RATE: (u8, u8, u8) = (3, 1, BASE_UINT8);
pub const FIELD_CADENCE: (u8, u8, u8) = (4, 1, BASE_UINT8);
pub const FIELD_POWER: (u8, u8, u8) = (7, 2, BASE_UINT16);

/// Builder for a little-endian FIT file body, finished by [`build`] which
/// prepends the header and appends the file CRC.
///
/// [`build`]: FitFixture::build
pub struct FitFixture {
    body: Vec<u8>,
}

impl FitFixture {
    /// Start a fixture with a file_id message (type: activity,
    /// manufacturer: garmin) under local type 0.
    pub fn new() -> Self {
        let mut fixture = Self { body: Vec::new() };
        fixture.define(0, MESG_FILE_ID, &[(0, 1, BASE_ENUM), (1, 2, BASE_UINT16)]);
        fixture.data(0, &[4, 1, 0]);
        fixture
    }

    /// Append a definition message for the "record" global message under the
    /// given local type.
    pub fn define_record(&mut self, local: u8, fields: &[(u8, u8, u8)]) {
        self.define(local, MESG_RECORD, fields);
    }

    fn define(&mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) {
        self.body.push(0x40 | local);
        self.body.push(0x00); // reserved
        self.body.push(0x00); // little-endian
        self.body.extend_from_slice(&global.to_le_bytes());
        self.body.push(fields.len() as u8);
        for &(number, size, base_type) in fields {
            self.body.extend_from_slice(&[number, size, base_type]);
        }
    }

    /// Append a data message under the given local type.
    pub fn data(&mut self, local: u8, payload: &[u8]) {
        self.body.push(local);
        self.body.extend_from_slice(payload);
    }

    /// Assemble the complete file: header (with header CRC), body, file CRC.
    pub fn build(&self) -> Vec<u8> {
        let mut header = Vec::with_capacity(14);
        header.push(14); // header size
        header.push(0x20); // protocol version 2.0
        header.extend_from_slice(&2132u16.to_le_bytes()); // profile version
        header.extend_from_slice(&(self.body.len() as u32).to_le_bytes());
        header.extend_from_slice(b".FIT");
        let header_crc = crc16(&header);
        header.extend_from_slice(&header_crc.to_le_bytes());

        let mut bytes = header;
        bytes.extend_from_slice(&self.body);
        let file_crc = crc16(&bytes);
        bytes.extend_from_slice(&file_crc.to_le_bytes());
        bytes
    }
}

/// A FIT file whose "record" messages each carry heart_rate and cadence.
pub fn fit_with_records(samples: &[(u8, u8)]) -> Vec<u8> {
    let mut fixture = FitFixture::new();
    fixture.define_record(1, &[FIELD_HEART_RATE, FIELD_CADENCE]);
    for &(heart_rate, cadence) in samples {
        fixture.data(1, &[heart_rate, cadence]);
    }
    fixture.build()
}

/// Two "record" messages with disjoint field sets: the first carries only
/// heart_rate (120), the second only power (250).
pub fn fit_with_disjoint_fields() -> Vec<u8> {
    let mut fixture = FitFixture::new();
    fixture.define_record(1, &[FIELD_HEART_RATE]);
    fixture.define_record(2, &[FIELD_POWER]);
    fixture.data(1, &[120]);
    fixture.data(2, &250u16.to_le_bytes());
    fixture.build()
}

/// A valid FIT file containing no "record" messages at all.
pub fn fit_without_records() -> Vec<u8> {
    FitFixture::new().build()
}

/// Write fixture bytes under `dir` and return the full path.
pub fn write_fit(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

// FIT CRC-16, nibble table driven
fn crc16(data: &[u8]) -> u16 {
    const TABLE: [u16; 16] = [
        0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
        0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
    ];
    let mut crc: u16 = 0;
    for &byte in data {
        let tmp = TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc = crc ^ tmp ^ TABLE[(byte & 0xF) as usize];
        let tmp = TABLE[(crc & 0xF) as usize];
        crc = (crc >> 4) & 0x0FFF;
        crc = crc ^ tmp ^ TABLE[((byte >> 4) & 0xF) as usize];
    }
    crc
}
