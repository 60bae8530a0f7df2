//! Constants for named elliptic-curve groups
//!
//! Only the quantities scalar arithmetic depends on are recorded here:
//! the group order `n` (big-endian), the native field-element width in
//! bytes, the cofactor, and the OpenSSL NID under which the curve is
//! commonly identified. Field primes, coefficients, and base points are
//! deliberately absent; point arithmetic is out of scope for this
//! workspace.

/// Parameters of one named elliptic-curve group
pub struct CurveConstants {
    /// Canonical curve name (OpenSSL short name)
    pub name: &'static str,
    /// OpenSSL numeric identifier for the curve
    pub nid: i32,
    /// Width of a field element / serialized scalar in bytes
    pub field_size: usize,
    /// Group order n, big-endian
    pub n: &'static [u8],
    /// Cofactor h
    pub h: u32,
}

/// secp256k1 (the Bitcoin curve)
///
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
pub const SECP256K1: CurveConstants = CurveConstants {
    name: "secp256k1",
    nid: 714,
    field_size: 32,
    n: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ],
    h: 1,
};

/// NIST P-256 (prime256v1 / secp256r1)
///
/// n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
pub const NIST_P256: CurveConstants = CurveConstants {
    name: "prime256v1",
    nid: 415,
    field_size: 32,
    n: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x51,
    ],
    h: 1,
};

/// NIST P-384 (secp384r1)
///
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF
///     581A0DB248B0A77AECEC196ACCC52973
pub const NIST_P384: CurveConstants = CurveConstants {
    name: "secp384r1",
    nid: 715,
    field_size: 48,
    n: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC7, 0x63, 0x4D, 0x81, 0xF4, 0x37,
        0x2D, 0xDF, 0x58, 0x1A, 0x0D, 0xB2, 0x48, 0xB0, 0xA7, 0x7A, 0xEC, 0xEC, 0x19, 0x6A, 0xCC,
        0xC5, 0x29, 0x73,
    ],
    h: 1,
};
