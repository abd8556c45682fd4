//! Human-readable byte sizes
//!
//! Tiers sit on binary (1024) boundaries. KB and MB carry one decimal, GB
//! carries two. Rounding is half-up on the exact quotient, which is what
//! `toFixed` produces for these inputs since every quotient by a power of
//! two is exactly representable.

/// Placeholder for any value the host could not supply
pub const NOT_AVAILABLE: &str = "Not Available";

const KIB: u128 = 1024;
const MIB: u128 = KIB * 1024;
const GIB: u128 = MIB * 1024;

/// Format a byte count, or [`NOT_AVAILABLE`] when there is none
pub fn format_bytes(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return NOT_AVAILABLE.to_string();
    };
    let b = u128::from(bytes);

    if b < KIB {
        format!("{b} B")
    } else if b < MIB {
        fixed(b, KIB, 1, "KB")
    } else if b < GIB {
        fixed(b, MIB, 1, "MB")
    } else {
        fixed(b, GIB, 2, "GB")
    }
}

/// `bytes / unit` with `decimals` fractional digits, ties rounded up
fn fixed(bytes: u128, unit: u128, decimals: u32, suffix: &str) -> String {
    let scale = 10u128.pow(decimals);
    let scaled = (bytes * scale + unit / 2) / unit;
    format!(
        "{}.{:0width$} {suffix}",
        scaled / scale,
        scaled % scale,
        width = decimals as usize
    )
}
