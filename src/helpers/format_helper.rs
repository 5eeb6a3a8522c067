const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Human-readable size: bytes below 1 KiB, one-decimal KB below 1 MiB,
/// one-decimal MB otherwise.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}
