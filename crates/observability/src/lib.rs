//! Tracing/logging setup shared by the storefront binaries.

/// Initialize process-wide logging with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::Json);
}

/// Initialize process-wide logging with the given output format.
pub fn init_with(format: tracing::LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

#[cfg(test)]
mod tests {
    #[test]
    fn entry_points_can_be_mixed() {
        super::init();
        super::init_with(super::tracing::LogFormat::Pretty);
        ::tracing::info!("logging after init and init_with");
    }
}
