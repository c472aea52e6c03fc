pub const SITE_NAME: &str = "Band Vault";

/// Page sizes offered by the pagination selector.
pub const PAGE_SIZES: [u64; 4] = [10, 25, 50, 100];
