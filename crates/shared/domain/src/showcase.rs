use serde::Serialize;

/// A row of the showcase "tools" table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    pub id: u32,
    pub name: &'static str,
    pub version: &'static str,
    pub downloads: u64,
}

/// Column titles of the showcase table, in render order.
pub const PACKAGE_COLUMNS: [&str; 4] = ["ID", "Tool Name", "Version", "Downloads"];

/// The fixed records rendered by the showcase page.
pub const SAMPLE_PACKAGES: [Package; 4] = [
    Package { id: 1, name: "HTML Minifier", version: "1.2.0", downloads: 12_500 },
    Package { id: 2, name: "CSS Optimizer", version: "2.1.3", downloads: 8_900 },
    Package { id: 3, name: "JS Compressor", version: "3.0.5", downloads: 21_500 },
    Package { id: 4, name: "Image Compressor", version: "1.0.8", downloads: 17_800 },
];
