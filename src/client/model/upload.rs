/// File picked in the browser, read into memory before upload.
#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl SelectedFile {
    /// Size in MiB with one decimal, for display next to the file name.
    pub fn size_mib(&self) -> String {
        format!("{:.1} MiB", self.data.len() as f64 / (1024.0 * 1024.0))
    }
}
