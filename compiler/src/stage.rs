use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// Stage of a file whose name ends in `.vert` or `.frag`.
    ///
    /// Only the suffix is looked at, so `.frag` on its own is a fragment
    /// shader and names that are not valid UTF-8 still match.
    pub fn from_file_name(name: &OsStr) -> Option<ShaderStage> {
        let name = name.to_string_lossy();
        ShaderStage::ALL
            .into_iter()
            .find(|stage| name.ends_with(stage.suffix()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<ShaderStage> {
        ShaderStage::from_file_name(path.as_ref().file_name()?)
    }

    fn suffix(self) -> &'static str {
        match self {
            ShaderStage::Vertex => ".vert",
            ShaderStage::Fragment => ".frag",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}
