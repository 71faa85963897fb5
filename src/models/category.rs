//! Category enum representing the three curatable graph shapes.

use std::str::FromStr;

use clap::ValueEnum;

/// Fixed categories of the blueprint configuration graph.
///
/// The category decides which display projection and reconstruction
/// shape apply, and which files a session reads and writes:
/// `_{category}.ttl` in, `{category}.ttl` out, `{category}.conf` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    Classes,
    Links,
    Details,
}

impl Category {
    /// Returns a static slice of all categories.
    pub fn all() -> &'static [Category] {
        &[Category::Classes, Category::Links, Category::Details]
    }

    /// Lowercase name used in file names and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Classes => "classes",
            Category::Links => "links",
            Category::Details => "details",
        }
    }

    /// Input graph file name: `_{category}.ttl`.
    pub fn input_file(&self) -> String {
        format!("_{}.ttl", self.as_str())
    }

    /// Output subgraph file name: `{category}.ttl`.
    pub fn output_file(&self) -> String {
        format!("{}.ttl", self.as_str())
    }

    /// Selection state file name: `{category}.conf`.
    pub fn state_file(&self) -> String {
        format!("{}.conf", self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classes" => Ok(Category::Classes),
            "links" => Ok(Category::Links),
            "details" => Ok(Category::Details),
            _ => Err(format!(
                "Invalid category '{}'. Valid values: classes, links, details",
                s
            )),
        }
    }
}
