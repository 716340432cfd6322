use clap::ValueEnum;

/// How `change_directory` treats the last component of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CdMode {
    /// The directory holding the last component becomes the cwd; the last
    /// component itself is never entered. `cd /a/b` lands in `/a`.
    #[default]
    Parent,
    /// The full path must name an existing directory, which becomes the cwd.
    Descend,
}
