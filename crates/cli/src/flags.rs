use clap::ValueEnum;
use indent_rainbow_core::{IndentKind, IndentUnit};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum IndentTypeFlag {
    Space,
    Tab,
}

impl IndentTypeFlag {
    pub(crate) const fn as_domain(self) -> IndentKind {
        match self {
            IndentTypeFlag::Space => IndentKind::Space,
            IndentTypeFlag::Tab => IndentKind::Tab,
        }
    }

    /// Unit for `--indent-size N`: N spaces, or N tabs of `tab_width` columns
    pub(crate) const fn unit(self, size: usize, tab_width: usize) -> IndentUnit {
        match self.as_domain() {
            IndentKind::Space => IndentUnit::spaces(size),
            IndentKind::Tab => IndentUnit::tabs(size, tab_width),
        }
    }
}
