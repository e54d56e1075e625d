use bitflags::bitflags;

bitflags! {
    /// Where a message is written. Writes happen in the order
    /// `FILE`, `CONSOLE`, `DATABASE` regardless of how the set was built.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Destinations: u8 {
        const FILE = 1;
        const CONSOLE = 1 << 1;
        const DATABASE = 1 << 2;
    }
}

impl Destinations {
    /// Boolean selector form.
    #[must_use]
    pub fn from_flags(file: bool, console: bool, database: bool) -> Self {
        let mut d = Self::empty();
        d.set(Self::FILE, file);
        d.set(Self::CONSOLE, console);
        d.set(Self::DATABASE, database);
        d
    }
}
