/// The icons shown in the dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Person,
    Message,
    Call,
    Camera,
    Photo,
}

impl Icon {
    /// Initial dock order.
    pub const ALL: [Icon; 5] = [
        Icon::Person,
        Icon::Message,
        Icon::Call,
        Icon::Camera,
        Icon::Photo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Person => "person",
            Icon::Message => "message",
            Icon::Call => "call",
            Icon::Camera => "camera",
            Icon::Photo => "photo",
        }
    }

    /// Single-cell glyph drawn in the middle of the tile.
    pub fn glyph(self) -> char {
        match self {
            Icon::Person => '☺',
            Icon::Message => '✉',
            Icon::Call => '☎',
            Icon::Camera => '◉',
            Icon::Photo => '▣',
        }
    }
}
