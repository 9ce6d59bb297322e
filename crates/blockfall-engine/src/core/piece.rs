use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Block, Canvas, Color, DEFAULT_BLOCK_SIZE, Point, Rect};

/// One of the seven standard piece kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::FromStr,
)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// Every kind, in table order.
    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::J,
        Self::L,
        Self::O,
        Self::S,
        Self::T,
        Self::Z,
    ];

    /// Single-letter representation of this kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::J => 'J',
            Self::L => 'L',
            Self::O => 'O',
            Self::S => 'S',
            Self::T => 'T',
            Self::Z => 'Z',
        }
    }

    /// Parses a kind from its single-letter representation.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::I),
            'J' => Some(Self::J),
            'L' => Some(Self::L),
            'O' => Some(Self::O),
            'S' => Some(Self::S),
            'T' => Some(Self::T),
            'Z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Fixed fill color of this kind, shared with the title palette.
    #[must_use]
    pub fn color(self) -> Color {
        PIECE_COLORS[self as usize]
    }

    /// Rotation states of this kind, each holding the four grid offsets of
    /// the piece's cells relative to its anchor.
    #[must_use]
    pub fn rotation_states(self) -> &'static [RotationState] {
        ROTATION_TABLES[self as usize]
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Four cell offsets of one piece orientation.
pub type RotationState = [Point; 4];

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

const I_STATES: [RotationState; 2] = [
    [p(0, 0), p(1, 0), p(2, 0), p(3, 0)],
    [p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
];

const J_STATES: [RotationState; 4] = [
    [p(0, 0), p(1, 0), p(2, 0), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(0, 2)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 0), p(0, 1), p(0, 2), p(1, 0)],
];

const L_STATES: [RotationState; 4] = [
    [p(0, 0), p(1, 0), p(2, 0), p(0, 1)],
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 0)],
    [p(0, 0), p(0, 1), p(0, 2), p(1, 2)],
];

const O_STATES: [RotationState; 1] = [[p(0, 0), p(1, 0), p(0, 1), p(1, 1)]];

// S and Z offsets are normalized per state, so their shapes repeat with
// period 2; the rotation cycle still has four states.
const S_STATES: [RotationState; 4] = [
    [p(0, 1), p(1, 1), p(1, 0), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 0), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
];

const T_STATES: [RotationState; 4] = [
    [p(0, 0), p(1, 0), p(2, 0), p(1, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(0, 1)],
    [p(0, 1), p(1, 1), p(2, 1), p(1, 0)],
    [p(0, 0), p(0, 1), p(0, 2), p(1, 1)],
];

const Z_STATES: [RotationState; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    [p(0, 2), p(0, 1), p(1, 1), p(1, 0)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    [p(0, 2), p(0, 1), p(1, 1), p(1, 0)],
];

static ROTATION_TABLES: [&[RotationState]; PieceKind::LEN] = [
    &I_STATES, &J_STATES, &L_STATES, &O_STATES, &S_STATES, &T_STATES, &Z_STATES,
];

const PIECE_COLORS: [Color; PieceKind::LEN] = [
    Color::rgb(45, 255, 254),  // I
    Color::rgb(11, 36, 251),   // J
    Color::rgb(253, 164, 40),  // L
    Color::rgb(255, 253, 56),  // O
    Color::rgb(41, 253, 47),   // S
    Color::rgb(169, 38, 251),  // T
    Color::rgb(252, 13, 27),   // Z
];

/// A falling piece: kind, current rotation state, and board-grid anchor.
///
/// Rotation only cycles the state index; collision and wall-kick checks
/// belong to the caller, which can probe candidate placements through
/// [`test_points`](Self::test_points) and
/// [`next_rotation_points`](Self::next_rotation_points) before committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetrimino {
    kind: PieceKind,
    rotate_index: usize,
    point: Point,
    size: Option<i32>,
}

impl Tetrimino {
    /// Fresh piece of the given kind in its spawn orientation, anchored at
    /// the origin.
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotate_index: 0,
            point: Point::ORIGIN,
            size: None,
        }
    }

    /// Fresh piece horizontally centered on a board `board_width` cells
    /// wide, anchored at the top row.
    #[must_use]
    pub fn spawned(kind: PieceKind, board_width: i32) -> Self {
        let mut piece = Self::new(kind);
        piece.point = Point::new((board_width - piece.width()) / 2, 0);
        piece
    }

    /// Same piece rendered with the given block pixel size instead of
    /// [`DEFAULT_BLOCK_SIZE`].
    #[must_use]
    pub fn with_size(self, size: i32) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Anchor position in board-grid coordinates.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    #[must_use]
    pub fn rotate_index(&self) -> usize {
        self.rotate_index
    }

    /// Pixel size of one block of this piece.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size.unwrap_or(DEFAULT_BLOCK_SIZE)
    }

    fn states(&self) -> &'static [RotationState] {
        self.kind.rotation_states()
    }

    /// Advances to the next rotation state, cycling back to the spawn
    /// orientation after the last one.
    pub fn rotate(&mut self) {
        self.rotate_index = (self.rotate_index + 1) % self.states().len();
    }

    /// Cell offsets of the current rotation state, relative to the anchor.
    #[must_use]
    pub fn origin_points(&self) -> &'static RotationState {
        &self.states()[self.rotate_index]
    }

    /// The four cells of the current rotation state as renderable blocks,
    /// still relative to the piece's own origin.
    #[must_use]
    pub fn blocks(&self) -> [Block; 4] {
        let size = self.size();
        self.origin_points()
            .map(|p| Block::new(p, self.kind.color(), size))
    }

    /// Like [`blocks`](Self::blocks), translated to absolute board-grid
    /// coordinates.
    #[must_use]
    pub fn placed_blocks(&self) -> [Block; 4] {
        self.blocks().map(|b| b.translated(self.point))
    }

    /// Absolute grid cells occupied at the current rotation and position.
    /// Canonical input for an external collision or lock check.
    #[must_use]
    pub fn current_points(&self) -> [Point; 4] {
        self.test_points(Point::ORIGIN)
    }

    /// Absolute grid cells the piece would occupy if translated by an
    /// additional `offset` from its current position.
    #[must_use]
    pub fn test_points(&self, offset: Point) -> [Point; 4] {
        self.origin_points().map(|p| p + self.point + offset)
    }

    /// Absolute grid cells the piece would occupy after one more rotation,
    /// without mutating the piece.
    #[must_use]
    pub fn next_rotation_points(&self) -> [Point; 4] {
        let next = (self.rotate_index + 1) % self.states().len();
        self.states()[next].map(|p| p + self.point)
    }

    /// Bounding width of the current rotation state in grid cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.origin_points().iter().fold(0, |w, p| w.max(p.x)) + 1
    }

    /// Draws the four blocks at the piece's board position.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for block in self.blocks() {
            block.draw_from(self.point, canvas);
        }
    }

    /// Draws the spawn orientation inside a square panel in the canvas's
    /// top-right corner, sized from the scoreboard panel height. Each cell
    /// is a bordered outer square with an inset filled square.
    pub fn draw_preview(&self, canvas: &mut impl Canvas, scoreboard_height: i32) {
        const PADDING: i32 = 10;
        let preview_size = scoreboard_height - PADDING;
        let block_size = preview_size / 4;
        let block_spacing = block_size / 5;
        // The I piece is the only kind occupying one grid row at spawn.
        let rows = if self.kind == PieceKind::I { 1 } else { 2 };

        let offset_x = (preview_size - self.width() * block_size) / 2;
        let offset_y = (preview_size - rows * block_size) / 2;

        let panel = Rect::new(
            canvas.width() - preview_size - PADDING / 2,
            PADDING / 2,
            preview_size,
            preview_size,
        );
        canvas.draw_rect(panel, Color::WHITE);

        for point in &self.states()[0] {
            let x = point.x * block_size + panel.x + offset_x;
            let y = point.y * block_size + panel.y + offset_y;
            let border = Rect::new(x, y, block_size, block_size);
            let fill = Rect::new(
                x + block_spacing,
                y + block_spacing,
                block_size - block_spacing * 2,
                block_size - block_spacing * 2,
            );
            canvas.draw_rect(border, Color::WHITE);
            canvas.fill_rect(fill, self.kind.color());
        }
    }
}
