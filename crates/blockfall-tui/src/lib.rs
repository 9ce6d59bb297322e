pub use self::cell_canvas::CellCanvas;

mod cell_canvas;
