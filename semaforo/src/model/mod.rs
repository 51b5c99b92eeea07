// reune las piezas del modelo

mod phase;

pub use phase::Phase;
