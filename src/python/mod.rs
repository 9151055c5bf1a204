//! Python bindings for the name-slots picker engine.
//!
//! # Quick Start
//!
//! ```python
//! import name_slots as ns
//!
//! engine = ns.PickerEngine(mode="triple", seed=42)
//! engine.add_name("Grace")
//!
//! grid = engine.begin_spin()       # outcome fixed, start the animation
//! for _ in range(60):
//!     frame = engine.preview_frame()
//! grid, result = engine.finish_spin()
//!
//! print(result.headline, result.winners)
//! engine.remove_winners()
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// name_slots: a slot-machine random name picker.
#[pymodule]
fn name_slots(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPickerEngine>()?;
    m.add_class::<PySpinResult>()?;
    Ok(())
}
