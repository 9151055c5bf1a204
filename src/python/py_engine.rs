//! Engine bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameMode, PickerConfig, PickerError, PickerRng, PickerRngState};
use crate::engine::PickerEngine;
use crate::rules::SpinResult;

fn to_py_err(err: PickerError) -> PyErr {
    match err {
        PickerError::CannotSpin(_) | PickerError::InvalidState(_) => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for SpinResult.
#[pyclass(name = "SpinResult")]
#[derive(Clone, Debug)]
pub struct PySpinResult(pub SpinResult);

#[pymethods]
impl PySpinResult {
    /// Result kind: "single", "jackpot" or "triple".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            SpinResult::Single { .. } => "single",
            SpinResult::Jackpot { .. } => "jackpot",
            SpinResult::Triple { .. } => "triple",
        }
    }

    #[getter]
    fn winners(&self) -> Vec<String> {
        self.0.winners().to_vec()
    }

    #[getter]
    fn headline(&self) -> String {
        self.0.headline()
    }

    #[getter]
    fn message(&self) -> &'static str {
        self.0.message()
    }

    fn is_jackpot(&self) -> bool {
        self.0.is_jackpot()
    }

    fn __repr__(&self) -> String {
        format!("SpinResult({}, {:?})", self.kind(), self.0.winners())
    }
}

/// Python wrapper for PickerEngine.
///
/// Owns two RNG streams: one for outcomes, one for animation frames.
#[pyclass(name = "PickerEngine")]
pub struct PyPickerEngine {
    engine: PickerEngine,
    rng: PickerRng,
    frames: PickerRng,
}

#[pymethods]
impl PyPickerEngine {
    /// Create an engine. `names=None` seeds the sample roster.
    #[new]
    #[pyo3(signature = (names=None, mode="single", seed=None))]
    fn new(names: Option<Vec<String>>, mode: &str, seed: Option<u64>) -> PyResult<Self> {
        let mut config = PickerConfig::default().with_mode(mode.parse::<GameMode>().map_err(to_py_err)?);
        if let Some(names) = names {
            config = config.with_names(names);
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        let rng = config.rng();
        let frames = rng.for_context("animation");
        let engine = PickerEngine::new(config).map_err(to_py_err)?;
        Ok(Self { engine, rng, frames })
    }

    /// Add a name. Returns False for blank or duplicate input.
    fn add_name(&mut self, name: &str) -> bool {
        self.engine.add_name(name).is_ok()
    }

    fn remove_name(&mut self, name: &str) -> bool {
        self.engine.remove_name(name)
    }

    fn clear(&mut self) {
        self.engine.clear();
    }

    fn set_mode(&mut self, mode: &str) -> PyResult<()> {
        let mode: GameMode = mode.parse().map_err(to_py_err)?;
        self.engine.set_mode(mode).map_err(to_py_err)
    }

    /// Start a spin and return the fixed outcome grid.
    fn begin_spin(&mut self) -> PyResult<Vec<String>> {
        let grid = self.engine.begin_spin(&mut self.rng).map_err(to_py_err)?;
        Ok(grid.cells().to_vec())
    }

    fn finish_spin(&mut self) -> PyResult<(Vec<String>, PySpinResult)> {
        let (grid, result) = self.engine.finish_spin().map_err(to_py_err)?;
        Ok((grid.cells().to_vec(), PySpinResult(result)))
    }

    fn spin(&mut self) -> PyResult<(Vec<String>, PySpinResult)> {
        let (grid, result) = self.engine.spin(&mut self.rng).map_err(to_py_err)?;
        Ok((grid.cells().to_vec(), PySpinResult(result)))
    }

    fn remove_winners(&mut self) -> PyResult<Vec<String>> {
        let removed = self.engine.remove_winners().map_err(to_py_err)?;
        Ok(removed.into_vec())
    }

    /// A throwaway grid for an animation frame.
    fn preview_frame(&mut self) -> Vec<String> {
        self.engine.preview_frame(&mut self.frames).cells().to_vec()
    }

    fn shuffle_display(&mut self) -> PyResult<Vec<String>> {
        let grid = self.engine.shuffle_display(&mut self.frames).map_err(to_py_err)?;
        Ok(grid.cells().to_vec())
    }

    #[getter]
    fn names(&self) -> Vec<String> {
        self.engine.roster().iter().map(str::to_string).collect()
    }

    #[getter]
    fn grid(&self) -> Vec<String> {
        self.engine.grid().cells().to_vec()
    }

    #[getter]
    fn mode(&self) -> String {
        self.engine.mode().to_string()
    }

    #[getter]
    fn mode_label(&self) -> &'static str {
        self.engine.mode().label()
    }

    #[getter]
    fn spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    #[getter]
    fn result(&self) -> Option<PySpinResult> {
        self.engine.last_result().cloned().map(PySpinResult)
    }

    #[getter]
    fn headline(&self) -> String {
        self.engine.headline()
    }

    fn is_winner(&self, name: &str) -> bool {
        self.engine.is_winner(name)
    }

    /// Pending events as JSON strings, oldest first.
    fn drain_events(&mut self) -> PyResult<Vec<String>> {
        self.engine
            .drain_events()
            .iter()
            .map(|e| serde_json::to_string(e).map_err(|e| PyValueError::new_err(e.to_string())))
            .collect()
    }

    /// Outcome stream position as JSON, for resuming a session.
    fn rng_state(&self) -> PyResult<String> {
        serde_json::to_string(&self.rng.state()).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Resume the outcome stream from `rng_state()` output.
    fn restore_rng(&mut self, state: &str) -> PyResult<()> {
        let state: PickerRngState =
            serde_json::from_str(state).map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.rng = PickerRng::from_state(&state);
        self.frames = self.rng.for_context("animation");
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "PickerEngine(names={}, mode={}, spinning={})",
            self.engine.roster().len(),
            self.engine.mode(),
            self.engine.is_spinning()
        )
    }
}
