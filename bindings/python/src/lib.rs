use ::token_alignments::Alignment;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Returns the token alignments `a2b` (from `a` to `b`) and `b2a` (from `b`
/// to `a`).
#[pyfunction]
fn get_alignments(a: Vec<String>, b: Vec<String>) -> PyResult<(Alignment, Alignment)> {
    Ok(::token_alignments::get_alignments(&a, &b))
}

/// Returns the character mappings `c_a2b` (from `a` to `b`) and `c_b2a`
/// (from `b` to `a`).
#[pyfunction]
fn get_charmap(a: &str, b: &str) -> PyResult<(Alignment, Alignment)> {
    Ok(::token_alignments::get_charmap(a, b))
}

/// Kept only to signal removal. Span lookup against the original text lives
/// in the external `textspan` package now.
#[pyfunction]
#[allow(unused_variables)]
fn get_original_spans(tokens: Vec<String>, original_text: String) -> PyResult<()> {
    Err(PyValueError::new_err(
        "get_original_spans was removed. Please use `textspan.get_original_spans` instead.",
    ))
}

/// A Python module implemented in Rust.
#[pymodule]
fn token_alignments(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(get_alignments, m)?)?;
    m.add_function(wrap_pyfunction!(get_charmap, m)?)?;
    m.add_function(wrap_pyfunction!(get_original_spans, m)?)?;
    Ok(())
}
