use std::collections::HashMap;
use std::sync::Mutex;

use numpy::PyReadonlyArray2;
use once_cell::sync::Lazy;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::fp::growth::{fp_growth_algorithm, min_count, MiningParams};
use crate::fp::{transactions_from_dense, FpError, FpGrowth, MiningConfig};

type Rule = (Vec<String>, Vec<String>, f64, f64, f64, f64);

// Fitted models held between calls, keyed by the id handed to Python
static MODELS: Lazy<Mutex<HashMap<usize, FpGrowth<String>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));
static NEXT_ID: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));

impl From<FpError> for PyErr {
    fn from(err: FpError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn with_model<R>(id: usize, f: impl FnOnce(&mut FpGrowth<String>) -> PyResult<R>) -> PyResult<R> {
    let mut models = MODELS
        .lock()
        .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))?;
    let model = models
        .get_mut(&id)
        .ok_or_else(|| PyValueError::new_err("Invalid model ID"))?;
    f(model)
}

#[pymodule]
fn fpbasket<'py>(m: &Bound<'py, PyModule>) -> PyResult<()> {
    /// Frequent itemsets of a dense 0/1 matrix as (column ids, support) pairs.
    #[pyfn(m)]
    #[pyo3(name = "fp_growth", signature = (transactions, min_support, max_len=None))]
    fn fp_growth_py<'py>(
        transactions: PyReadonlyArray2<'py, i32>,
        min_support: f64,
        max_len: Option<usize>,
    ) -> PyResult<Vec<(Vec<usize>, f64)>> {
        let mut config = MiningConfig::new(min_support, 0.0);
        config.max_len = max_len;
        config.validate()?;

        let rows = transactions_from_dense(transactions.as_array());
        if rows.is_empty() {
            return Err(FpError::EmptyInput.into());
        }
        let total = rows.len() as f64;

        let params = MiningParams {
            min_count: min_count(min_support, rows.len()),
            max_len,
            execution: config.execution,
        };
        let storage = fp_growth_algorithm(&rows, params);

        Ok(storage
            .iter()
            .map(|(items, count)| (items.to_vec(), count as f64 / total))
            .collect())
    }

    #[pyfn(m)]
    #[pyo3(name = "create_model")]
    fn create_model_py(min_support: f64, min_confidence: f64) -> PyResult<usize> {
        let model = FpGrowth::new(min_support, min_confidence)?;

        let mut id_lock = NEXT_ID
            .lock()
            .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))?;
        let id = *id_lock;
        *id_lock += 1;
        drop(id_lock);

        MODELS
            .lock()
            .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))?
            .insert(id, model);

        Ok(id)
    }

    #[pyfn(m)]
    #[pyo3(name = "fit_model")]
    fn fit_model_py(id: usize, transactions: Vec<Vec<String>>) -> PyResult<()> {
        with_model(id, |model| Ok(model.fit(transactions)?))
    }

    #[pyfn(m)]
    #[pyo3(name = "model_itemsets")]
    fn model_itemsets_py(id: usize) -> PyResult<Vec<(Vec<String>, f64)>> {
        with_model(id, |model| {
            Ok(model
                .frequent_itemsets()
                .iter()
                .map(|itemset| (itemset.items.clone(), itemset.support))
                .collect())
        })
    }

    #[pyfn(m)]
    #[pyo3(name = "model_rules", signature = (id, top_n=None))]
    fn model_rules_py(id: usize, top_n: Option<usize>) -> PyResult<Vec<Rule>> {
        with_model(id, |model| {
            Ok(model
                .rules(top_n)
                .iter()
                .map(|rule| {
                    (
                        rule.antecedent.clone(),
                        rule.consequent.clone(),
                        rule.support,
                        rule.confidence,
                        rule.lift,
                        rule.conviction,
                    )
                })
                .collect())
        })
    }

    #[pyfn(m)]
    #[pyo3(name = "drop_model")]
    fn drop_model_py(id: usize) -> PyResult<()> {
        MODELS
            .lock()
            .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))?
            .remove(&id)
            .ok_or_else(|| PyValueError::new_err("Invalid model ID"))?;
        Ok(())
    }

    Ok(())
}
