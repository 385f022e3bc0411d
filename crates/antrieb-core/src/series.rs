// File: crates/antrieb-core/src/series.rs
// Summary: Named value series aligned to the dataset's date axis.
// Notes:
// - Missing cells are `None`, never a NaN sentinel, so gaps cannot leak into
//   extents or distance comparisons.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` for a gap or an out-of-range index.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Min/max over defined values; `None` when every value is missing.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut it = self.values.iter().flatten().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Runs of consecutive defined values as `(start_index, values)`.
    /// A line generator draws one sub-path per run.
    pub fn segments(&self) -> Vec<(usize, Vec<f64>)> {
        let mut out = Vec::new();
        let mut current: Option<(usize, Vec<f64>)> = None;
        for (i, v) in self.values.iter().enumerate() {
            let Some(v) = *v else {
                if let Some(run) = current.take() {
                    out.push(run);
                }
                continue;
            };
            if let Some((_, run)) = current.as_mut() {
                run.push(v);
            } else {
                current = Some((i, vec![v]));
            }
        }
        if let Some(run) = current {
            out.push(run);
        }
        out
    }
}

/// Parse a numeric cell. Blank or non-numeric text becomes a gap.
pub fn parse_cell(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
