//! Per-row verdict vector produced by conditions.

/// One boolean verdict per table row, in table order.
///
/// `true` means the row satisfies the condition. The mask length must equal
/// the table height; the rule layer rejects masks that do not line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMask {
    valid: Vec<bool>,
}

impl RowMask {
    /// Wraps a verdict vector; `valid[i]` is the verdict for row `i`.
    pub fn from_valid(valid: Vec<bool>) -> Self {
        Self { valid }
    }

    /// Mask accepting every row of a table with `height` rows.
    pub fn all_valid(height: usize) -> Self {
        Self {
            valid: vec![true; height],
        }
    }

    pub fn len(&self) -> usize {
        self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    /// Verdict for one row. Rows outside the mask are invalid.
    pub fn is_valid(&self, row: usize) -> bool {
        self.valid.get(row).copied().unwrap_or(false)
    }

    /// Positions of offending rows, ascending.
    pub fn invalid_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.valid
            .iter()
            .enumerate()
            .filter(|&(_, &ok)| !ok)
            .map(|(idx, _)| idx)
    }

    pub fn invalid_count(&self) -> usize {
        self.valid.iter().filter(|&&ok| !ok).count()
    }
}

impl FromIterator<bool> for RowMask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            valid: iter.into_iter().collect(),
        }
    }
}
