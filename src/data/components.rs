//! PCA components offered by the axis dropdowns.

/// Number of PCA components the panel lets the user choose from.
pub const MAX_PCA_COMPONENTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PcaComponent {
    pub index: usize,
    /// Fraction of the total variance explained by this component (0..=1).
    pub variance: f64,
}

impl PcaComponent {
    /// Dropdown label, e.g. `Component #1 (var 42.0%)`.
    pub fn label(&self) -> String {
        format!(
            "Component #{} (var {:.1}%)",
            self.index.saturating_add(1),
            self.variance * 100.0
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentCatalog {
    components: Vec<PcaComponent>,
}

impl ComponentCatalog {
    /// Build the catalog from explained-variance fractions, ordered by
    /// component rank. Anything past [`MAX_PCA_COMPONENTS`] is dropped.
    pub fn from_variances(variances: &[f64]) -> Self {
        let components = variances
            .iter()
            .take(MAX_PCA_COMPONENTS)
            .enumerate()
            .map(|(index, &variance)| PcaComponent { index, variance })
            .collect();
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.components.len()
    }

    pub fn get(&self, index: usize) -> Option<&PcaComponent> {
        self.components.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PcaComponent> {
        self.components.iter()
    }

    /// Label for `index`, falling back to a bare `Component #n` when the
    /// variance is not known.
    pub fn label(&self, index: usize) -> String {
        self.get(index)
            .map(PcaComponent::label)
            .unwrap_or_else(|| format!("Component #{}", index.saturating_add(1)))
    }

    /// Share of the total variance described by the given components.
    /// Unknown indices contribute nothing.
    pub fn total_variance(&self, indices: &[usize]) -> f64 {
        indices
            .iter()
            .filter_map(|&i| self.get(i))
            .map(|c| c.variance)
            .sum()
    }
}
