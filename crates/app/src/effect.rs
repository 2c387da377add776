//! Side effects returned by the reducer, executed by the orchestrator.

use gridfit_domain::overrides::OverrideMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Widths changed; the host should reapply its per-column style values.
    Render,

    /// A sizing decision was finalized. Carries the full replacement
    /// override set; the host persists it and supplies it back on the next
    /// mount.
    PersistOverrides(OverrideMap),

    /// Run one batched measurement pass over the given columns and feed the
    /// results back as `MeasureReport` actions.
    RequestMeasure { columns: Vec<String> },
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_render() {
        assert!(Effect::Render.is_render());
        assert!(
            !Effect::RequestMeasure {
                columns: vec!["name".into()]
            }
            .is_render()
        );
    }
}
